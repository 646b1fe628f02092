//! Unit tests for table construction and joins

use super::*;
use serde_json::json;

fn roster() -> Table {
    Table::new(
        vec![
            "PERSON_ID".into(),
            "DISPLAY_LAST_COMMA_FIRST".into(),
            "TO_YEAR".into(),
        ],
        vec![
            vec![json!(1), json!("Curry, Stephen"), json!("2019")],
            vec![json!(2), json!("James, LeBron"), json!("2019")],
            vec![json!(3), json!("Rookie, Nobody"), json!("2019")],
        ],
    )
    .unwrap()
}

fn stats() -> Table {
    Table::new(
        vec!["PLAYER_ID".into(), "PTS".into()],
        vec![vec![json!("2"), json!(27.1)], vec![json!(1), json!(23.5)]],
    )
    .unwrap()
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn test_from_result_set_keeps_shape() {
        let rs = ResultSet {
            name: Some("CommonAllPlayers".to_string()),
            headers: vec!["PERSON_ID".into(), "TO_YEAR".into()],
            row_set: vec![
                vec![json!(1), json!("2018")],
                vec![json!(2), json!("2019")],
                vec![json!(3), json!("2020")],
            ],
        };

        let table = Table::from_result_set(rs).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.columns(), &["PERSON_ID", "TO_YEAR"]);
    }

    #[test]
    fn test_from_result_set_empty_rows() {
        let rs = ResultSet {
            name: None,
            headers: vec!["PLAYER_ID".into(), "PTS".into()],
            row_set: vec![],
        };

        let table = Table::from_result_set(rs).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 2);
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let result = Table::new(vec!["A".into(), "B".into()], vec![vec![json!(1)]]);
        assert!(matches!(result, Err(NbaError::InvalidParameter { .. })));
    }

    #[test]
    fn test_missing_column() {
        match roster().column_index("PTS") {
            Err(NbaError::MissingColumn { column }) => assert_eq!(column, "PTS"),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }
}

#[cfg(test)]
mod coercion_tests {
    use super::*;

    #[test]
    fn test_coerce_integer_column_accepts_strings_and_numbers() {
        let mut table = Table::new(
            vec!["PLAYER_ID".into()],
            vec![
                vec![json!("201939")],
                vec![json!(2544)],
                vec![json!(" 77 ")],
                vec![json!(3.0)],
            ],
        )
        .unwrap();

        table.coerce_integer_column("PLAYER_ID").unwrap();

        let ids: Vec<i64> = table
            .iter()
            .map(|r| r.get("PLAYER_ID").unwrap().as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![201939, 2544, 77, 3]);
    }

    #[test]
    fn test_coerce_integer_column_rejects_non_numeric() {
        let mut table = Table::new(
            vec!["PLAYER_ID".into()],
            vec![vec![json!(1)], vec![json!("abc")]],
        )
        .unwrap();

        match table.coerce_integer_column("PLAYER_ID") {
            Err(NbaError::InvalidInteger { column, value }) => {
                assert_eq!(column, "PLAYER_ID");
                assert!(value.contains("abc"));
            }
            other => panic!("Expected InvalidInteger, got {:?}", other),
        }
    }

    #[test]
    fn test_coerce_integer_column_rejects_null_and_fractions() {
        for bad in [json!(null), json!(1.5), json!(true)] {
            let mut table = Table::new(vec!["TO_YEAR".into()], vec![vec![bad.clone()]]).unwrap();
            assert!(
                table.coerce_integer_column("TO_YEAR").is_err(),
                "{bad} should not coerce"
            );
        }
    }

    #[test]
    fn test_row_accessors() {
        let table = stats();
        let row = table.row(0).unwrap();
        assert_eq!(row.get_i64("PLAYER_ID").unwrap(), 2);
        assert_eq!(row.get_f64("PTS").unwrap(), Some(27.1));
        assert_eq!(row.get_str("PLAYER_ID").unwrap(), Some("2"));
        assert!(row.get("AST").is_err());
    }

    #[test]
    fn test_get_player_id() {
        let table = Table::new(
            vec!["PERSON_ID".into()],
            vec![vec![json!(201939)], vec![json!(-4)]],
        )
        .unwrap();
        assert_eq!(
            table.row(0).unwrap().get_player_id("PERSON_ID").unwrap(),
            PlayerId::new(201939)
        );
        assert!(matches!(
            table.row(1).unwrap().get_player_id("PERSON_ID"),
            Err(NbaError::InvalidInteger { .. })
        ));
    }
}

#[cfg(test)]
mod reshape_tests {
    use super::*;

    #[test]
    fn test_filter_rows() {
        let table = roster();
        let kept = table.filter_rows(|r| r.get_i64("PERSON_ID").unwrap() != 2);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept.columns(), table.columns());
    }

    #[test]
    fn test_select_rows_preserves_given_order() {
        let picked = roster().select_rows(&[2, 0, 99]);
        let ids: Vec<i64> = picked
            .iter()
            .map(|r| r.get_i64("PERSON_ID").unwrap())
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_concat_same_schema() {
        let a = stats();
        let b = stats();
        let combined = Table::concat(vec![a, b]).unwrap();
        assert_eq!(combined.len(), 4);
    }

    #[test]
    fn test_concat_empty_input() {
        let combined = Table::concat(Vec::new()).unwrap();
        assert!(combined.is_empty());
        assert!(combined.columns().is_empty());
    }

    #[test]
    fn test_concat_schema_mismatch() {
        let other = Table::new(vec!["PLAYER_ID".into()], vec![]).unwrap();
        assert!(matches!(
            Table::concat(vec![stats(), other]),
            Err(NbaError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_left_join_keeps_unmatched_rows() {
        let joined = roster()
            .left_join(&stats(), "PERSON_ID", "PLAYER_ID")
            .unwrap();

        assert_eq!(joined.len(), 3);
        assert_eq!(
            joined.columns(),
            &[
                "PERSON_ID",
                "DISPLAY_LAST_COMMA_FIRST",
                "TO_YEAR",
                "PLAYER_ID",
                "PTS"
            ]
        );

        let pts: Vec<Option<f64>> = joined.iter().map(|r| r.get_f64("PTS").unwrap()).collect();
        assert_eq!(pts, vec![Some(23.5), Some(27.1), None]);
        assert!(joined.row(2).unwrap().get("PLAYER_ID").unwrap().is_null());
    }

    #[test]
    fn test_left_join_duplicates_on_multiple_matches() {
        let right = Table::new(
            vec!["PLAYER_ID".into(), "PTS".into()],
            vec![vec![json!(1), json!(10.0)], vec![json!(1), json!(12.0)]],
        )
        .unwrap();

        let joined = roster().left_join(&right, "PERSON_ID", "PLAYER_ID").unwrap();
        assert_eq!(joined.len(), 4);
    }

    #[test]
    fn test_left_join_suffixes_overlapping_columns() {
        let left = Table::new(
            vec!["PERSON_ID".into(), "TEAM_ID".into()],
            vec![vec![json!(1), json!(10)]],
        )
        .unwrap();
        let right = Table::new(
            vec!["PLAYER_ID".into(), "TEAM_ID".into()],
            vec![vec![json!(1), json!(20)]],
        )
        .unwrap();

        let joined = left.left_join(&right, "PERSON_ID", "PLAYER_ID").unwrap();
        assert_eq!(
            joined.columns(),
            &["PERSON_ID", "TEAM_ID_x", "PLAYER_ID", "TEAM_ID_y"]
        );
    }

    #[test]
    fn test_left_join_with_empty_right_side() {
        let joined = roster()
            .left_join(&Table::default(), "PERSON_ID", "PLAYER_ID")
            .unwrap();
        assert_eq!(joined.len(), 3);
        assert_eq!(joined.columns().len(), 3);
    }

    #[test]
    fn test_to_records() {
        let records = stats().to_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["PTS"], json!(23.5));
    }
}
