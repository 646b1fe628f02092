//! Season type for stats.nba.com queries.

use crate::error::{NbaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An NBA season, rendered the way the stats API expects it (`2016-17`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    /// Create a season from the calendar year it starts in.
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }

    /// Two-digit year the season ends in.
    fn end_suffix(&self) -> u16 {
        (self.0 % 100 + 1) % 100
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2016)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, self.end_suffix())
    }
}

impl FromStr for Season {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NbaError::InvalidSeason {
            season: s.to_string(),
        };

        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(start, 4) || !digits(end, 2) {
            return Err(invalid());
        }
        let season = Self(start.parse().map_err(|_| invalid())?);
        let end: u16 = end.parse().map_err(|_| invalid())?;
        if season.end_suffix() != end {
            return Err(invalid());
        }
        Ok(season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_display() {
        assert_eq!(Season::new(2016).to_string(), "2016-17");
        assert_eq!(Season::new(1999).to_string(), "1999-00");
        assert_eq!(Season::default().to_string(), "2016-17");
    }

    #[test]
    fn test_season_display_at_u16_max() {
        assert_eq!(Season::new(u16::MAX).to_string(), "65535-36");
        assert_eq!(Season::new(9999).to_string(), "9999-00");

        let season: Season = serde_json::from_str("65535").unwrap();
        assert_eq!(season.to_string(), "65535-36");
    }

    #[test]
    fn test_season_from_str() {
        assert_eq!("2018-19".parse::<Season>().unwrap(), Season::new(2018));
        assert_eq!("1999-00".parse::<Season>().unwrap(), Season::new(1999));
    }

    #[test]
    fn test_season_from_str_rejects_bad_input() {
        for input in ["2018", "2018-20", "18-19", "abcd-ef", "2018-2019", "+201-02", "2018-+9"] {
            assert!(
                matches!(input.parse::<Season>(), Err(NbaError::InvalidSeason { .. })),
                "{input} should be rejected"
            );
        }
    }
}
