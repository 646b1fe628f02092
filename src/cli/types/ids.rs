//! ID types for NBA stats data.

use crate::error::{NbaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for stats.nba.com player identifiers.
///
/// The same value appears as `PERSON_ID` in the roster listing and as
/// `PLAYER_ID` in the career stats result sets.
///
/// # Examples
///
/// ```rust
/// use nba_clusters::PlayerId;
///
/// let id: PlayerId = "201939".parse().unwrap();
/// assert_eq!(id.as_u64(), 201939);
/// assert_eq!(id.to_string(), "201939");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_from_str() {
        assert_eq!("2544".parse::<PlayerId>().unwrap(), PlayerId::new(2544));
        assert_eq!(" 2544 ".parse::<PlayerId>().unwrap(), PlayerId::new(2544));
    }

    #[test]
    fn test_player_id_from_str_invalid() {
        match "LeBron".parse::<PlayerId>() {
            Err(NbaError::InvalidPlayerId(_)) => (),
            other => panic!("Expected InvalidPlayerId, got {:?}", other),
        }
    }

    #[test]
    fn test_player_id_serializes_as_number() {
        let json = serde_json::to_string(&PlayerId::new(77)).unwrap();
        assert_eq!(json, "77");
    }
}
