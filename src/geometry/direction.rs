//! Compass directions for tooltip placement

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TooltipError;

/// Which side of the target the tooltip sits on
///
/// The lowercase key (`"n"`, `"se"`, ...) is also the CSS marker class put on
/// the overlay while it is shown in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    N,
    S,
    E,
    W,
    Nw,
    Ne,
    Sw,
    Se,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::Nw,
        Direction::Ne,
        Direction::Sw,
        Direction::Se,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Direction::N => "n",
            Direction::S => "s",
            Direction::E => "e",
            Direction::W => "w",
            Direction::Nw => "nw",
            Direction::Ne => "ne",
            Direction::Sw => "sw",
            Direction::Se => "se",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Direction {
    type Err = TooltipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.key() == s)
            .ok_or_else(|| TooltipError::UnknownDirection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_parse_back() {
        for dir in Direction::ALL {
            assert_eq!(dir.key().parse::<Direction>(), Ok(dir));
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert_eq!(
            "north".parse::<Direction>(),
            Err(TooltipError::UnknownDirection("north".to_string()))
        );
        assert!("N".parse::<Direction>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        assert_eq!(serde_json::to_string(&Direction::Se).unwrap(), "\"se\"");
        let dir: Direction = serde_json::from_str("\"nw\"").unwrap();
        assert_eq!(dir, Direction::Nw);
    }
}
