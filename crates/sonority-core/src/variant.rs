//! Rule-set variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::interval::Cell;

/// Which historical rule set drives selection and classification.
///
/// The two are never merged: the six-five check sits at a different point
/// in each cascade, and only `Hartt` keeps crossing signs on the tokens the
/// 4-voice selector would otherwise trim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Fuller (1986) only.
    #[default]
    Fuller,
    /// Fuller (1986) extended with Hartt (2010).
    Hartt,
}

impl Variant {
    /// All variants.
    pub const ALL: [Variant; 2] = [Variant::Fuller, Variant::Hartt];

    /// Lowercase name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Fuller => "fuller",
            Variant::Hartt => "hartt",
        }
    }

    /// Applies the crossing-sign policy to a token the selector trims.
    pub fn trim(&self, cell: Cell) -> Cell {
        match self {
            Variant::Fuller => cell.uncrossed(),
            Variant::Hartt => cell,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fuller" => Ok(Variant::Fuller),
            "hartt" => Ok(Variant::Hartt),
            other => Err(format!(
                "unknown variant: {} (expected fuller or hartt)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("fuller".parse::<Variant>().unwrap(), Variant::Fuller);
        assert_eq!("Hartt".parse::<Variant>().unwrap(), Variant::Hartt);
        assert!("zarlino".parse::<Variant>().is_err());
    }

    #[test]
    fn test_trim_policy() {
        let crossed = Cell::parse("-P5").unwrap();
        assert_eq!(Variant::Fuller.trim(crossed).to_string(), "P5");
        assert_eq!(Variant::Hartt.trim(crossed).to_string(), "-P5");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Variant::Hartt).unwrap(), "\"hartt\"");
    }
}
