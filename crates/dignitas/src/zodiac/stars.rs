//! Fixed stars that take part in scoring.

use crate::error::DignityError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedStar {
    Regulus,
    Spica,
    Algol,
}

impl FixedStar {
    pub const ALL: [FixedStar; 3] = [FixedStar::Regulus, FixedStar::Spica, FixedStar::Algol];

    /// Ecliptic longitude at epoch J2000
    pub fn epoch_longitude(self) -> f64 {
        match self {
            FixedStar::Regulus => 149.0 + 50.0 / 60.0, // 29 Leo 50
            FixedStar::Spica => 203.0 + 50.0 / 60.0,   // 23 Libra 50
            FixedStar::Algol => 56.0 + 10.0 / 60.0,    // 26 Taurus 10
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FixedStar::Regulus => "Regulus",
            FixedStar::Spica => "Spica",
            FixedStar::Algol => "Algol",
        }
    }

    /// Longitude table at epoch, used when a snapshot carries none
    pub fn epoch_table() -> BTreeMap<FixedStar, f64> {
        FixedStar::ALL
            .iter()
            .map(|star| (*star, star.epoch_longitude()))
            .collect()
    }
}

impl fmt::Display for FixedStar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FixedStar {
    type Err = DignityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FixedStar::ALL
            .iter()
            .find(|star| star.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| DignityError::UnknownStar(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_star() {
        assert_eq!("regulus".parse::<FixedStar>().unwrap(), FixedStar::Regulus);
        assert_eq!(
            "Sirius".parse::<FixedStar>(),
            Err(DignityError::UnknownStar("Sirius".to_string()))
        );
    }

    #[test]
    fn test_epoch_table_covers_all_stars() {
        let table = FixedStar::epoch_table();
        assert_eq!(table.len(), 3);
        assert!((table[&FixedStar::Algol] - 56.1667).abs() < 1e-3);
    }
}
