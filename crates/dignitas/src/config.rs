use crate::aspects::PARTILE_ORB;
use crate::chart::HouseStrengthTable;
use crate::error::{DignityError, Result};
use crate::zodiac::{DignityTier, Planet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tunable scoring parameters. Every field has a default, so a partial TOML
/// or JSON document deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub house_strength: HouseStrengthTable,

    // Orbs (degrees unless noted)
    pub partile_orb: f64,
    pub star_orb: f64,
    pub cazimi_orb_minutes: f64,
    pub beams_orb: f64,

    /// Also count mutual reception by exaltation
    pub reception_by_exaltation: bool,

    /// Tiers that make a planet an Almuten candidate
    pub almuten_tiers: Vec<DignityTier>,

    /// Per-planet overrides of the mean daily speed
    pub mean_speeds: BTreeMap<Planet, f64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            house_strength: HouseStrengthTable::default(),
            partile_orb: PARTILE_ORB,
            star_orb: 1.0,
            cazimi_orb_minutes: 17.0,
            beams_orb: 8.0,
            reception_by_exaltation: false,
            almuten_tiers: vec![DignityTier::Rulership, DignityTier::Exaltation],
            mean_speeds: BTreeMap::new(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        let orbs = [
            ("partile_orb", self.partile_orb),
            ("star_orb", self.star_orb),
            ("cazimi_orb_minutes", self.cazimi_orb_minutes),
            ("beams_orb", self.beams_orb),
        ];
        for (field, value) in orbs {
            if !value.is_finite() || value < 0.0 {
                return Err(DignityError::invalid(field, value, "orb must be a non-negative number"));
            }
        }
        if self.cazimi_orb() >= self.beams_orb {
            return Err(DignityError::invalid(
                "cazimi_orb_minutes",
                self.cazimi_orb_minutes,
                "cazimi must lie inside the beams",
            ));
        }
        for (planet, speed) in &self.mean_speeds {
            if !speed.is_finite() || *speed <= 0.0 {
                return Err(DignityError::invalid(
                    format!("mean_speeds.{}", planet.slug()),
                    speed,
                    "mean speed must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Cazimi orb in degrees
    pub fn cazimi_orb(&self) -> f64 {
        self.cazimi_orb_minutes / 60.0
    }

    pub fn mean_speed(&self, planet: Planet) -> f64 {
        self.mean_speeds
            .get(&planet)
            .copied()
            .unwrap_or_else(|| planet.mean_daily_speed())
    }

    pub fn almuten_uses(&self, tier: DignityTier) -> bool {
        self.almuten_tiers.contains(&tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config: ScoringConfig = serde_json::from_value(json!({
            "partile_orb": 0.5,
            "almuten_tiers": ["rulership", "exaltation", "triplicity"],
            "mean_speeds": { "mars": 0.6 }
        }))
        .unwrap();
        assert_eq!(config.partile_orb, 0.5);
        assert_eq!(config.beams_orb, 8.0);
        assert!(config.almuten_uses(DignityTier::Triplicity));
        assert_eq!(config.mean_speed(Planet::Mars), 0.6);
        assert_eq!(config.mean_speed(Planet::Saturn), Planet::Saturn.mean_daily_speed());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_orbs() {
        let config = ScoringConfig { star_orb: -1.0, ..ScoringConfig::default() };
        assert!(config.validate().is_err());

        let config = ScoringConfig { cazimi_orb_minutes: 600.0, ..ScoringConfig::default() };
        assert!(config.validate().is_err());
    }
}
