//! Chart bodies and their fixed properties.

use crate::error::DignityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
}

/// Groups that the rising-order rules treat differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetClass {
    Luminary,
    /// Mercury and Venus
    Inferior,
    /// Mars, Jupiter and Saturn
    Superior,
    Outer,
    Node,
}

// (planet, slug, display name, mean daily motion in degrees)
const PLANET_TABLE: &[(Planet, &str, &str, f64)] = &[
    (Planet::Sun, "sun", "Sun", 0.9856),
    (Planet::Moon, "moon", "Moon", 13.1764),
    (Planet::Mercury, "mercury", "Mercury", 0.9856),
    (Planet::Venus, "venus", "Venus", 0.9856),
    (Planet::Mars, "mars", "Mars", 0.5240),
    (Planet::Jupiter, "jupiter", "Jupiter", 0.0831),
    (Planet::Saturn, "saturn", "Saturn", 0.0336),
    (Planet::Uranus, "uranus", "Uranus", 0.0117),
    (Planet::Neptune, "neptune", "Neptune", 0.0060),
    (Planet::Pluto, "pluto", "Pluto", 0.0040),
    (Planet::NorthNode, "north_node", "North Node", 0.0529),
    (Planet::SouthNode, "south_node", "South Node", 0.0529),
];

impl Planet {
    pub const ALL: [Planet; 12] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
        Planet::NorthNode,
        Planet::SouthNode,
    ];

    /// The seven bodies that hold sign rulerships
    pub const TRADITIONAL: [Planet; 7] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];

    fn row(self) -> &'static (Planet, &'static str, &'static str, f64) {
        &PLANET_TABLE[self as usize]
    }

    pub fn slug(self) -> &'static str {
        self.row().1
    }

    pub fn name(self) -> &'static str {
        self.row().2
    }

    /// Mean motion in longitude, degrees per day
    pub fn mean_daily_speed(self) -> f64 {
        self.row().3
    }

    pub fn class(self) -> PlanetClass {
        match self {
            Planet::Sun | Planet::Moon => PlanetClass::Luminary,
            Planet::Mercury | Planet::Venus => PlanetClass::Inferior,
            Planet::Mars | Planet::Jupiter | Planet::Saturn => PlanetClass::Superior,
            Planet::Uranus | Planet::Neptune | Planet::Pluto => PlanetClass::Outer,
            Planet::NorthNode | Planet::SouthNode => PlanetClass::Node,
        }
    }

    /// Nodes are computed points: they act as aspect targets but are never scored.
    pub fn is_node(self) -> bool {
        self.class() == PlanetClass::Node
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = DignityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        PLANET_TABLE
            .iter()
            .find(|(_, slug, _, _)| *slug == key)
            .map(|(planet, _, _, _)| *planet)
            .ok_or_else(|| DignityError::UnknownPlanet(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_discriminant() {
        for planet in Planet::ALL {
            assert_eq!(planet.row().0, planet);
        }
    }

    #[test]
    fn test_parse_planet_names() {
        assert_eq!("Mars".parse::<Planet>().unwrap(), Planet::Mars);
        assert_eq!("north node".parse::<Planet>().unwrap(), Planet::NorthNode);
        assert_eq!("north_node".parse::<Planet>().unwrap(), Planet::NorthNode);
        assert_eq!(
            "chiron".parse::<Planet>(),
            Err(DignityError::UnknownPlanet("chiron".to_string()))
        );
    }

    #[test]
    fn test_classes() {
        assert_eq!(Planet::Venus.class(), PlanetClass::Inferior);
        assert_eq!(Planet::Saturn.class(), PlanetClass::Superior);
        assert!(Planet::SouthNode.is_node());
        assert!(!Planet::Moon.is_node());
    }
}
