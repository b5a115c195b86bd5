use crate::aspects::Aspect;
use crate::chart::ChartSnapshot;
use crate::error::{DignityError, Result};
use crate::zodiac::{DignityTier, Planet};
use serde::{Deserialize, Serialize};

/// A point of the chart whose Almuten or Doryphoros is requested
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ChartPoint {
    Ascendant,
    Midheaven,
    Body(Planet),
    Longitude(f64),
}

/// Where a chart point sits and how it moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPoint {
    pub longitude: f64,
    /// Degrees per day; zero for angles and bare longitudes
    pub speed: f64,
    /// The body the point belongs to, which is never its own attendant
    pub body: Option<Planet>,
}

impl ChartPoint {
    pub fn resolve(&self, chart: &ChartSnapshot) -> Result<ResolvedPoint> {
        let angle = |value: Option<f64>, field: &str| {
            value
                .map(|longitude| ResolvedPoint { longitude, speed: 0.0, body: None })
                .ok_or_else(|| DignityError::invalid(field, "none", "not present in chart snapshot"))
        };

        match *self {
            ChartPoint::Ascendant => angle(chart.ascendant, "ascendant"),
            ChartPoint::Midheaven => angle(chart.midheaven, "midheaven"),
            ChartPoint::Body(planet) => {
                let body = chart.body(planet)?;
                Ok(ResolvedPoint {
                    longitude: body.longitude,
                    speed: body.speed,
                    body: Some(planet),
                })
            }
            ChartPoint::Longitude(longitude) => {
                if !longitude.is_finite() || !(0.0..360.0).contains(&longitude) {
                    return Err(DignityError::invalid("point", longitude, "longitude must be in [0, 360)"));
                }
                Ok(ResolvedPoint { longitude, speed: 0.0, body: None })
            }
        }
    }
}

/// Outcome of an Almuten search. A tie is a valid answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AlmutenResult {
    Winner {
        planet: Planet,
        score: i32,
        tier: DignityTier,
    },
    Tie {
        planets: Vec<Planet>,
        score: i32,
        tier: DignityTier,
    },
    /// No scored planet holds a dignity over the point
    NoCandidates,
}

impl AlmutenResult {
    pub fn winner(&self) -> Option<Planet> {
        match self {
            AlmutenResult::Winner { planet, .. } => Some(*planet),
            _ => None,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, AlmutenResult::Tie { .. })
    }
}

/// A candidate for Almuten and its best claim over the point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlmutenCandidate {
    pub planet: Planet,
    pub tier: DignityTier,
    pub score: i32,
}

/// The planet guarding a point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Doryphoros {
    pub planet: Planet,
    pub aspect: Aspect,
    /// Deviation from the exact aspect in degrees
    pub orb: f64,
}

/// Best planet of the whole chart by total score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Strongest {
    Planet { planet: Planet, score: i32 },
    Tie { planets: Vec<Planet>, score: i32 },
    Empty,
}
