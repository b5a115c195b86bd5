//! Read-only chart input supplied by the ephemeris and house collaborators.

use crate::chart::houses::HouseStrengthTable;
use crate::error::{DignityError, Result};
use crate::zodiac::{FixedStar, Planet, Sect, Sign, SignBoundaries, SignPlacement};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Computed position of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Ecliptic longitude in degrees (0-360)
    pub longitude: f64,
    /// Speed in longitude (degrees per day); negative when retrograde
    pub speed: f64,
    /// House number (1-12)
    pub house: u8,
}

impl BodyPosition {
    pub fn new(longitude: f64, speed: f64, house: u8) -> Self {
        Self { longitude, speed, house }
    }
}

/// Everything the engine needs to score one chart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct ChartSnapshot {
    pub sect: Sect,
    pub bodies: BTreeMap<Planet, BodyPosition>,
    pub sign_boundaries: SignBoundaries,
    pub fixed_stars: BTreeMap<FixedStar, f64>,
    /// Overrides the configured house-strength table for this chart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_strength: Option<HouseStrengthTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascendant: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midheaven: Option<f64>,
}

/// Snapshot as written by the collaborators, with body and star names not yet resolved
#[derive(Debug, Deserialize)]
struct RawSnapshot {
    sect: Sect,
    bodies: BTreeMap<String, BodyPosition>,
    #[serde(default)]
    sign_boundaries: SignBoundaries,
    #[serde(default)]
    fixed_stars: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    house_strength: Option<HouseStrengthTable>,
    #[serde(default)]
    ascendant: Option<f64>,
    #[serde(default)]
    midheaven: Option<f64>,
}

impl TryFrom<RawSnapshot> for ChartSnapshot {
    type Error = DignityError;

    fn try_from(raw: RawSnapshot) -> Result<Self> {
        let bodies = raw
            .bodies
            .into_iter()
            .map(|(name, body)| -> Result<(Planet, BodyPosition)> { Ok((name.parse()?, body)) })
            .collect::<Result<_>>()?;
        let fixed_stars = match raw.fixed_stars {
            Some(stars) => stars
                .into_iter()
                .map(|(name, longitude)| -> Result<(FixedStar, f64)> { Ok((name.parse()?, longitude)) })
                .collect::<Result<_>>()?,
            None => FixedStar::epoch_table(),
        };
        Ok(Self {
            sect: raw.sect,
            bodies,
            sign_boundaries: raw.sign_boundaries,
            fixed_stars,
            house_strength: raw.house_strength,
            ascendant: raw.ascendant,
            midheaven: raw.midheaven,
        })
    }
}

fn check_longitude(field: impl Into<String>, longitude: f64) -> Result<()> {
    if !longitude.is_finite() || !(0.0..360.0).contains(&longitude) {
        return Err(DignityError::invalid(field, longitude, "longitude must be in [0, 360)"));
    }
    Ok(())
}

fn check_body(planet: Planet, body: &BodyPosition) -> Result<()> {
    check_longitude(format!("{}.longitude", planet.slug()), body.longitude)?;
    if !body.speed.is_finite() {
        return Err(DignityError::invalid(
            format!("{}.speed", planet.slug()),
            body.speed,
            "speed must be finite",
        ));
    }
    if !(1..=12).contains(&body.house) {
        return Err(DignityError::invalid(
            format!("{}.house", planet.slug()),
            body.house,
            "house must be in 1..=12",
        ));
    }
    Ok(())
}

impl ChartSnapshot {
    /// Empty chart with tropical signs and epoch star positions
    pub fn new(sect: Sect) -> Self {
        Self {
            sect,
            bodies: BTreeMap::new(),
            sign_boundaries: SignBoundaries::tropical(),
            fixed_stars: FixedStar::epoch_table(),
            house_strength: None,
            ascendant: None,
            midheaven: None,
        }
    }

    /// Parse a JSON snapshot and check its chart-wide fields. Bodies are
    /// checked one at a time when they are used.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawSnapshot = serde_json::from_str(text)
            .map_err(|e| DignityError::invalid("snapshot", e, "malformed chart snapshot"))?;
        let chart = ChartSnapshot::try_from(raw)?;
        chart.validate_chart()?;
        Ok(chart)
    }

    pub fn with_body(mut self, planet: Planet, longitude: f64, speed: f64, house: u8) -> Self {
        self.bodies.insert(planet, BodyPosition::new(longitude, speed, house));
        self
    }

    pub fn with_ascendant(mut self, longitude: f64) -> Self {
        self.ascendant = Some(longitude);
        self
    }

    pub fn with_midheaven(mut self, longitude: f64) -> Self {
        self.midheaven = Some(longitude);
        self
    }

    pub fn with_house_strength(mut self, table: HouseStrengthTable) -> Self {
        self.house_strength = Some(table);
        self
    }

    /// Check every value against its domain
    pub fn validate(&self) -> Result<()> {
        self.validate_chart()?;
        for (planet, body) in &self.bodies {
            check_body(*planet, body)?;
        }
        Ok(())
    }

    /// Check the fields every planet's score depends on: star positions and angles
    pub fn validate_chart(&self) -> Result<()> {
        for (star, longitude) in &self.fixed_stars {
            check_longitude(format!("{}.longitude", star.name().to_lowercase()), *longitude)?;
        }
        if let Some(asc) = self.ascendant {
            check_longitude("ascendant", asc)?;
        }
        if let Some(mc) = self.midheaven {
            check_longitude("midheaven", mc)?;
        }
        Ok(())
    }

    /// Position of `planet`; absent and out-of-domain bodies are errors
    pub fn body(&self, planet: Planet) -> Result<&BodyPosition> {
        let body = self.bodies.get(&planet).ok_or(DignityError::MissingBody(planet))?;
        check_body(planet, body)?;
        Ok(body)
    }

    /// Position of a reference body, if the chart has a valid one
    pub fn reference(&self, planet: Planet) -> Option<&BodyPosition> {
        match self.body(planet) {
            Ok(body) => Some(body),
            Err(DignityError::MissingBody(_)) => None,
            Err(e) => {
                debug!("Ignoring {planet} as a reference: {e}");
                None
            }
        }
    }

    pub fn placement_of(&self, longitude: f64) -> SignPlacement {
        self.sign_boundaries.placement(longitude)
    }

    pub fn sign_of(&self, planet: Planet) -> Result<Sign> {
        Ok(self.sign_boundaries.sign_of(self.body(planet)?.longitude))
    }

    pub fn star_longitude(&self, star: FixedStar) -> f64 {
        self.fixed_stars
            .get(&star)
            .copied()
            .unwrap_or_else(|| star.epoch_longitude())
    }

    /// Bodies that receive a dignity report (everything except the nodes)
    pub fn scored_planets(&self) -> impl Iterator<Item = Planet> + '_ {
        self.bodies.keys().copied().filter(|p| !p.is_node())
    }
}
