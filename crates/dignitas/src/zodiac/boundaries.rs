//! Sign boundary table: where each sign starts on the ecliptic.

use crate::error::{DignityError, Result};
use crate::zodiac::geometry::normalize_degrees;
use crate::zodiac::types::Sign;
use serde::{Deserialize, Serialize};

/// Position of a longitude inside the zodiac
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPlacement {
    pub sign: Sign,
    /// Degrees past the sign's start, 0 <= x < 30 for equal signs
    pub degree: f64,
}

/// Start longitudes of the 12 signs in zodiac order, Aries first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct SignBoundaries {
    starts: [f64; 12],
}

impl SignBoundaries {
    /// Equal 30 degree signs starting at 0 Aries
    pub fn tropical() -> Self {
        let mut starts = [0.0; 12];
        for (i, start) in starts.iter_mut().enumerate() {
            *start = i as f64 * 30.0;
        }
        Self { starts }
    }

    pub fn new(starts: [f64; 12]) -> Result<Self> {
        for (i, start) in starts.iter().enumerate() {
            if !start.is_finite() || !(0.0..360.0).contains(start) {
                return Err(DignityError::invalid(
                    format!("sign_boundaries[{i}]"),
                    start,
                    "must be in [0, 360)",
                ));
            }
        }
        // Every sign must have positive width, and the widths must close the circle
        let total: f64 = (0..12)
            .map(|i| normalize_degrees(starts[(i + 1) % 12] - starts[i]))
            .sum();
        let degenerate = (0..12).any(|i| starts[(i + 1) % 12] == starts[i]);
        if degenerate || (total - 360.0).abs() > 1e-6 {
            return Err(DignityError::invalid(
                "sign_boundaries",
                format!("{starts:?}"),
                "starts must increase around the circle",
            ));
        }
        Ok(Self { starts })
    }

    pub fn start_of(&self, sign: Sign) -> f64 {
        self.starts[sign.index()]
    }

    pub fn placement(&self, longitude: f64) -> SignPlacement {
        let lon = normalize_degrees(longitude);
        let sign = Sign::ALL
            .iter()
            .copied()
            .find(|sign| {
                let start = self.starts[sign.index()];
                let end = self.starts[(sign.index() + 1) % 12];
                normalize_degrees(lon - start) < normalize_degrees(end - start)
            })
            .unwrap_or(Sign::Aries);
        SignPlacement {
            sign,
            degree: normalize_degrees(lon - self.start_of(sign)),
        }
    }

    pub fn sign_of(&self, longitude: f64) -> Sign {
        self.placement(longitude).sign
    }
}

impl Default for SignBoundaries {
    fn default() -> Self {
        Self::tropical()
    }
}

impl TryFrom<Vec<f64>> for SignBoundaries {
    type Error = DignityError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        let starts: [f64; 12] = value.as_slice().try_into().map_err(|_| {
            DignityError::invalid("sign_boundaries", value.len(), "expected 12 entries")
        })?;
        Self::new(starts)
    }
}

impl From<SignBoundaries> for Vec<f64> {
    fn from(value: SignBoundaries) -> Self {
        value.starts.to_vec()
    }
}
