//! House strength lookup.

use crate::error::{DignityError, Result};
use serde::{Deserialize, Serialize};

/// Points a planet earns (or loses) for occupying a house.
pub trait HouseStrength {
    /// Score for house 1..=12
    fn strength(&self, house: u8) -> i32;
}

/// Twelve signed scores, house 1 first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct HouseStrengthTable {
    values: [i32; 12],
}

impl HouseStrengthTable {
    pub fn new(values: [i32; 12]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[i32; 12] {
        &self.values
    }
}

impl Default for HouseStrengthTable {
    /// Angular houses strongest, the 12th weakest
    fn default() -> Self {
        Self::new([5, 3, 1, 4, 3, -2, 4, -2, 2, 5, 4, -5])
    }
}

impl HouseStrength for HouseStrengthTable {
    fn strength(&self, house: u8) -> i32 {
        match house {
            1..=12 => self.values[house as usize - 1],
            _ => 0,
        }
    }
}

impl TryFrom<Vec<i32>> for HouseStrengthTable {
    type Error = DignityError;

    fn try_from(value: Vec<i32>) -> Result<Self> {
        let values: [i32; 12] = value.as_slice().try_into().map_err(|_| {
            DignityError::invalid("house_strength", value.len(), "expected 12 entries")
        })?;
        Ok(Self::new(values))
    }
}

impl From<HouseStrengthTable> for Vec<i32> {
    fn from(value: HouseStrengthTable) -> Self {
        value.values.to_vec()
    }
}
