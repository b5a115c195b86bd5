pub mod aspects;
pub mod chart;
pub mod config;
pub mod dignity;
pub mod engine;
pub mod error;
pub mod points;
pub mod zodiac;

pub use chart::{BodyPosition, ChartSnapshot, HouseStrength, HouseStrengthTable};
pub use config::ScoringConfig;
pub use dignity::{ChartScores, DignityReport, DignityRule, RuleCategory, RuleContext, RuleId};
pub use engine::DignityEngine;
pub use error::{DignityError, Result};
pub use points::{AlmutenResult, ChartPoint, Doryphoros, Strongest};
pub use zodiac::{FixedStar, Planet, Sect, Sign, SignBoundaries};
