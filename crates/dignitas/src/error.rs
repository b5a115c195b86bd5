use crate::dignity::rules::RuleId;
use crate::zodiac::Planet;
use thiserror::Error;

/// Errors that can occur while scoring a chart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DignityError {
    #[error("Invalid {field}: {value} ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
    #[error("Unknown planet: {0}")]
    UnknownPlanet(String),
    #[error("Unknown fixed star: {0}")]
    UnknownStar(String),
    #[error("{0} is not present in the chart snapshot")]
    MissingBody(Planet),
    #[error("Rule {rule_id} applied twice to {planet}; this is a scoring defect")]
    DuplicateRuleApplication { planet: Planet, rule_id: RuleId },
}

impl DignityError {
    pub(crate) fn invalid(field: impl Into<String>, value: impl ToString, reason: impl Into<String>) -> Self {
        DignityError::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DignityError>;
