//! The dignity rule catalogue.
//!
//! Every rule the engine can apply has a stable `RuleId`. The ids are the keys a
//! presentation layer uses to render the explanation trail, so they must never be
//! renamed. Scores are fixed except for house placement, whose value comes from a
//! house-strength table.

use crate::zodiac::Planet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    // Essential
    OwnSign,
    Exaltation,
    Detriment,
    Fall,
    Peregrine,
    MutualReception,
    // House
    HousePlacement,
    // Motion
    Direct,
    Retrograde,
    Fast,
    Slow,
    // Rising order
    OrientalSuperior,
    OccidentalSuperior,
    OccidentalInferior,
    OrientalInferior,
    // Solar relationship
    Cazimi,
    FreeOfSun,
    Combust,
    // Lunar phase
    MoonWaxing,
    MoonWaning,
    // Partile aspects
    PartileConjunctionJupiter,
    PartileTrineJupiter,
    PartileSextileJupiter,
    PartileConjunctionVenus,
    PartileTrineVenus,
    PartileSextileVenus,
    PartileConjunctionNorthNode,
    PartileConjunctionMars,
    PartileOppositionMars,
    PartileSquareMars,
    PartileConjunctionSaturn,
    PartileOppositionSaturn,
    PartileSquareSaturn,
    // Fixed stars
    ConjunctionRegulus,
    ConjunctionSpica,
    ConjunctionAlgol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Essential,
    Accidental,
}

/// Catalogue entry: stable key, category and fixed score (None when the score is looked up)
#[derive(Debug, Clone, Copy)]
pub struct RuleEntry {
    pub id: RuleId,
    pub key: &'static str,
    pub category: RuleCategory,
    pub score: Option<i32>,
}

const fn entry(id: RuleId, key: &'static str, category: RuleCategory, score: Option<i32>) -> RuleEntry {
    RuleEntry { id, key, category, score }
}

use RuleCategory::{Accidental, Essential};

const RULE_TABLE: &[RuleEntry] = &[
    entry(RuleId::OwnSign, "own_sign", Essential, Some(5)),
    entry(RuleId::Exaltation, "exaltation", Essential, Some(5)),
    entry(RuleId::Detriment, "detriment", Essential, Some(-5)),
    entry(RuleId::Fall, "fall", Essential, Some(-4)),
    entry(RuleId::Peregrine, "peregrine", Essential, Some(-5)),
    entry(RuleId::MutualReception, "mutual_reception", Essential, Some(5)),
    entry(RuleId::HousePlacement, "house_placement", Accidental, None),
    entry(RuleId::Direct, "direct", Accidental, Some(4)),
    entry(RuleId::Retrograde, "retrograde", Accidental, Some(-5)),
    entry(RuleId::Fast, "fast", Accidental, Some(2)),
    entry(RuleId::Slow, "slow", Accidental, Some(-2)),
    entry(RuleId::OrientalSuperior, "oriental_superior", Accidental, Some(2)),
    entry(RuleId::OccidentalSuperior, "occidental_superior", Accidental, Some(-2)),
    entry(RuleId::OccidentalInferior, "occidental_inferior", Accidental, Some(2)),
    entry(RuleId::OrientalInferior, "oriental_inferior", Accidental, Some(-2)),
    entry(RuleId::Cazimi, "cazimi", Accidental, Some(5)),
    entry(RuleId::FreeOfSun, "free_of_sun", Accidental, Some(5)),
    entry(RuleId::Combust, "combust", Accidental, Some(-4)),
    entry(RuleId::MoonWaxing, "moon_waxing", Accidental, Some(2)),
    entry(RuleId::MoonWaning, "moon_waning", Accidental, Some(-2)),
    entry(RuleId::PartileConjunctionJupiter, "partile_conjunction_jupiter", Accidental, Some(5)),
    entry(RuleId::PartileTrineJupiter, "partile_trine_jupiter", Accidental, Some(4)),
    entry(RuleId::PartileSextileJupiter, "partile_sextile_jupiter", Accidental, Some(3)),
    entry(RuleId::PartileConjunctionVenus, "partile_conjunction_venus", Accidental, Some(5)),
    entry(RuleId::PartileTrineVenus, "partile_trine_venus", Accidental, Some(4)),
    entry(RuleId::PartileSextileVenus, "partile_sextile_venus", Accidental, Some(3)),
    entry(RuleId::PartileConjunctionNorthNode, "partile_conjunction_north_node", Accidental, Some(4)),
    entry(RuleId::PartileConjunctionMars, "partile_conjunction_mars", Accidental, Some(-5)),
    entry(RuleId::PartileOppositionMars, "partile_opposition_mars", Accidental, Some(-4)),
    entry(RuleId::PartileSquareMars, "partile_square_mars", Accidental, Some(-3)),
    entry(RuleId::PartileConjunctionSaturn, "partile_conjunction_saturn", Accidental, Some(-5)),
    entry(RuleId::PartileOppositionSaturn, "partile_opposition_saturn", Accidental, Some(-4)),
    entry(RuleId::PartileSquareSaturn, "partile_square_saturn", Accidental, Some(-3)),
    entry(RuleId::ConjunctionRegulus, "conjunction_regulus", Accidental, Some(6)),
    entry(RuleId::ConjunctionSpica, "conjunction_spica", Accidental, Some(5)),
    entry(RuleId::ConjunctionAlgol, "conjunction_algol", Accidental, Some(-5)),
];

lazy_static::lazy_static! {
    static ref CATALOGUE: HashMap<RuleId, RuleEntry> =
        RULE_TABLE.iter().map(|entry| (entry.id, *entry)).collect();
}

impl RuleId {
    pub fn entry(self) -> &'static RuleEntry {
        // Every variant has a row; checked by test_catalogue_is_complete
        &CATALOGUE[&self]
    }

    /// Stable message key
    pub fn key(self) -> &'static str {
        self.entry().key
    }

    pub fn category(self) -> RuleCategory {
        self.entry().category
    }

    /// Fixed score, or None for table-driven rules
    pub fn base_score(self) -> Option<i32> {
        self.entry().score
    }

    /// All rules in catalogue order
    pub fn all() -> impl Iterator<Item = RuleId> {
        RULE_TABLE.iter().map(|entry| entry.id)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Extra detail a rendered rule needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleContext {
    /// House number for house placement
    House(u8),
    /// The other planet of a mutual reception
    Planet(Planet),
}

/// One applied rule. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DignityRule {
    rule_id: RuleId,
    score: i32,
    category: RuleCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<RuleContext>,
}

impl DignityRule {
    /// A rule with its catalogue score. Table-driven rules score 0 here; use
    /// [`DignityRule::house`] for house placement.
    pub fn fixed(rule_id: RuleId) -> Self {
        Self {
            rule_id,
            score: rule_id.base_score().unwrap_or(0),
            category: rule_id.category(),
            context: None,
        }
    }

    pub fn house(house: u8, score: i32) -> Self {
        Self {
            rule_id: RuleId::HousePlacement,
            score,
            category: RuleCategory::Accidental,
            context: Some(RuleContext::House(house)),
        }
    }

    pub fn with_context(mut self, context: RuleContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn rule_id(&self) -> RuleId {
        self.rule_id
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn category(&self) -> RuleCategory {
        self.category
    }

    pub fn context(&self) -> Option<RuleContext> {
        self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_is_complete() {
        assert_eq!(CATALOGUE.len(), RULE_TABLE.len());
        assert_eq!(RULE_TABLE.len(), 36);
        // Keys match the serde names
        for id in RuleId::all() {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.key()));
        }
    }

    #[test]
    fn test_only_house_placement_is_table_driven() {
        let driven: Vec<RuleId> = RuleId::all().filter(|id| id.base_score().is_none()).collect();
        assert_eq!(driven, vec![RuleId::HousePlacement]);
    }

    #[test]
    fn test_fixed_rule_scores() {
        assert_eq!(DignityRule::fixed(RuleId::Fall).score(), -4);
        assert_eq!(DignityRule::fixed(RuleId::ConjunctionRegulus).score(), 6);
        assert_eq!(DignityRule::fixed(RuleId::Peregrine).category(), RuleCategory::Essential);
        let house = DignityRule::house(10, 5);
        assert_eq!(house.context(), Some(RuleContext::House(10)));
        assert_eq!(house.category(), RuleCategory::Accidental);
    }
}
