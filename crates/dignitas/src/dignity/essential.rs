//! Essential dignity: strength from the sign a planet occupies.

use crate::chart::ChartSnapshot;
use crate::config::ScoringConfig;
use crate::dignity::rules::{DignityRule, RuleContext, RuleId};
use crate::error::Result;
use crate::zodiac::{detriment_planet, fall_planet, is_exalted, rules, Planet, Sign};
use serde::{Deserialize, Serialize};

/// Sign placement category. Exactly one applies to any planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EssentialCategory {
    OwnSign,
    Exaltation,
    Detriment,
    Fall,
    Peregrine,
}

impl EssentialCategory {
    pub fn rule_id(self) -> RuleId {
        match self {
            EssentialCategory::OwnSign => RuleId::OwnSign,
            EssentialCategory::Exaltation => RuleId::Exaltation,
            EssentialCategory::Detriment => RuleId::Detriment,
            EssentialCategory::Fall => RuleId::Fall,
            EssentialCategory::Peregrine => RuleId::Peregrine,
        }
    }

    pub fn score(self) -> i32 {
        self.rule_id().base_score().unwrap_or(0)
    }
}

/// Result of the essential resolver for one planet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EssentialDignity {
    pub sign: Sign,
    pub category: EssentialCategory,
    /// Partner in mutual reception, if any
    pub reception: Option<Planet>,
}

impl EssentialDignity {
    /// Rules in trail order: the category, then mutual reception
    pub fn rules(&self) -> Vec<DignityRule> {
        let mut out = vec![DignityRule::fixed(self.category.rule_id())];
        if let Some(partner) = self.reception {
            out.push(DignityRule::fixed(RuleId::MutualReception).with_context(RuleContext::Planet(partner)));
        }
        out
    }

    pub fn score(&self) -> i32 {
        self.rules().iter().map(DignityRule::score).sum()
    }
}

/// First match wins: own sign, exaltation, detriment, fall, else peregrine.
pub fn essential_category(planet: Planet, sign: Sign) -> EssentialCategory {
    if rules(planet, sign) {
        EssentialCategory::OwnSign
    } else if is_exalted(planet, sign) {
        EssentialCategory::Exaltation
    } else if detriment_planet(sign) == planet {
        EssentialCategory::Detriment
    } else if fall_planet(sign) == Some(planet) {
        EssentialCategory::Fall
    } else {
        EssentialCategory::Peregrine
    }
}

/// The planet that shares a reception with `planet`: each occupies a sign the
/// other rules. Rulership receptions are found before exaltation ones.
pub fn mutual_reception(
    planet: Planet,
    chart: &ChartSnapshot,
    by_exaltation: bool,
) -> Result<Option<Planet>> {
    let own_sign = chart.sign_of(planet)?;
    let others: Vec<(Planet, Sign)> = chart
        .scored_planets()
        .filter(|other| *other != planet)
        .filter_map(|other| {
            let body = chart.reference(other)?;
            Some((other, chart.sign_boundaries.sign_of(body.longitude)))
        })
        .collect();

    let by_rulership = others
        .iter()
        .find(|(other, sign)| rules(*other, own_sign) && rules(planet, *sign))
        .map(|(other, _)| *other);
    if by_rulership.is_some() || !by_exaltation {
        return Ok(by_rulership);
    }

    Ok(others
        .iter()
        .find(|(other, sign)| is_exalted(*other, own_sign) && is_exalted(planet, *sign))
        .map(|(other, _)| *other))
}

pub fn resolve_essential(
    planet: Planet,
    chart: &ChartSnapshot,
    config: &ScoringConfig,
) -> Result<EssentialDignity> {
    let sign = chart.sign_of(planet)?;
    let category = essential_category(planet, sign);
    let reception = mutual_reception(planet, chart, config.reception_by_exaltation)?;
    log::trace!("{planet} in {sign}: {category:?}, reception {reception:?}");
    Ok(EssentialDignity { sign, category, reception })
}
