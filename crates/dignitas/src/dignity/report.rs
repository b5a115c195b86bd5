//! Score aggregation into an auditable per-planet report.

use crate::dignity::essential::EssentialDignity;
use crate::dignity::rules::{DignityRule, RuleCategory, RuleId};
use crate::error::{DignityError, Result};
use crate::zodiac::Planet;
use log::debug;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Ordered rules applied to one planet and their total.
///
/// The total always equals the sum of the rule scores, and no rule id
/// appears twice. Reports are only built through [`ReportBuilder`] or
/// [`aggregate`], so both hold for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DignityReport {
    planet: Planet,
    rules: Vec<DignityRule>,
    total: i32,
}

impl DignityReport {
    pub fn planet(&self) -> Planet {
        self.planet
    }

    /// Rules in canonical order
    pub fn rules(&self) -> &[DignityRule] {
        &self.rules
    }

    pub fn total(&self) -> i32 {
        self.total
    }

    /// Sum of the positive contributions
    pub fn dignity(&self) -> i32 {
        self.rules.iter().map(DignityRule::score).filter(|s| *s > 0).sum()
    }

    /// Sum of the negative contributions
    pub fn deficiency(&self) -> i32 {
        self.rules.iter().map(DignityRule::score).filter(|s| *s < 0).sum()
    }

    pub fn essential_total(&self) -> i32 {
        self.category_total(RuleCategory::Essential)
    }

    pub fn accidental_total(&self) -> i32 {
        self.category_total(RuleCategory::Accidental)
    }

    fn category_total(&self, category: RuleCategory) -> i32 {
        self.rules
            .iter()
            .filter(|rule| rule.category() == category)
            .map(DignityRule::score)
            .sum()
    }

    pub fn contains(&self, rule_id: RuleId) -> bool {
        self.rules.iter().any(|rule| rule.rule_id() == rule_id)
    }

    pub fn get(&self, rule_id: RuleId) -> Option<&DignityRule> {
        self.rules.iter().find(|rule| rule.rule_id() == rule_id)
    }

    /// Rules from strongest to weakest contribution; equal scores keep trail order
    pub fn ranked_rules(&self) -> Vec<&DignityRule> {
        let mut ranked: Vec<&DignityRule> = self.rules.iter().collect();
        ranked.sort_by_key(|rule| std::cmp::Reverse(rule.score()));
        ranked
    }
}

/// Reports for every scored planet of one chart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChartScores {
    reports: BTreeMap<Planet, DignityReport>,
}

impl ChartScores {
    pub fn get(&self, planet: Planet) -> Option<&DignityReport> {
        self.reports.get(&planet)
    }

    pub fn total(&self, planet: Planet) -> Option<i32> {
        self.get(planet).map(DignityReport::total)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DignityReport> {
        self.reports.values()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl FromIterator<DignityReport> for ChartScores {
    fn from_iter<I: IntoIterator<Item = DignityReport>>(iter: I) -> Self {
        Self {
            reports: iter.into_iter().map(|report| (report.planet(), report)).collect(),
        }
    }
}

/// Append-only accumulator for one planet's report
#[derive(Debug)]
pub struct ReportBuilder {
    planet: Planet,
    rules: Vec<DignityRule>,
    seen: HashSet<RuleId>,
    total: i32,
}

impl ReportBuilder {
    pub fn new(planet: Planet) -> Self {
        Self {
            planet,
            rules: Vec::new(),
            seen: HashSet::new(),
            total: 0,
        }
    }

    /// Append a rule; a rule id may be applied once per planet
    pub fn push(&mut self, rule: DignityRule) -> Result<()> {
        if !self.seen.insert(rule.rule_id()) {
            return Err(DignityError::DuplicateRuleApplication {
                planet: self.planet,
                rule_id: rule.rule_id(),
            });
        }
        debug!("{}: {} ({:+})", self.planet, rule.rule_id(), rule.score());
        self.total += rule.score();
        self.rules.push(rule);
        Ok(())
    }

    pub fn extend(&mut self, rules: impl IntoIterator<Item = DignityRule>) -> Result<()> {
        for rule in rules {
            self.push(rule)?;
        }
        Ok(())
    }

    pub fn finish(self) -> DignityReport {
        DignityReport {
            planet: self.planet,
            rules: self.rules,
            total: self.total,
        }
    }
}

/// Combine the essential result and the accidental contributions into a report.
/// Purely additive: no rounding, no clamping.
pub fn aggregate(
    planet: Planet,
    essential: &EssentialDignity,
    accidental: Vec<DignityRule>,
) -> Result<DignityReport> {
    let mut builder = ReportBuilder::new(planet);
    builder.extend(essential.rules())?;
    builder.extend(accidental)?;
    Ok(builder.finish())
}
