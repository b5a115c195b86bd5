//! Accidental dignity: strength from house, motion, the Sun, aspects and fixed stars.
//!
//! Each concern is one flat function. `resolve_accidental` concatenates them in
//! the canonical trail order: house, motion, solar relationship, rising order,
//! lunar phase, aspects, fixed stars.

use crate::aspects::{Aspect, AspectCalculator};
use crate::chart::{BodyPosition, ChartSnapshot, HouseStrength};
use crate::config::ScoringConfig;
use crate::dignity::rules::{DignityRule, RuleId};
use crate::error::Result;
use crate::zodiac::{angular_separation, elongation, rises_before, FixedStar, Planet, PlanetClass};
use log::{debug, trace};

/// Reference body, aspect and the rule it fires
const ASPECT_RULES: &[(Planet, Aspect, RuleId)] = &[
    (Planet::Jupiter, Aspect::Conjunction, RuleId::PartileConjunctionJupiter),
    (Planet::Jupiter, Aspect::Trine, RuleId::PartileTrineJupiter),
    (Planet::Jupiter, Aspect::Sextile, RuleId::PartileSextileJupiter),
    (Planet::Venus, Aspect::Conjunction, RuleId::PartileConjunctionVenus),
    (Planet::Venus, Aspect::Trine, RuleId::PartileTrineVenus),
    (Planet::Venus, Aspect::Sextile, RuleId::PartileSextileVenus),
    (Planet::NorthNode, Aspect::Conjunction, RuleId::PartileConjunctionNorthNode),
    (Planet::Mars, Aspect::Conjunction, RuleId::PartileConjunctionMars),
    (Planet::Mars, Aspect::Opposition, RuleId::PartileOppositionMars),
    (Planet::Mars, Aspect::Square, RuleId::PartileSquareMars),
    (Planet::Saturn, Aspect::Conjunction, RuleId::PartileConjunctionSaturn),
    (Planet::Saturn, Aspect::Opposition, RuleId::PartileOppositionSaturn),
    (Planet::Saturn, Aspect::Square, RuleId::PartileSquareSaturn),
];

const ASPECT_REFERENCES: [Planet; 5] = [
    Planet::Jupiter,
    Planet::Venus,
    Planet::NorthNode,
    Planet::Mars,
    Planet::Saturn,
];

const STAR_RULES: &[(FixedStar, RuleId)] = &[
    (FixedStar::Regulus, RuleId::ConjunctionRegulus),
    (FixedStar::Spica, RuleId::ConjunctionSpica),
    (FixedStar::Algol, RuleId::ConjunctionAlgol),
];

pub fn house_rule(body: &BodyPosition, strength: &dyn HouseStrength) -> Option<DignityRule> {
    let score = strength.strength(body.house);
    (score != 0).then(|| DignityRule::house(body.house, score))
}

/// Direction then pace. Luminaries never station, so direction is not scored for them.
pub fn motion_rules(planet: Planet, body: &BodyPosition, config: &ScoringConfig) -> Vec<DignityRule> {
    let mut out = Vec::new();

    if planet.class() != PlanetClass::Luminary {
        if body.speed > 0.0 {
            out.push(DignityRule::fixed(RuleId::Direct));
        } else if body.speed < 0.0 {
            out.push(DignityRule::fixed(RuleId::Retrograde));
        }
    }

    let mean = config.mean_speed(planet);
    let pace = body.speed.abs();
    if pace > mean {
        out.push(DignityRule::fixed(RuleId::Fast));
    } else if pace < mean {
        out.push(DignityRule::fixed(RuleId::Slow));
    }
    out
}

/// Cazimi, free of the Sun, or combust. Not applied to the luminaries.
pub fn solar_rule(planet: Planet, body: &BodyPosition, sun: &BodyPosition, config: &ScoringConfig) -> Option<DignityRule> {
    if planet.class() == PlanetClass::Luminary {
        return None;
    }
    let distance = angular_separation(body.longitude, sun.longitude);
    trace!("{planet} is {distance:.4} degrees from the Sun");

    let rule = if distance <= config.cazimi_orb() {
        RuleId::Cazimi
    } else if distance > config.beams_orb {
        RuleId::FreeOfSun
    } else {
        RuleId::Combust
    };
    Some(DignityRule::fixed(rule))
}

/// Oriental/occidental placement. Mercury and Venus score the opposite way
/// from Mars, Jupiter and Saturn.
pub fn rising_rule(planet: Planet, body: &BodyPosition, sun: &BodyPosition) -> Option<DignityRule> {
    let oriental = rises_before(body.longitude, sun.longitude);
    let rule = match (planet.class(), oriental) {
        (PlanetClass::Superior, true) => RuleId::OrientalSuperior,
        (PlanetClass::Superior, false) => RuleId::OccidentalSuperior,
        (PlanetClass::Inferior, false) => RuleId::OccidentalInferior,
        (PlanetClass::Inferior, true) => RuleId::OrientalInferior,
        _ => return None,
    };
    Some(DignityRule::fixed(rule))
}

/// Moon only: waxing while less than 180 degrees ahead of the Sun.
/// At exact conjunction or opposition neither rule applies.
pub fn lunar_phase_rule(planet: Planet, body: &BodyPosition, sun: &BodyPosition) -> Option<DignityRule> {
    if planet != Planet::Moon {
        return None;
    }
    let phase = elongation(body.longitude, sun.longitude);
    if phase > 0.0 && phase < 180.0 {
        Some(DignityRule::fixed(RuleId::MoonWaxing))
    } else if phase > 180.0 {
        Some(DignityRule::fixed(RuleId::MoonWaning))
    } else {
        None
    }
}

/// Partile aspects to the benefics, the North Node and the malefics.
/// At most one rule fires per reference body.
pub fn aspect_rules(
    planet: Planet,
    body: &BodyPosition,
    chart: &ChartSnapshot,
    calculator: &AspectCalculator,
) -> Vec<DignityRule> {
    let mut out = Vec::new();

    for reference in ASPECT_REFERENCES {
        if reference == planet {
            continue;
        }
        let Some(other) = chart.reference(reference) else {
            debug!("{reference} missing from chart; skipping its aspect rules for {planet}");
            continue;
        };

        let rules: Vec<(Aspect, RuleId)> = ASPECT_RULES
            .iter()
            .filter(|(target, _, _)| *target == reference)
            .map(|(_, aspect, rule)| (*aspect, *rule))
            .collect();
        let aspects: Vec<Aspect> = rules.iter().map(|(aspect, _)| *aspect).collect();

        if let Some(found) = calculator.partile(body.longitude, other.longitude, &aspects) {
            trace!("{planet} partile {} {reference}, orb {:.4}", found.aspect, found.orb);
            if let Some((_, rule)) = rules.iter().find(|(aspect, _)| *aspect == found.aspect) {
                out.push(DignityRule::fixed(*rule));
            }
        }
    }
    out
}

pub fn star_rules(body: &BodyPosition, chart: &ChartSnapshot, config: &ScoringConfig) -> Vec<DignityRule> {
    STAR_RULES
        .iter()
        .filter(|(star, _)| angular_separation(body.longitude, chart.star_longitude(*star)) <= config.star_orb)
        .map(|(_, rule)| DignityRule::fixed(*rule))
        .collect()
}

/// All accidental rules for `planet`, in canonical order.
pub fn resolve_accidental(
    planet: Planet,
    chart: &ChartSnapshot,
    config: &ScoringConfig,
    strength: &dyn HouseStrength,
) -> Result<Vec<DignityRule>> {
    let body = chart.body(planet)?;
    let calculator = AspectCalculator::new(config.partile_orb);
    let mut out = Vec::new();

    out.extend(house_rule(body, strength));
    out.extend(motion_rules(planet, body, config));

    match chart.reference(Planet::Sun) {
        Some(sun) => {
            out.extend(solar_rule(planet, body, sun, config));
            out.extend(rising_rule(planet, body, sun));
            out.extend(lunar_phase_rule(planet, body, sun));
        }
        None => debug!("Sun missing from chart; solar, rising and phase rules skipped for {planet}"),
    }

    out.extend(aspect_rules(planet, body, chart, &calculator));
    out.extend(star_rules(body, chart, config));
    Ok(out)
}
