//! Almuten: the planet with the strongest claim over a chart point.
//!
//! Candidates are the planets holding an essential dignity over the point's
//! sign and degree. Among them the highest total score wins; equal scores go
//! to the narrowest dignity tier, and anything still level is reported as a tie.

use crate::chart::ChartSnapshot;
use crate::config::ScoringConfig;
use crate::dignity::ChartScores;
use crate::error::Result;
use crate::points::types::{AlmutenCandidate, AlmutenResult};
use crate::zodiac::{
    exaltation_ruler, face_ruler, sign_ruler, term_ruler, triplicity_lords, DignityTier, Planet, Sect,
    SignPlacement,
};
use std::collections::BTreeMap;

/// Every (planet, tier) claim over a placement for the enabled tiers.
pub fn dignity_holders(
    placement: SignPlacement,
    sect: Sect,
    tiers: &[DignityTier],
) -> Result<Vec<(Planet, DignityTier)>> {
    let SignPlacement { sign, degree } = placement;
    // Unequal sign tables can leave a degree at or past 30; the minor tiers assume equal signs
    let degree = degree.min(29.999_999);
    let mut holders = Vec::new();

    for tier in tiers {
        match tier {
            DignityTier::Rulership => holders.push((sign_ruler(sign), *tier)),
            DignityTier::Exaltation => holders.extend(exaltation_ruler(sign).map(|p| (p, *tier))),
            // Every Dorothean lord shares the tier, so this is where same-tier ties come from
            DignityTier::Triplicity => {
                holders.extend(triplicity_lords(sign.element(), sect).map(|p| (p, *tier)))
            }
            DignityTier::Term => holders.push((term_ruler(sign, degree)?, *tier)),
            DignityTier::Face => holders.push((face_ruler(sign, degree)?, *tier)),
        }
    }
    Ok(holders)
}

/// Candidates with their narrowest tier and total score, strongest first.
/// Planets without a report in `scores` cannot be candidates.
pub fn almuten_candidates(
    longitude: f64,
    chart: &ChartSnapshot,
    scores: &ChartScores,
    config: &ScoringConfig,
) -> Result<Vec<AlmutenCandidate>> {
    let placement = chart.placement_of(longitude);
    let mut best_tier: BTreeMap<Planet, DignityTier> = BTreeMap::new();

    for (planet, tier) in dignity_holders(placement, chart.sect, &config.almuten_tiers)? {
        best_tier
            .entry(planet)
            .and_modify(|current| *current = (*current).min(tier))
            .or_insert(tier);
    }

    let mut candidates: Vec<AlmutenCandidate> = best_tier
        .into_iter()
        .filter_map(|(planet, tier)| {
            scores
                .total(planet)
                .map(|score| AlmutenCandidate { planet, tier, score })
        })
        .collect();
    candidates.sort_by(|a, b| b.score.cmp(&a.score).then(a.tier.cmp(&b.tier)));
    Ok(candidates)
}

pub fn almuten(
    longitude: f64,
    chart: &ChartSnapshot,
    scores: &ChartScores,
    config: &ScoringConfig,
) -> Result<AlmutenResult> {
    let candidates = almuten_candidates(longitude, chart, scores, config)?;
    let Some(top) = candidates.first().copied() else {
        return Ok(AlmutenResult::NoCandidates);
    };

    let level: Vec<Planet> = candidates
        .iter()
        .filter(|c| c.score == top.score && c.tier == top.tier)
        .map(|c| c.planet)
        .collect();

    if level.len() > 1 {
        log::debug!("Almuten of {longitude:.2} tied between {level:?} at {}", top.score);
        return Ok(AlmutenResult::Tie {
            planets: level,
            score: top.score,
            tier: top.tier,
        });
    }

    Ok(AlmutenResult::Winner {
        planet: top.planet,
        score: top.score,
        tier: top.tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::Sign;

    #[test]
    fn test_dignity_holders_default_tiers() {
        let placement = SignPlacement { sign: Sign::Aries, degree: 15.0 };
        let holders = dignity_holders(
            placement,
            Sect::Day,
            &[DignityTier::Rulership, DignityTier::Exaltation],
        )
        .unwrap();
        assert_eq!(
            holders,
            vec![(Planet::Mars, DignityTier::Rulership), (Planet::Sun, DignityTier::Exaltation)]
        );
    }

    #[test]
    fn test_dignity_holders_minor_tiers() {
        let placement = SignPlacement { sign: Sign::Aries, degree: 15.0 };
        let tiers = [DignityTier::Triplicity, DignityTier::Term, DignityTier::Face];
        let day = dignity_holders(placement, Sect::Day, &tiers).unwrap();
        assert_eq!(
            day,
            vec![
                (Planet::Sun, DignityTier::Triplicity),
                (Planet::Jupiter, DignityTier::Triplicity),
                (Planet::Saturn, DignityTier::Triplicity),
                (Planet::Mercury, DignityTier::Term),
                (Planet::Sun, DignityTier::Face),
            ]
        );
        let night = dignity_holders(placement, Sect::Night, &tiers).unwrap();
        assert_eq!(night[0], (Planet::Jupiter, DignityTier::Triplicity));
    }

    #[test]
    fn test_gemini_has_no_exaltation_claim() {
        let placement = SignPlacement { sign: Sign::Gemini, degree: 3.0 };
        let holders = dignity_holders(placement, Sect::Day, &[DignityTier::Exaltation]).unwrap();
        assert!(holders.is_empty());
    }
}
