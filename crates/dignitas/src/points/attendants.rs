//! Attendants of chart points: the Doryphoros (bodyguard) of any point and
//! the Auriga (charioteer) of the Sun, plus the chart's strongest planet.

use crate::aspects::{Aspect, AspectCalculator};
use crate::chart::ChartSnapshot;
use crate::dignity::ChartScores;
use crate::error::Result;
use crate::points::types::{Doryphoros, ResolvedPoint, Strongest};
use crate::zodiac::{angular_separation, rises_before, Planet};
use log::trace;

/// Aspects through which a planet can guard a point
pub const GUARD_ASPECTS: [Aspect; 3] = [Aspect::Conjunction, Aspect::Sextile, Aspect::Trine];

/// The planet in the tightest applying partile conjunction, sextile or trine to
/// the point. Exact aspects qualify. Nodes and the point's own body are skipped.
pub fn doryphoros(
    point: ResolvedPoint,
    chart: &ChartSnapshot,
    calculator: &AspectCalculator,
) -> Option<Doryphoros> {
    chart
        .scored_planets()
        .filter(|planet| Some(*planet) != point.body)
        .filter_map(|planet| {
            let body = chart.reference(planet)?;
            let found = calculator.partile_with_motion(
                body.longitude,
                body.speed,
                point.longitude,
                point.speed,
                &GUARD_ASPECTS,
            )?;
            trace!(
                "{planet} {} point at {:.2}: orb {:.4}, applying {}",
                found.aspect,
                point.longitude,
                found.orb,
                found.is_applying
            );
            (found.is_applying || found.is_exact).then_some(Doryphoros {
                planet,
                aspect: found.aspect,
                orb: found.orb,
            })
        })
        .min_by(|a, b| a.orb.total_cmp(&b.orb))
}

/// The planet nearest the Sun among those rising after it.
pub fn auriga(chart: &ChartSnapshot) -> Result<Option<Planet>> {
    let sun = chart.body(Planet::Sun)?;
    Ok(chart
        .scored_planets()
        .filter(|planet| *planet != Planet::Sun)
        .filter_map(|planet| chart.reference(planet).map(|body| (planet, body)))
        .filter(|(_, body)| !rises_before(body.longitude, sun.longitude))
        .map(|(planet, body)| (planet, angular_separation(body.longitude, sun.longitude)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(planet, _)| planet))
}

/// Planet with the highest total in the chart; a shared maximum is a tie.
pub fn strongest(scores: &ChartScores) -> Strongest {
    let Some(best) = scores.iter().map(|report| report.total()).max() else {
        return Strongest::Empty;
    };
    let planets: Vec<Planet> = scores
        .iter()
        .filter(|report| report.total() == best)
        .map(|report| report.planet())
        .collect();

    match planets.as_slice() {
        [planet] => Strongest::Planet { planet: *planet, score: best },
        _ => Strongest::Tie { planets, score: best },
    }
}
