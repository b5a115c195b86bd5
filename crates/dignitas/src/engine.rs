//! Entry point that ties the resolvers together for one chart.

use crate::aspects::AspectCalculator;
use crate::chart::{ChartSnapshot, HouseStrength};
use crate::config::ScoringConfig;
use crate::dignity::{aggregate, resolve_accidental, resolve_essential, ChartScores, DignityReport};
use crate::error::{DignityError, Result};
use crate::points::{self, AlmutenResult, ChartPoint, Doryphoros, Strongest};
use crate::zodiac::Planet;
use log::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Stateless scorer. One engine can score any number of charts, concurrently.
#[derive(Debug, Clone, Default)]
pub struct DignityEngine {
    config: ScoringConfig,
}

impl DignityEngine {
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    fn house_strength<'a>(&'a self, chart: &'a ChartSnapshot) -> &'a dyn HouseStrength {
        match &chart.house_strength {
            Some(table) => table,
            None => &self.config.house_strength,
        }
    }

    /// Score one planet once the chart-wide fields are known to be good.
    /// Only the planet's own body must be valid; bad reference bodies are ignored.
    fn score_body(&self, chart: &ChartSnapshot, planet: Planet) -> Result<DignityReport> {
        if planet.is_node() {
            return Err(DignityError::invalid("planet", planet, "lunar nodes are not scored"));
        }
        let essential = resolve_essential(planet, chart, &self.config)?;
        let accidental = resolve_accidental(planet, chart, &self.config, self.house_strength(chart))?;
        let report = aggregate(planet, &essential, accidental)?;
        debug!(
            "{planet}: total {} (dignity {}, deficiency {})",
            report.total(),
            report.dignity(),
            report.deficiency()
        );
        Ok(report)
    }

    pub fn score_planet(&self, chart: &ChartSnapshot, planet: Planet) -> Result<DignityReport> {
        chart.validate_chart()?;
        self.score_body(chart, planet)
    }

    /// Reports for every scored planet; the first failure, including one bad body, aborts the chart
    pub fn score_chart(&self, chart: &ChartSnapshot) -> Result<ChartScores> {
        chart.validate_chart()?;
        let planets: Vec<Planet> = chart.scored_planets().collect();

        #[cfg(feature = "parallel")]
        let reports = planets
            .par_iter()
            .map(|planet| self.score_body(chart, *planet))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(not(feature = "parallel"))]
        let reports = planets
            .iter()
            .map(|planet| self.score_body(chart, *planet))
            .collect::<Result<Vec<_>>>()?;

        Ok(reports.into_iter().collect())
    }

    /// One result per planet, so the caller can skip the failures
    pub fn score_each(&self, chart: &ChartSnapshot) -> Vec<(Planet, Result<DignityReport>)> {
        let validity = chart.validate_chart();
        chart
            .scored_planets()
            .map(|planet| {
                let result = match &validity {
                    Ok(()) => self.score_body(chart, planet),
                    Err(e) => Err(e.clone()),
                };
                if let Err(e) = &result {
                    warn!("Skipping {planet}: {e}");
                }
                (planet, result)
            })
            .collect()
    }

    /// Scores the planets that succeed; failures are logged and left out
    pub fn score_lenient(&self, chart: &ChartSnapshot) -> ChartScores {
        self.score_each(chart)
            .into_iter()
            .filter_map(|(_, result)| result.ok())
            .collect()
    }

    pub fn almuten(&self, chart: &ChartSnapshot, point: ChartPoint) -> Result<AlmutenResult> {
        let scores = self.score_chart(chart)?;
        self.almuten_with_scores(chart, &scores, point)
    }

    /// Almuten against reports the caller already holds
    pub fn almuten_with_scores(
        &self,
        chart: &ChartSnapshot,
        scores: &ChartScores,
        point: ChartPoint,
    ) -> Result<AlmutenResult> {
        let resolved = point.resolve(chart)?;
        points::almuten(resolved.longitude, chart, scores, &self.config)
    }

    pub fn doryphoros(&self, chart: &ChartSnapshot, point: ChartPoint) -> Result<Option<Doryphoros>> {
        chart.validate_chart()?;
        let resolved = point.resolve(chart)?;
        let calculator = AspectCalculator::new(self.config.partile_orb);
        Ok(points::doryphoros(resolved, chart, &calculator))
    }

    pub fn auriga(&self, chart: &ChartSnapshot) -> Result<Option<Planet>> {
        chart.validate_chart()?;
        points::auriga(chart)
    }

    pub fn strongest(&self, chart: &ChartSnapshot) -> Result<Strongest> {
        Ok(points::strongest(&self.score_chart(chart)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::HouseStrengthTable;
    use crate::dignity::RuleId;
    use crate::zodiac::Sect;

    fn sample_chart() -> ChartSnapshot {
        ChartSnapshot::new(Sect::Day)
            .with_body(Planet::Sun, 135.0, 0.96, 10)
            .with_body(Planet::Moon, 40.0, 14.0, 7)
            .with_body(Planet::Mars, 100.0, 0.7, 9)
            .with_body(Planet::NorthNode, 20.0, -0.05, 6)
            .with_ascendant(190.0)
    }

    #[test]
    fn test_score_chart_skips_nodes() {
        let engine = DignityEngine::default();
        let scores = engine.score_chart(&sample_chart()).unwrap();
        assert_eq!(scores.len(), 3);
        assert!(scores.get(Planet::NorthNode).is_none());
        for report in scores.iter() {
            let sum: i32 = report.rules().iter().map(|r| r.score()).sum();
            assert_eq!(sum, report.total());
        }
    }

    #[test]
    fn test_node_cannot_be_scored() {
        let engine = DignityEngine::default();
        assert!(matches!(
            engine.score_planet(&sample_chart(), Planet::NorthNode),
            Err(DignityError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_snapshot_house_table_overrides_config() {
        let engine = DignityEngine::default();
        let chart = sample_chart().with_house_strength(HouseStrengthTable::new([0; 12]));
        let report = engine.score_planet(&chart, Planet::Sun).unwrap();
        assert!(!report.contains(RuleId::HousePlacement));

        let report = engine.score_planet(&sample_chart(), Planet::Sun).unwrap();
        assert_eq!(report.get(RuleId::HousePlacement).map(|r| r.score()), Some(5));
    }

    #[test]
    fn test_bad_body_only_fails_its_own_planet() {
        let engine = DignityEngine::default();
        // Uranus sits in a house that does not exist
        let chart = sample_chart()
            .with_body(Planet::Jupiter, 220.0, 0.1, 2)
            .with_body(Planet::Uranus, 30.0, 0.01, 13);
        assert!(engine.score_chart(&chart).is_err());

        let each = engine.score_each(&chart);
        assert_eq!(each.len(), 5);
        for (planet, result) in &each {
            assert_eq!(result.is_err(), *planet == Planet::Uranus, "{planet}");
        }
        assert!(matches!(
            engine.score_planet(&chart, Planet::Uranus),
            Err(DignityError::InvalidInput { .. })
        ));
        assert!(engine.score_planet(&chart, Planet::Mars).is_ok());

        let scores = engine.score_lenient(&chart);
        assert_eq!(scores.len(), 4);
        assert!(scores.get(Planet::Uranus).is_none());
    }

    #[test]
    fn test_bad_reference_body_is_ignored() {
        let engine = DignityEngine::default();
        // Venus exactly conjunct Mars would score, but Venus has a non-finite speed
        let chart = sample_chart().with_body(Planet::Venus, 100.0, f64::NAN, 9);
        let report = engine.score_planet(&chart, Planet::Mars).unwrap();
        assert!(!report.contains(RuleId::PartileConjunctionVenus));

        let healthy = sample_chart().with_body(Planet::Venus, 100.0, 1.1, 9);
        let report = engine.score_planet(&healthy, Planet::Mars).unwrap();
        assert!(report.contains(RuleId::PartileConjunctionVenus));
    }

    #[test]
    fn test_bad_chart_field_fails_every_planet() {
        let engine = DignityEngine::default();
        let mut chart = sample_chart();
        chart.fixed_stars.insert(crate::zodiac::FixedStar::Spica, 365.0);
        assert!(engine.score_each(&chart).iter().all(|(_, result)| result.is_err()));
        assert!(engine.score_lenient(&chart).is_empty());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ScoringConfig { partile_orb: f64::NAN, ..ScoringConfig::default() };
        assert!(DignityEngine::new(config).is_err());
    }
}
