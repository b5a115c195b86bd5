use dignitas::aspects::Aspect;
use dignitas::zodiac::DignityTier;
use dignitas::{
    AlmutenResult, ChartPoint, ChartSnapshot, DignityEngine, HouseStrengthTable, Planet, ScoringConfig, Sect,
    Strongest,
};

/// Jupiter and Saturn in their own signs with identical totals (11 each):
/// own sign +5, direct +4, fast +2, and no house score.
fn twin_rulers() -> ChartSnapshot {
    ChartSnapshot::new(Sect::Day)
        .with_body(Planet::Jupiter, 250.0, 0.2, 1)
        .with_body(Planet::Saturn, 290.0, 0.05, 2)
        .with_house_strength(HouseStrengthTable::new([0; 12]))
}

#[test]
fn test_twin_rulers_score_alike() {
    let scores = DignityEngine::default().score_chart(&twin_rulers()).unwrap();
    assert_eq!(scores.total(Planet::Jupiter), Some(11));
    assert_eq!(scores.total(Planet::Saturn), Some(11));
}

#[test]
fn test_almuten_tie_on_score_and_tier() {
    let config = ScoringConfig {
        almuten_tiers: vec![DignityTier::Triplicity],
        ..ScoringConfig::default()
    };
    let engine = DignityEngine::new(config).unwrap();

    // 10 Aries: the fire lords are the Sun, Jupiter and Saturn; the Sun is not in the chart
    let result = engine.almuten(&twin_rulers(), ChartPoint::Longitude(10.0)).unwrap();
    assert!(result.is_tie());
    assert_eq!(
        result,
        AlmutenResult::Tie {
            planets: vec![Planet::Jupiter, Planet::Saturn],
            score: 11,
            tier: DignityTier::Triplicity,
        }
    );
    assert_eq!(result.winner(), None);
}

#[test]
fn test_almuten_narrowest_tier_breaks_equal_scores() {
    let config = ScoringConfig {
        almuten_tiers: vec![DignityTier::Rulership, DignityTier::Triplicity],
        ..ScoringConfig::default()
    };
    let engine = DignityEngine::new(config).unwrap();

    // 10 Capricorn: Saturn rules it and the earth lords (Venus, Moon, Mars) are absent
    let result = engine.almuten(&twin_rulers(), ChartPoint::Longitude(280.0)).unwrap();
    assert_eq!(result.winner(), Some(Planet::Saturn));

    // 10 Sagittarius: Jupiter rules it and Saturn is a fire triplicity lord; equal
    // scores go to the ruler
    let result = engine.almuten(&twin_rulers(), ChartPoint::Longitude(250.0)).unwrap();
    assert_eq!(
        result,
        AlmutenResult::Winner {
            planet: Planet::Jupiter,
            score: 11,
            tier: DignityTier::Rulership,
        }
    );
}

#[test]
fn test_almuten_of_ascendant() {
    let chart = twin_rulers().with_ascendant(255.0);
    let result = DignityEngine::default().almuten(&chart, ChartPoint::Ascendant).unwrap();
    assert_eq!(result.winner(), Some(Planet::Jupiter));
}

#[test]
fn test_almuten_without_candidates() {
    // 10 Gemini: Mercury rules it and nothing is exalted there
    let result = DignityEngine::default()
        .almuten(&twin_rulers(), ChartPoint::Longitude(70.0))
        .unwrap();
    assert_eq!(result, AlmutenResult::NoCandidates);
}

#[test]
fn test_missing_angle_is_invalid_input() {
    let err = DignityEngine::default()
        .almuten(&twin_rulers(), ChartPoint::Midheaven)
        .unwrap_err();
    assert!(matches!(err, dignitas::DignityError::InvalidInput { .. }));
}

#[test]
fn test_doryphoros_none_when_nothing_partile() {
    let chart = twin_rulers().with_ascendant(100.0);
    let guard = DignityEngine::default().doryphoros(&chart, ChartPoint::Ascendant).unwrap();
    assert!(guard.is_none());
}

#[test]
fn test_doryphoros_exact_trine() {
    let chart = twin_rulers().with_ascendant(10.0);
    let guard = DignityEngine::default()
        .doryphoros(&chart, ChartPoint::Ascendant)
        .unwrap()
        .unwrap();
    assert_eq!(guard.planet, Planet::Jupiter);
    assert_eq!(guard.aspect, Aspect::Trine);
    assert!(guard.orb < 1e-9);
}

#[test]
fn test_doryphoros_of_a_body_skips_itself() {
    let chart = twin_rulers().with_body(Planet::Venus, 250.5, 1.2, 1);
    // Venus is half a degree past Jupiter and moving away from it
    let guard = DignityEngine::default()
        .doryphoros(&chart, ChartPoint::Body(Planet::Jupiter))
        .unwrap();
    assert!(guard.is_none());

    // Jupiter is behind Venus but slower, so it never closes in either
    let guard = DignityEngine::default()
        .doryphoros(&chart, ChartPoint::Body(Planet::Venus))
        .unwrap();
    assert!(guard.is_none());
}

#[test]
fn test_auriga_and_strongest() {
    let chart = ChartSnapshot::new(Sect::Day)
        .with_body(Planet::Sun, 135.0, 0.96, 10)
        .with_body(Planet::Mercury, 120.0, 1.5, 9)
        .with_body(Planet::Venus, 160.0, 1.2, 11)
        .with_body(Planet::Mars, 170.0, 0.7, 11);
    let engine = DignityEngine::default();

    // Mercury rises before the Sun; Venus is the nearest planet after it
    assert_eq!(engine.auriga(&chart).unwrap(), Some(Planet::Venus));

    let scores = engine.score_chart(&chart).unwrap();
    let best = scores.iter().map(|r| r.total()).max().unwrap();
    match engine.strongest(&chart).unwrap() {
        Strongest::Planet { planet, score } => {
            assert_eq!(score, best);
            assert_eq!(scores.total(planet), Some(best));
        }
        Strongest::Tie { planets, score } => {
            assert_eq!(score, best);
            assert!(planets.len() > 1);
        }
        Strongest::Empty => panic!("chart has planets"),
    }
}

#[test]
fn test_strongest_reports_ties() {
    match DignityEngine::default().strongest(&twin_rulers()).unwrap() {
        Strongest::Tie { planets, score } => {
            assert_eq!(planets, vec![Planet::Jupiter, Planet::Saturn]);
            assert_eq!(score, 11);
        }
        other => panic!("expected a tie, got {other:?}"),
    }
}
