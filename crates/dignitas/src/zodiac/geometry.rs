//! Ecliptic longitude arithmetic.

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    // -1e-15 % 360 + 360 rounds up to exactly 360.0
    if normalized >= 360.0 {
        normalized -= 360.0;
    }
    normalized
}

/// Shortest arc between two longitudes, 0..=180.
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    diff.min(360.0 - diff)
}

/// Forward arc from `reference` to `body`, 0..360.
pub fn elongation(body: f64, reference: f64) -> f64 {
    normalize_degrees(body - reference)
}

/// True when `body` lies behind the Sun in zodiacal order and so rises before it.
pub fn rises_before(body: f64, sun: f64) -> bool {
    elongation(body, sun) > 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
    }

    #[test]
    fn test_angular_separation_wraps() {
        assert_eq!(angular_separation(355.0, 5.0), 10.0);
        assert_eq!(angular_separation(100.0, 280.0), 180.0);
        assert_eq!(angular_separation(10.0, 10.0), 0.0);
    }

    #[test]
    fn test_rises_before() {
        // 10 degrees behind the Sun: oriental
        assert!(rises_before(110.0, 120.0));
        // 10 degrees ahead of the Sun: occidental
        assert!(!rises_before(130.0, 120.0));
        assert!(rises_before(355.0, 5.0));
    }
}
