use crate::aspects::types::{Aspect, AspectMatch};
use crate::zodiac::geometry::{angular_separation, normalize_degrees};

/// Default partile orb in degrees
pub const PARTILE_ORB: f64 = 1.0;

/// Deviation below which an aspect counts as exact
pub const EXACT_ORB: f64 = 0.01;

/// Finds partile aspects: those within a tight orb of the exact angle.
/// Wider ("platick") aspects are never reported.
#[derive(Debug, Clone, Copy)]
pub struct AspectCalculator {
    orb: f64,
}

impl AspectCalculator {
    pub fn new(orb: f64) -> Self {
        Self { orb }
    }

    pub fn orb(&self) -> f64 {
        self.orb
    }

    /// Closest aspect among `candidates` within the partile orb, ignoring motion
    pub fn partile(&self, lon1: f64, lon2: f64, candidates: &[Aspect]) -> Option<AspectMatch> {
        self.partile_with_motion(lon1, 0.0, lon2, 0.0, candidates)
    }

    /// Closest aspect among `candidates` within the partile orb.
    /// `speed1`/`speed2` are degrees per day and decide `is_applying`.
    pub fn partile_with_motion(
        &self,
        lon1: f64,
        speed1: f64,
        lon2: f64,
        speed2: f64,
        candidates: &[Aspect],
    ) -> Option<AspectMatch> {
        let separation = angular_separation(lon1, lon2);

        candidates
            .iter()
            .filter_map(|aspect| {
                let orb = (separation - aspect.angle()).abs();
                (orb <= self.orb).then(|| AspectMatch {
                    aspect: *aspect,
                    separation,
                    orb,
                    is_applying: is_applying(lon1, speed1, lon2, speed2, aspect.angle()),
                    is_exact: orb < EXACT_ORB,
                })
            })
            .min_by(|a, b| a.orb.total_cmp(&b.orb))
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new(PARTILE_ORB)
    }
}

/// Determine if an aspect is applying (approaching exact) by projecting
/// both bodies a short time forward.
pub fn is_applying(lon1: f64, speed1: f64, lon2: f64, speed2: f64, aspect_angle: f64) -> bool {
    let relative_speed = speed1 - speed2;
    if relative_speed.abs() < 1e-9 {
        return false;
    }

    let current_distance = (angular_separation(lon1, lon2) - aspect_angle).abs();

    // Small time step (days); the Moon covers about 0.0013 degrees in it
    let time_step = 1e-4;
    let future_angle = angular_separation(
        normalize_degrees(lon1 + speed1 * time_step),
        normalize_degrees(lon2 + speed2 * time_step),
    );
    let future_distance = (future_angle - aspect_angle).abs();

    future_distance < current_distance
}
