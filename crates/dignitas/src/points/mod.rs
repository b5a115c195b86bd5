//! Chart points and the planets that attend them.

pub mod almuten;
pub mod attendants;
pub mod types;

pub use almuten::{almuten, almuten_candidates, dignity_holders};
pub use attendants::{auriga, doryphoros, strongest, GUARD_ASPECTS};
pub use types::{AlmutenCandidate, AlmutenResult, ChartPoint, Doryphoros, ResolvedPoint, Strongest};
