pub mod calculator;
pub mod types;

pub use calculator::{is_applying, AspectCalculator, EXACT_ORB, PARTILE_ORB};
pub use types::{Aspect, AspectMatch};
