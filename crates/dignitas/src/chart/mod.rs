pub mod houses;
pub mod snapshot;

pub use houses::{HouseStrength, HouseStrengthTable};
pub use snapshot::{BodyPosition, ChartSnapshot};
