pub mod boundaries;
pub mod geometry;
pub mod planets;
pub mod rulers;
pub mod stars;
pub mod terms;
pub mod types;

pub use boundaries::{SignBoundaries, SignPlacement};
pub use geometry::{angular_separation, elongation, normalize_degrees, rises_before};
pub use planets::{Planet, PlanetClass};
pub use rulers::{
    detriment_planet, domiciles, exaltation_ruler, fall_planet, is_exalted, participating_ruler,
    rules, sign_ruler, triplicity_lords, triplicity_ruler, DignityTier,
};
pub use stars::FixedStar;
pub use terms::{face_index, face_ruler, term_ruler};
pub use types::{Element, Sect, Sign};
