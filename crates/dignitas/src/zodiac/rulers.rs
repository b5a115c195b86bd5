//! Sign rulers for the traditional scheme.
//!
//! Maps zodiac signs to their domicile and exaltation rulers; detriment and
//! fall follow from the opposite sign. Triplicity lords use the Dorothean
//! day/night assignment.

use crate::zodiac::planets::Planet;
use crate::zodiac::types::{Element, Sect, Sign};
use serde::{Deserialize, Serialize};

const TRADITIONAL_RULERS: [Planet; 12] = [
    Planet::Mars,    // Aries
    Planet::Venus,   // Taurus
    Planet::Mercury, // Gemini
    Planet::Moon,    // Cancer
    Planet::Sun,     // Leo
    Planet::Mercury, // Virgo
    Planet::Venus,   // Libra
    Planet::Mars,    // Scorpio
    Planet::Jupiter, // Sagittarius
    Planet::Saturn,  // Capricorn
    Planet::Saturn,  // Aquarius
    Planet::Jupiter, // Pisces
];

const EXALTATIONS: [Option<Planet>; 12] = [
    Some(Planet::Sun),     // Aries
    Some(Planet::Moon),    // Taurus
    None,                  // Gemini
    Some(Planet::Jupiter), // Cancer
    None,                  // Leo
    Some(Planet::Mercury), // Virgo
    Some(Planet::Saturn),  // Libra
    None,                  // Scorpio
    None,                  // Sagittarius
    Some(Planet::Mars),    // Capricorn
    None,                  // Aquarius
    Some(Planet::Venus),   // Pisces
];

/// Essential dignity tiers, narrowest claim first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DignityTier {
    Rulership,
    Exaltation,
    Triplicity,
    Term,
    Face,
}

pub fn sign_ruler(sign: Sign) -> Planet {
    TRADITIONAL_RULERS[sign.index()]
}

pub fn exaltation_ruler(sign: Sign) -> Option<Planet> {
    EXALTATIONS[sign.index()]
}

/// The planet in detriment here: the ruler of the opposite sign
pub fn detriment_planet(sign: Sign) -> Planet {
    sign_ruler(sign.opposite())
}

/// The planet in its fall here: the one exalted in the opposite sign
pub fn fall_planet(sign: Sign) -> Option<Planet> {
    exaltation_ruler(sign.opposite())
}

pub fn rules(planet: Planet, sign: Sign) -> bool {
    sign_ruler(sign) == planet
}

pub fn is_exalted(planet: Planet, sign: Sign) -> bool {
    exaltation_ruler(sign) == Some(planet)
}

/// Signs a planet rules (empty for outer planets and nodes)
pub fn domiciles(planet: Planet) -> Vec<Sign> {
    Sign::ALL
        .iter()
        .copied()
        .filter(|sign| sign_ruler(*sign) == planet)
        .collect()
}

/// Triplicity lord of an element for the given sect
pub fn triplicity_ruler(element: Element, sect: Sect) -> Planet {
    match (element, sect) {
        (Element::Fire, Sect::Day) => Planet::Sun,
        (Element::Fire, Sect::Night) => Planet::Jupiter,
        (Element::Earth, Sect::Day) => Planet::Venus,
        (Element::Earth, Sect::Night) => Planet::Moon,
        (Element::Air, Sect::Day) => Planet::Saturn,
        (Element::Air, Sect::Night) => Planet::Mercury,
        (Element::Water, Sect::Day) => Planet::Venus,
        (Element::Water, Sect::Night) => Planet::Mars,
    }
}

/// Participating (third) Dorothean lord of an element
pub fn participating_ruler(element: Element) -> Planet {
    match element {
        Element::Fire => Planet::Saturn,
        Element::Earth => Planet::Mars,
        Element::Air => Planet::Jupiter,
        Element::Water => Planet::Moon,
    }
}

/// All three triplicity lords: the sect lord first, then the lord of the
/// other sect, then the participating lord.
pub fn triplicity_lords(element: Element, sect: Sect) -> [Planet; 3] {
    let other = match sect {
        Sect::Day => Sect::Night,
        Sect::Night => Sect::Day,
    };
    [
        triplicity_ruler(element, sect),
        triplicity_ruler(element, other),
        participating_ruler(element),
    ]
}
