//! Zodiac value types: signs, elements and sect.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Zero-based position in the zodiac (Aries = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Sign {
        Sign::ALL[index % 12]
    }

    /// The sign six places away
    pub fn opposite(self) -> Sign {
        Sign::from_index(self.index() + 6)
    }

    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub fn slug(self) -> &'static str {
        const SIGN_NAMES: &[&str] = &[
            "aries", "taurus", "gemini", "cancer",
            "leo", "virgo", "libra", "scorpio",
            "sagittarius", "capricorn", "aquarius", "pisces",
        ];
        SIGN_NAMES[self.index()]
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = self.slug();
        let mut chars = slug.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Whether the chart is diurnal or nocturnal. Determined by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sect {
    #[default]
    Day,
    Night,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_wraps() {
        assert_eq!(Sign::Aries.opposite(), Sign::Libra);
        assert_eq!(Sign::Virgo.opposite(), Sign::Pisces);
        assert_eq!(Sign::Pisces.opposite(), Sign::Virgo);
    }

    #[test]
    fn test_elements_cycle() {
        assert_eq!(Sign::Leo.element(), Element::Fire);
        assert_eq!(Sign::Capricorn.element(), Element::Earth);
        assert_eq!(Sign::Aquarius.element(), Element::Air);
        assert_eq!(Sign::Scorpio.element(), Element::Water);
    }

    #[test]
    fn test_sect_defaults_to_day() {
        assert_eq!(Sect::default(), Sect::Day);
        let night: Sect = serde_json::from_str("\"night\"").unwrap();
        assert_eq!(night, Sect::Night);
    }

    #[test]
    fn test_display_capitalizes() {
        assert_eq!(Sign::Sagittarius.to_string(), "Sagittarius");
    }
}
