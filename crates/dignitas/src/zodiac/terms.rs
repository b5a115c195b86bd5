//! Minor essential dignities: Egyptian terms and Chaldean faces.
//!
//! Each sign is divided into 5 unequal terms and 3 faces of 10 degrees.
//! Face rulers follow the Chaldean order continuously from the first face of Aries.

use crate::error::{DignityError, Result};
use crate::zodiac::planets::Planet;
use crate::zodiac::types::Sign;

use Planet::{Jupiter, Mars, Mercury, Saturn, Venus};

// (ruler, end degree within the sign)
const EGYPTIAN_TERMS: [[(Planet, f64); 5]; 12] = [
    [(Jupiter, 6.0), (Venus, 12.0), (Mercury, 20.0), (Mars, 25.0), (Saturn, 30.0)],
    [(Venus, 8.0), (Mercury, 14.0), (Jupiter, 22.0), (Saturn, 27.0), (Mars, 30.0)],
    [(Mercury, 6.0), (Jupiter, 12.0), (Venus, 17.0), (Mars, 24.0), (Saturn, 30.0)],
    [(Mars, 7.0), (Venus, 13.0), (Mercury, 19.0), (Jupiter, 26.0), (Saturn, 30.0)],
    [(Jupiter, 6.0), (Venus, 11.0), (Saturn, 18.0), (Mercury, 24.0), (Mars, 30.0)],
    [(Mercury, 7.0), (Venus, 17.0), (Jupiter, 21.0), (Mars, 28.0), (Saturn, 30.0)],
    [(Saturn, 6.0), (Mercury, 14.0), (Jupiter, 21.0), (Venus, 28.0), (Mars, 30.0)],
    [(Mars, 7.0), (Venus, 11.0), (Mercury, 19.0), (Jupiter, 24.0), (Saturn, 30.0)],
    [(Jupiter, 12.0), (Venus, 17.0), (Mercury, 21.0), (Saturn, 26.0), (Mars, 30.0)],
    [(Mercury, 7.0), (Jupiter, 14.0), (Venus, 22.0), (Saturn, 26.0), (Mars, 30.0)],
    [(Mercury, 7.0), (Venus, 13.0), (Jupiter, 20.0), (Mars, 25.0), (Saturn, 30.0)],
    [(Venus, 12.0), (Jupiter, 16.0), (Mercury, 19.0), (Mars, 28.0), (Saturn, 30.0)],
];

const CHALDEAN_ORDER: [Planet; 7] = [
    Planet::Mars,
    Planet::Sun,
    Planet::Venus,
    Planet::Mercury,
    Planet::Moon,
    Planet::Saturn,
    Planet::Jupiter,
];

fn check_degree(degree_in_sign: f64) -> Result<()> {
    if !(0.0..30.0).contains(&degree_in_sign) {
        return Err(DignityError::invalid(
            "degree_in_sign",
            degree_in_sign,
            "must be in [0, 30)",
        ));
    }
    Ok(())
}

/// Given degree in sign (0–29.999...), returns face index 1, 2, or 3.
pub fn face_index(degree_in_sign: f64) -> Result<u8> {
    check_degree(degree_in_sign)?;
    Ok(if degree_in_sign < 10.0 {
        1
    } else if degree_in_sign < 20.0 {
        2
    } else {
        3
    })
}

pub fn face_ruler(sign: Sign, degree_in_sign: f64) -> Result<Planet> {
    let face = face_index(degree_in_sign)? as usize;
    let position = sign.index() * 3 + (face - 1);
    Ok(CHALDEAN_ORDER[position % CHALDEAN_ORDER.len()])
}

pub fn term_ruler(sign: Sign, degree_in_sign: f64) -> Result<Planet> {
    check_degree(degree_in_sign)?;
    let terms = &EGYPTIAN_TERMS[sign.index()];
    let ruler = terms
        .iter()
        .find(|(_, end)| degree_in_sign < *end)
        .map(|(planet, _)| *planet)
        .unwrap_or(terms[4].0);
    Ok(ruler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_index() {
        assert_eq!(face_index(0.0).unwrap(), 1);
        assert_eq!(face_index(9.999).unwrap(), 1);
        assert_eq!(face_index(10.0).unwrap(), 2);
        assert_eq!(face_index(19.999).unwrap(), 2);
        assert_eq!(face_index(20.0).unwrap(), 3);
        assert_eq!(face_index(29.999).unwrap(), 3);
        assert!(face_index(30.0).is_err());
        assert!(face_index(-0.5).is_err());
    }

    #[test]
    fn test_face_ruler_chaldean_sequence() {
        assert_eq!(face_ruler(Sign::Aries, 5.0).unwrap(), Planet::Mars);
        assert_eq!(face_ruler(Sign::Aries, 15.0).unwrap(), Planet::Sun);
        assert_eq!(face_ruler(Sign::Aries, 25.0).unwrap(), Planet::Venus);
        assert_eq!(face_ruler(Sign::Taurus, 5.0).unwrap(), Planet::Mercury);
        // The sequence closes on Mars in the last face of Pisces
        assert_eq!(face_ruler(Sign::Pisces, 25.0).unwrap(), Planet::Mars);
    }

    #[test]
    fn test_term_ruler_boundaries() {
        assert_eq!(term_ruler(Sign::Aries, 0.0).unwrap(), Planet::Jupiter);
        assert_eq!(term_ruler(Sign::Aries, 6.0).unwrap(), Planet::Venus);
        assert_eq!(term_ruler(Sign::Leo, 29.9).unwrap(), Planet::Mars);
        assert_eq!(term_ruler(Sign::Sagittarius, 11.5).unwrap(), Planet::Jupiter);
    }
}
