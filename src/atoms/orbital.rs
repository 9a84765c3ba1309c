/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Subshell labels and occupancies

use super::errors::{AtomError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subshell type in spectroscopic notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngularMomentum {
    S, // l=0
    P, // l=1
    D, // l=2
    F, // l=3
}

impl AngularMomentum {
    /// Azimuthal quantum number l
    pub fn l(self) -> u32 {
        match self {
            AngularMomentum::S => 0,
            AngularMomentum::P => 1,
            AngularMomentum::D => 2,
            AngularMomentum::F => 3,
        }
    }

    /// Spectroscopic letter
    pub fn letter(self) -> char {
        match self {
            AngularMomentum::S => 's',
            AngularMomentum::P => 'p',
            AngularMomentum::D => 'd',
            AngularMomentum::F => 'f',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            's' => Some(AngularMomentum::S),
            'p' => Some(AngularMomentum::P),
            'd' => Some(AngularMomentum::D),
            'f' => Some(AngularMomentum::F),
            _ => None,
        }
    }

    /// Maximum number of electrons in a subshell: 2*(2l+1)
    pub fn capacity(self) -> u32 {
        2 * (2 * self.l() + 1)
    }
}

/// An (n, l) subshell label such as `3d`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrbitalLabel {
    /// Principal quantum number
    pub n: u32,
    /// Angular momentum
    pub l: AngularMomentum,
}

impl OrbitalLabel {
    /// Create a label, rejecting subshells that do not exist (l >= n)
    pub fn new(n: u32, l: AngularMomentum) -> Result<Self> {
        if n == 0 || l.l() >= n {
            return Err(AtomError::InvalidConfiguration(format!(
                "no {}{} subshell exists",
                n,
                l.letter()
            )));
        }
        Ok(Self { n, l })
    }

    /// Madelung ordering key: increasing n + l, then n
    pub fn filling_key(&self) -> (u32, u32) {
        (self.n + self.l.l(), self.n)
    }

    /// Shell ordering key: increasing n, then l
    pub fn shell_key(&self) -> (u32, u32) {
        (self.n, self.l.l())
    }
}

impl fmt::Display for OrbitalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.n, self.l.letter())
    }
}

impl FromStr for OrbitalLabel {
    type Err = AtomError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let letter = s
            .chars()
            .last()
            .ok_or_else(|| AtomError::ParseError("empty orbital label".to_string()))?;
        let l = AngularMomentum::from_letter(letter)
            .ok_or_else(|| AtomError::ParseError(format!("invalid subshell letter in '{}'", s)))?;
        let n = s[..s.len() - letter.len_utf8()]
            .parse::<u32>()
            .map_err(|_| AtomError::ParseError(format!("invalid principal quantum number in '{}'", s)))?;
        OrbitalLabel::new(n, l)
    }
}

/// An occupied subshell within one atom's configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Orbital {
    label: OrbitalLabel,
    occupancy: u32,
}

impl Orbital {
    /// Create an orbital, checking the occupancy against the subshell capacity
    pub fn new(label: OrbitalLabel, occupancy: u32) -> Result<Self> {
        if occupancy == 0 || occupancy > label.l.capacity() {
            return Err(AtomError::InvalidConfiguration(format!(
                "{} cannot hold {} electrons (capacity {})",
                label,
                occupancy,
                label.l.capacity()
            )));
        }
        Ok(Self { label, occupancy })
    }

    pub fn label(&self) -> OrbitalLabel {
        self.label
    }

    pub fn n(&self) -> u32 {
        self.label.n
    }

    pub fn l(&self) -> AngularMomentum {
        self.label.l
    }

    /// Number of electrons in the subshell
    pub fn occupancy(&self) -> u32 {
        self.occupancy
    }
}

impl fmt::Display for Orbital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label, self.occupancy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        assert_eq!(AngularMomentum::S.capacity(), 2);
        assert_eq!(AngularMomentum::P.capacity(), 6);
        assert_eq!(AngularMomentum::D.capacity(), 10);
        assert_eq!(AngularMomentum::F.capacity(), 14);
    }

    #[test]
    fn test_label_parsing() {
        let label: OrbitalLabel = "3d".parse().unwrap();
        assert_eq!(label.n, 3);
        assert_eq!(label.l, AngularMomentum::D);
        assert_eq!(label.to_string(), "3d");

        assert!("2d".parse::<OrbitalLabel>().is_err());
        assert!("4g".parse::<OrbitalLabel>().is_err());
        assert!("s".parse::<OrbitalLabel>().is_err());
        assert!("".parse::<OrbitalLabel>().is_err());
    }

    #[test]
    fn test_filling_key_orders_4s_before_3d() {
        let s4 = OrbitalLabel::new(4, AngularMomentum::S).unwrap();
        let d3 = OrbitalLabel::new(3, AngularMomentum::D).unwrap();
        assert!(s4.filling_key() < d3.filling_key());
        assert!(d3.shell_key() < s4.shell_key());
    }

    #[test]
    fn test_occupancy_bounds() {
        let p2 = OrbitalLabel::new(2, AngularMomentum::P).unwrap();
        assert!(Orbital::new(p2, 6).is_ok());
        assert!(Orbital::new(p2, 7).is_err());
        assert!(Orbital::new(p2, 0).is_err());
    }
}
