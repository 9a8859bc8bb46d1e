//! Rotor and reflector catalog — the Enigma I wheel set.
//!
//! Model names map to enum variants once, at the edge (`FromStr`).
//! Everything past that point is typed; no string dispatch.
//!
//! ## Notch convention
//! [`RotorModel::notch`] is the window letter a rotor shows *after* the
//! step that carries its neighbour (turnover letter plus one). The
//! stepping logic compares a rotor's new position against it.
//!
//! | Rotor | Turnover | Notch |
//! |-------|----------|-------|
//! | I     | Q → R    | R     |
//! | II    | E → F    | F     |
//! | III   | V → W    | W     |
//! | IV    | J → K    | K     |
//! | V     | Z → A    | A     |

use std::fmt;
use std::str::FromStr;

use crate::errors::ModelError;

/// Catalog rotors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotorModel {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorModel {
    pub const ALL: [RotorModel; 5] = [
        RotorModel::I,
        RotorModel::II,
        RotorModel::III,
        RotorModel::IV,
        RotorModel::V,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RotorModel::I => "I",
            RotorModel::II => "II",
            RotorModel::III => "III",
            RotorModel::IV => "IV",
            RotorModel::V => "V",
        }
    }

    pub fn wiring(self) -> &'static str {
        match self {
            RotorModel::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorModel::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorModel::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorModel::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            RotorModel::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
        }
    }

    pub fn notch(self) -> char {
        match self {
            RotorModel::I => 'R',
            RotorModel::II => 'F',
            RotorModel::III => 'W',
            RotorModel::IV => 'K',
            RotorModel::V => 'A',
        }
    }
}

impl FromStr for RotorModel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotorModel::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| ModelError::UnknownRotor(s.to_string()))
    }
}

impl fmt::Display for RotorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Catalog reflectors (wide B and C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReflectorModel {
    B,
    C,
}

impl ReflectorModel {
    pub const ALL: [ReflectorModel; 2] = [ReflectorModel::B, ReflectorModel::C];

    pub fn name(self) -> &'static str {
        match self {
            ReflectorModel::B => "B",
            ReflectorModel::C => "C",
        }
    }

    pub fn wiring(self) -> &'static str {
        match self {
            ReflectorModel::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            ReflectorModel::C => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
        }
    }
}

impl FromStr for ReflectorModel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReflectorModel::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| ModelError::UnknownReflector(s.to_string()))
    }
}

impl fmt::Display for ReflectorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
