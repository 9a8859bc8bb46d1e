//! Wiring — a validated permutation of the alphabet.
//!
//! Held as two synchronized tables so both directions are O(1) lookups:
//! `forward[i]` is the contact that entry `i` is wired to, and
//! `inverse` undoes it.

use std::fmt;

use crate::alphabet::Letter;
use crate::constants::ALPHABET_LENGTH;
use crate::errors::WiringError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    forward: [Letter; ALPHABET_LENGTH],
    inverse: [Letter; ALPHABET_LENGTH],
}

impl Wiring {
    /// Parse a 26-letter wiring string, e.g. `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
    ///
    /// # Errors
    /// Checked in this order:
    /// - [`WiringError::WrongLength`] if the string is not 26 chars.
    /// - [`WiringError::DuplicateLetter`] if any char repeats.
    /// - [`WiringError::InvalidLetter`] if any char is not `A..=Z`.
    pub fn parse(wiring: &str) -> Result<Self, WiringError> {
        let chars: Vec<char> = wiring.chars().collect();
        if chars.len() != ALPHABET_LENGTH {
            return Err(WiringError::WrongLength(chars.len()));
        }

        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(WiringError::DuplicateLetter(*c));
            }
        }

        let mut forward = [Letter::A; ALPHABET_LENGTH];
        let mut inverse = [Letter::A; ALPHABET_LENGTH];
        for (entry, &c) in Letter::all().zip(chars.iter()) {
            let exit = Letter::try_from(c).map_err(|_| WiringError::InvalidLetter(c))?;
            forward[entry.index()] = exit;
            inverse[exit.index()] = entry;
        }

        Ok(Self { forward, inverse })
    }

    /// Contact reached from `entry`, right to left.
    pub fn forward(&self, entry: Letter) -> Letter {
        self.forward[entry.index()]
    }

    /// Contact reached from `exit`, left to right.
    pub fn inverse(&self, exit: Letter) -> Letter {
        self.inverse[exit.index()]
    }

    /// `true` when the wiring is its own inverse (a physical reflector
    /// has this property). Informational: nothing enforces it.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.forward {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
