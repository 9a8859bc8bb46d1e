//! The canonical index space.
//!
//! A [`Letter`] is an index 0..26 into [`ALPHABET`](crate::constants::ALPHABET). Every wiring,
//! position, ring setting and notch is a `Letter`, so offset arithmetic
//! is plain modular addition on small integers.

use std::fmt;

use crate::constants::ALPHABET_LENGTH;
use crate::errors::EnigmaError;

const LEN: u8 = ALPHABET_LENGTH as u8;

/// One symbol of the 26-letter alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    pub const A: Letter = Letter(0);
    pub const Z: Letter = Letter(LEN - 1);

    /// Letter at `index`, or `None` if `index >= 26`.
    pub fn from_index(index: u8) -> Option<Letter> {
        (index < LEN).then_some(Letter(index))
    }

    /// Zero-based index into [`ALPHABET`](crate::constants::ALPHABET).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Successor, wrapping Z→A.
    pub fn next(self) -> Letter {
        self.shifted(1)
    }

    /// `(self + by) mod 26`.
    pub fn shifted(self, by: u8) -> Letter {
        Letter((self.0 + by % LEN) % LEN)
    }

    /// `(self - by) mod 26`.
    pub fn unshifted(self, by: u8) -> Letter {
        Letter((self.0 + LEN - by % LEN) % LEN)
    }

    /// Distance from `origin` forward to `self`, in `0..26`.
    pub fn offset_from(self, origin: Letter) -> u8 {
        (self.0 + LEN - origin.0) % LEN
    }

    /// A through Z in alphabet order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..LEN).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = EnigmaError;

    /// Accepts `'A'..='Z'` only. Lowercase is not folded here;
    /// message normalization does that before letters reach the core.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_uppercase() {
            Ok(Letter(c as u8 - b'A'))
        } else {
            Err(EnigmaError::InvalidLetter(c))
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
