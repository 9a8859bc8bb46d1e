//! Plugboard — symmetric letter swaps ahead of and behind the rotors.
//!
//! At most [`MAX_PLUGBOARD_CONNECTIONS`] cables; each letter carries at
//! most one. Unconnected letters pass through unchanged.
//!
//! ## Bulk connections are not atomic
//! [`Plugboard::connect_pairs`] and [`Plugboard::connect_from_str`] apply
//! pairs left to right and stop at the first rejected pair. Pairs applied
//! before it stay connected. Build into a fresh board (e.g. via
//! `str::parse::<Plugboard>`) and discard it on error if all-or-nothing
//! is needed.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::alphabet::Letter;
use crate::constants::{ALPHABET_LENGTH, MAX_PLUGBOARD_CONNECTIONS};
use crate::errors::PlugboardError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    /// `mapping[x] == x` for unconnected letters.
    mapping: [Letter; ALPHABET_LENGTH],
    /// Connections in insertion order.
    pairs: Vec<(Letter, Letter)>,
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugboard {
    /// An empty board: every letter maps to itself.
    pub fn new() -> Self {
        let mut mapping = [Letter::A; ALPHABET_LENGTH];
        for letter in Letter::all() {
            mapping[letter.index()] = letter;
        }
        Self {
            mapping,
            pairs: Vec::new(),
        }
    }

    /// Cable `a` to `b`.
    ///
    /// # Errors
    /// Checked in this order:
    /// - [`PlugboardError::ConnectionExists`] if either letter is already cabled.
    /// - [`PlugboardError::SelfConnection`] if `a == b`.
    /// - [`PlugboardError::InvalidLetter`] if either is not `A..=Z` (case-sensitive).
    /// - [`PlugboardError::TooManyConnections`] if ten cables are in use.
    pub fn connect(&mut self, a: char, b: char) -> Result<(), PlugboardError> {
        if self.is_connected_char(a) || self.is_connected_char(b) {
            return Err(PlugboardError::ConnectionExists(a, b));
        }
        if a == b {
            return Err(PlugboardError::SelfConnection(a));
        }
        let la = Letter::try_from(a).map_err(|_| PlugboardError::InvalidLetter(a))?;
        let lb = Letter::try_from(b).map_err(|_| PlugboardError::InvalidLetter(b))?;
        if self.pairs.len() >= MAX_PLUGBOARD_CONNECTIONS {
            return Err(PlugboardError::TooManyConnections {
                max: MAX_PLUGBOARD_CONNECTIONS,
            });
        }

        self.mapping[la.index()] = lb;
        self.mapping[lb.index()] = la;
        self.pairs.push((la, lb));
        debug!(%la, %lb, connections = self.pairs.len(), "plugboard connected");
        Ok(())
    }

    /// Apply each pair in order. Not atomic: see the module docs.
    pub fn connect_pairs<I>(&mut self, pairs: I) -> Result<(), PlugboardError>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        for (a, b) in pairs {
            self.connect(a, b)?;
        }
        Ok(())
    }

    /// Apply a pair string such as `"AB CD EF"`.
    ///
    /// Uppercased and stripped of whitespace first. An odd letter count
    /// is rejected before any pair is applied; after that, pairs apply
    /// left to right and stop at the first failure.
    pub fn connect_from_str(&mut self, pairs: &str) -> Result<(), PlugboardError> {
        let letters: Vec<char> = pairs
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if letters.len() % 2 != 0 {
            return Err(PlugboardError::OddLength(letters.len()));
        }
        self.connect_pairs(letters.chunks_exact(2).map(|p| (p[0], p[1])))
    }

    /// Swap `letter` with its partner, or return it unchanged.
    pub fn translate(&self, letter: Letter) -> Letter {
        let out = self.mapping[letter.index()];
        trace!(%letter, %out, "plugboard");
        out
    }

    pub fn is_connected(&self, letter: Letter) -> bool {
        self.mapping[letter.index()] != letter
    }

    fn is_connected_char(&self, c: char) -> bool {
        Letter::try_from(c).is_ok_and(|l| self.is_connected(l))
    }

    pub fn connection_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn pairs(&self) -> &[(Letter, Letter)] {
        &self.pairs
    }
}

impl FromStr for Plugboard {
    type Err = PlugboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Plugboard::new();
        board.connect_from_str(s)?;
        Ok(board)
    }
}

impl fmt::Display for Plugboard {
    /// Space-separated pairs in insertion order, e.g. `"AB CD"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (a, b)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{a}{b}")?;
        }
        Ok(())
    }
}
