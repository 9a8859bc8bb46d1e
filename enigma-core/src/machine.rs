//! Cipher engine — stepping state machine and the six-stage signal path.
//!
//! ## Per letter
//! ```text
//! step()                                     (before enciphering)
//! plugboard → R → M → L → reflector → L → M → R → plugboard
//! ```
//!
//! ## Stepping
//! 1. The right rotor always rotates.
//! 2. If its new position is its notch, the middle rotor rotates.
//! 3. Otherwise, if the middle rotor is one step short of its own notch,
//!    the middle *and* left rotors rotate (the double step: the middle
//!    rotor moves here and again on the next carry from the right).
//! 4. The left rotor never carries; it only moves through rule 3.
//!
//! The path is self-reciprocal, so [`EnigmaMachine::decipher`] is
//! [`EnigmaMachine::encipher`]. Reset (or rebuild) to the starting
//! configuration before deciphering.
//!
//! ## Concurrency
//! Enciphering mutates rotor positions. A machine is not shared: use one
//! per message stream, or guard it with an external lock.

use tracing::{debug, trace};

use crate::alphabet::Letter;
use crate::constants::ROTOR_COUNT;
use crate::normalize::normalize_message;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

const LEFT: usize = 0;
const MIDDLE: usize = 1;
const RIGHT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnigmaMachine {
    /// Left, middle, right.
    rotors: [Rotor; ROTOR_COUNT],
    reflector: Reflector,
    plugboard: Plugboard,
}

impl EnigmaMachine {
    /// Assemble a machine. `rotors` are ordered left, middle, right.
    pub fn new(rotors: [Rotor; ROTOR_COUNT], reflector: Reflector, plugboard: Plugboard) -> Self {
        debug!(
            rotors = %rotors.iter().map(Rotor::label).collect::<Vec<_>>().join(" "),
            reflector = reflector.label(),
            plugboard = %plugboard,
            "machine assembled"
        );
        Self {
            rotors,
            reflector,
            plugboard,
        }
    }

    pub fn rotors(&self) -> &[Rotor; ROTOR_COUNT] {
        &self.rotors
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Window letters, left to right.
    pub fn positions(&self) -> [Letter; ROTOR_COUNT] {
        [
            self.rotors[LEFT].position(),
            self.rotors[MIDDLE].position(),
            self.rotors[RIGHT].position(),
        ]
    }

    /// Advance the rotors for one key press.
    pub fn step(&mut self) {
        self.rotors[RIGHT].rotate();

        if self.rotors[RIGHT].at_notch() {
            self.rotors[MIDDLE].rotate();
        } else if self.rotors[MIDDLE].notch_pending() {
            self.rotors[MIDDLE].rotate();
            self.rotors[LEFT].rotate();
        }

        trace!(
            left = %self.rotors[LEFT].position(),
            middle = %self.rotors[MIDDLE].position(),
            right = %self.rotors[RIGHT].position(),
            "stepped"
        );
    }

    /// Signal path at the current positions, without stepping.
    fn transform(&self, letter: Letter) -> Letter {
        let mut signal = self.plugboard.translate(letter);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in &self.rotors {
            signal = rotor.backward(signal);
        }
        self.plugboard.translate(signal)
    }

    /// Step, then encipher one letter.
    pub fn encipher_letter(&mut self, letter: Letter) -> Letter {
        self.step();
        let out = self.transform(letter);
        trace!(%letter, %out, "enciphered letter");
        out
    }

    /// Normalize `message` and encipher every remaining letter.
    pub fn encipher(&mut self, message: &str) -> String {
        let normalized = normalize_message(message);
        debug!(letters = normalized.len(), "enciphering message");
        normalized
            .chars()
            .filter_map(|c| Letter::try_from(c).ok())
            .map(|letter| self.encipher_letter(letter).to_char())
            .collect()
    }

    /// Identical to [`encipher`](Self::encipher).
    pub fn decipher(&mut self, message: &str) -> String {
        self.encipher(message)
    }

    /// Return every rotor to its starting position.
    /// Plugboard and reflector carry no state.
    pub fn reset(&mut self) {
        for rotor in &mut self.rotors {
            rotor.reset();
        }
        debug!("machine reset");
    }
}
