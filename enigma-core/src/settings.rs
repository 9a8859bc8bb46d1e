//! Machine settings — the daily key as plain data.
//!
//! Holds everything needed to assemble an [`EnigmaMachine`]: wheel order,
//! ring settings, starting positions, reflector, and plugboard pairs.
//! With the `serde` feature it (de)serializes as:
//!
//! ```json
//! {
//!   "rotors": ["III", "IV", "I"],
//!   "ring_settings": ["L", "E", "T"],
//!   "positions": ["F", "R", "H"],
//!   "reflector": "B",
//!   "plugboard": "EM UG HT YI RF AJ"
//! }
//! ```
//!
//! Missing fields take their [`Default`] values.

use crate::catalog::{ReflectorModel, RotorModel};
use crate::constants::{DEFAULT_POSITION, DEFAULT_RING_SETTING, ROTOR_COUNT};
use crate::errors::EnigmaError;
use crate::machine::EnigmaMachine;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MachineSettings {
    /// Wheel order, left to right.
    pub rotors: [RotorModel; ROTOR_COUNT],
    pub ring_settings: [char; ROTOR_COUNT],
    pub positions: [char; ROTOR_COUNT],
    pub reflector: ReflectorModel,
    /// Pair string, e.g. `"AB CD"`. Empty for no cables.
    pub plugboard: String,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            rotors: [RotorModel::I, RotorModel::II, RotorModel::III],
            ring_settings: [DEFAULT_RING_SETTING; ROTOR_COUNT],
            positions: [DEFAULT_POSITION; ROTOR_COUNT],
            reflector: ReflectorModel::B,
            plugboard: String::new(),
        }
    }
}

impl MachineSettings {
    /// Assemble a fresh machine at the starting positions.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidLetter`] for a ring setting or position outside `A..=Z`.
    /// - [`EnigmaError::Plugboard`] for a rejected pair string.
    pub fn build(&self) -> Result<EnigmaMachine, EnigmaError> {
        let [left, middle, right] = [0, 1, 2].map(|i| {
            Rotor::from_model(self.rotors[i], self.ring_settings[i], self.positions[i])
        });
        let rotors = [left?, middle?, right?];
        let reflector = Reflector::from_model(self.reflector)?;
        let plugboard: Plugboard = self.plugboard.parse()?;
        Ok(EnigmaMachine::new(rotors, reflector, plugboard))
    }
}
