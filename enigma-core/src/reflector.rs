//! Reflector — static wiring at the far end of the rotor stack.
//!
//! Validation matches rotors: 26 letters, no duplicates, alphabet only.
//! A physical reflector is also an involution (A↔Y implies Y↔A), but
//! that is not checked. Any valid permutation is accepted; see
//! [`Wiring::is_involution`] to inspect it.

use tracing::{debug, trace};

use crate::alphabet::Letter;
use crate::catalog::ReflectorModel;
use crate::errors::EnigmaError;
use crate::wiring::Wiring;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    model: Option<ReflectorModel>,
    wiring: Wiring,
}

impl Reflector {
    /// Build a reflector from a raw wiring string.
    ///
    /// # Errors
    /// [`EnigmaError::Wiring`] if the wiring is not a 26-letter permutation.
    pub fn new(wiring: &str) -> Result<Self, EnigmaError> {
        Self::build(None, wiring)
    }

    pub fn from_model(model: ReflectorModel) -> Result<Self, EnigmaError> {
        Self::build(Some(model), model.wiring())
    }

    /// Build a catalog reflector by name (`"B"` or `"C"`).
    ///
    /// # Errors
    /// [`EnigmaError::Model`] for an unknown name.
    pub fn by_name(name: &str) -> Result<Self, EnigmaError> {
        Self::from_model(name.parse()?)
    }

    fn build(model: Option<ReflectorModel>, wiring: &str) -> Result<Self, EnigmaError> {
        let wiring = Wiring::parse(wiring)?;
        let reflector = Self { model, wiring };
        debug!(reflector = reflector.label(), wiring = %reflector.wiring, "reflector initialized");
        Ok(reflector)
    }

    pub fn label(&self) -> &'static str {
        self.model.map_or("Custom", ReflectorModel::name)
    }

    pub fn model(&self) -> Option<ReflectorModel> {
        self.model
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    pub fn reflect(&self, letter: Letter) -> Letter {
        let out = self.wiring.forward(letter);
        trace!(reflector = self.label(), %letter, %out, "reflect");
        out
    }
}
