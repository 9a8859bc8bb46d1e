//! Rotor — wired permutation plus a rotation offset.
//!
//! ## Signal arithmetic
//! ```text
//! shift  = position - ring_setting            (mod 26)
//! entry  = letter + shift                     (mod 26)
//! exit   = wiring(entry) - shift              (mod 26)   forward
//! exit   = wiring⁻¹(entry) - shift            (mod 26)   backward
//! ```
//! Position and ring setting turn the same wiring relative to the fixed
//! contacts, in opposite directions. Entry adds the shift, exit removes
//! it. Reversing either sign breaks every vector with a non-`A` ring
//! setting or position.

use tracing::{debug, trace};

use crate::alphabet::Letter;
use crate::catalog::RotorModel;
use crate::errors::EnigmaError;
use crate::wiring::Wiring;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    model: Option<RotorModel>,
    wiring: Wiring,
    notch: Letter,
    ring_setting: Letter,
    position: Letter,
    original_position: Letter,
}

impl Rotor {
    /// Build a rotor from a raw wiring string.
    ///
    /// # Errors
    /// - [`EnigmaError::Wiring`] if the wiring is not a 26-letter permutation.
    /// - [`EnigmaError::InvalidLetter`] if `notch`, `ring_setting` or
    ///   `position` is not `A..=Z`.
    pub fn new(
        wiring: &str,
        notch: char,
        ring_setting: char,
        position: char,
    ) -> Result<Self, EnigmaError> {
        Self::build(None, wiring, notch, ring_setting, position)
    }

    /// Build a catalog rotor.
    pub fn from_model(
        model: RotorModel,
        ring_setting: char,
        position: char,
    ) -> Result<Self, EnigmaError> {
        Self::build(Some(model), model.wiring(), model.notch(), ring_setting, position)
    }

    /// Build a catalog rotor by model name (`"I"` .. `"V"`).
    ///
    /// # Errors
    /// [`EnigmaError::Model`] for an unknown name.
    pub fn by_name(name: &str, ring_setting: char, position: char) -> Result<Self, EnigmaError> {
        Self::from_model(name.parse()?, ring_setting, position)
    }

    fn build(
        model: Option<RotorModel>,
        wiring: &str,
        notch: char,
        ring_setting: char,
        position: char,
    ) -> Result<Self, EnigmaError> {
        let wiring = Wiring::parse(wiring)?;
        let notch = Letter::try_from(notch)?;
        let ring_setting = Letter::try_from(ring_setting)?;
        let position = Letter::try_from(position)?;

        let rotor = Self {
            model,
            wiring,
            notch,
            ring_setting,
            position,
            original_position: position,
        };
        debug!(
            rotor = rotor.label(),
            %ring_setting,
            %position,
            %notch,
            "rotor initialized"
        );
        Ok(rotor)
    }

    /// Catalog name, or `"Custom"` for a hand-wired rotor.
    pub fn label(&self) -> &'static str {
        self.model.map_or("Custom", RotorModel::name)
    }

    pub fn model(&self) -> Option<RotorModel> {
        self.model
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    pub fn notch(&self) -> Letter {
        self.notch
    }

    pub fn ring_setting(&self) -> Letter {
        self.ring_setting
    }

    /// Letter currently showing in the window.
    pub fn position(&self) -> Letter {
        self.position
    }

    pub fn original_position(&self) -> Letter {
        self.original_position
    }

    fn shift(&self) -> u8 {
        self.position.offset_from(self.ring_setting)
    }

    /// Wiring contact a signal on `letter` actually enters.
    pub fn entry_contact(&self, letter: Letter) -> Letter {
        letter.shifted(self.shift())
    }

    /// Output letter for a signal leaving the wiring on `contact`.
    pub fn exit_contact(&self, contact: Letter) -> Letter {
        contact.unshifted(self.shift())
    }

    /// Right to left: keyboard side toward the reflector.
    pub fn forward(&self, letter: Letter) -> Letter {
        let entry = self.entry_contact(letter);
        let translated = self.wiring.forward(entry);
        let exit = self.exit_contact(translated);
        trace!(
            rotor = self.label(),
            position = %self.position,
            ring = %self.ring_setting,
            %letter, %entry, %translated, %exit,
            "forward"
        );
        exit
    }

    /// Left to right: reflector side back toward the keyboard.
    pub fn backward(&self, letter: Letter) -> Letter {
        let entry = self.entry_contact(letter);
        let translated = self.wiring.inverse(entry);
        let exit = self.exit_contact(translated);
        trace!(
            rotor = self.label(),
            position = %self.position,
            ring = %self.ring_setting,
            %letter, %entry, %translated, %exit,
            "backward"
        );
        exit
    }

    /// Advance one position, wrapping Z→A.
    pub fn rotate(&mut self) {
        let next = self.position.next();
        trace!(rotor = self.label(), from = %self.position, to = %next, "rotate");
        self.position = next;
    }

    /// `true` when the window shows the notch letter.
    pub fn at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// `true` when one more step lands on the notch.
    pub fn notch_pending(&self) -> bool {
        self.position.next() == self.notch
    }

    /// Return to the starting position. Ring setting and wiring never change.
    pub fn reset(&mut self) {
        debug!(
            rotor = self.label(),
            from = %self.position,
            to = %self.original_position,
            "rotor reset"
        );
        self.position = self.original_position;
    }
}
