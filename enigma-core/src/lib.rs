//! Enigma Core — three-rotor Enigma I cipher engine.
//!
//! Plugboard, three catalog rotors with ring settings and starting
//! positions, reflector, and a stepping state machine with the
//! middle-rotor double step.
//!
//! Stepping follows fixed rules rather than the physical pawl mechanism:
//! a carry from the right rotor takes precedence over the double step, so
//! when the right rotor reaches its notch while the middle rotor is one
//! short of its own, only the middle rotor moves. Hardware would also move
//! the left rotor there. The golden vectors in
//! `vectors/machine.vectors.json` pin these rules.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`constants`] | Alphabet, dimensions, defaults |
//! | [`errors`] | Wiring, model, plugboard and letter errors |
//! | [`alphabet`] | [`Letter`], the canonical index space |
//! | [`wiring`] | Validated permutation with O(1) inverse |
//! | [`catalog`] | Rotors I–V, reflectors B and C |
//! | [`rotor`] | Ring/position arithmetic, notch detection |
//! | [`reflector`] | Static reflecting wiring |
//! | [`plugboard`] | Up to ten symmetric letter swaps |
//! | [`normalize`] | Message cleanup and output grouping |
//! | [`machine`] | Stepping and the signal path |
//! | [`settings`] | Daily key as data; builds a machine |
//! | [`vectors`] | Golden vector generator (test-only) |
//!
//! # Example
//!
//! ```rust
//! use enigma_core::{EnigmaMachine, Plugboard, Reflector, Rotor};
//!
//! let rotors = [
//!     Rotor::by_name("I", 'A', 'A').unwrap(),
//!     Rotor::by_name("II", 'A', 'A').unwrap(),
//!     Rotor::by_name("III", 'A', 'A').unwrap(),
//! ];
//! let reflector = Reflector::by_name("B").unwrap();
//! let mut machine = EnigmaMachine::new(rotors, reflector, Plugboard::new());
//!
//! assert_eq!(machine.encipher("AAAAA"), "BDZGO");
//! machine.reset();
//! assert_eq!(machine.decipher("BDZGO"), "AAAAA");
//! ```

/// Machine constants — alphabet and dimensions.
pub mod constants;

/// Error types for enigma-core operations.
pub mod errors;

/// The 26-letter index space.
pub mod alphabet;

/// Validated wiring permutations.
pub mod wiring;

/// Historical rotor and reflector catalog.
pub mod catalog;

/// Rotor signal translation and stepping.
pub mod rotor;

/// Reflector.
pub mod reflector;

/// Plugboard connections.
pub mod plugboard;

/// Message normalization.
pub mod normalize;

/// The cipher engine.
pub mod machine;

/// Machine settings (key sheet).
pub mod settings;

/// Deterministic golden vector generator (test use only).
/// Requires the `vectors` feature: `cargo test --features vectors`.
#[cfg(feature = "vectors")]
pub mod vectors;

pub use alphabet::Letter;
pub use catalog::{ReflectorModel, RotorModel};
pub use errors::{EnigmaError, ModelError, PlugboardError, WiringError};
pub use machine::EnigmaMachine;
pub use normalize::{group_letters, normalize_message};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use settings::MachineSettings;
pub use wiring::Wiring;
