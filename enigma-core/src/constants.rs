//! Machine constants — canonical values for the three-rotor Enigma I.
//!
//! Every module indexes into [`ALPHABET`]. Catalog wirings live in
//! [`crate::catalog`]; this module only holds the dimensions and defaults.

/// The 26-symbol alphabet. Index order is the canonical contact order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols (and contacts per rotor).
pub const ALPHABET_LENGTH: usize = 26;

/// Rotors in the machine stack (left, middle, right).
pub const ROTOR_COUNT: usize = 3;

/// Maximum plugboard cables. Each cable joins two letters.
pub const MAX_PLUGBOARD_CONNECTIONS: usize = 10;

/// Ring setting used when none is given.
pub const DEFAULT_RING_SETTING: char = 'A';

/// Starting position used when none is given.
pub const DEFAULT_POSITION: char = 'A';

/// Letters per transmission group in grouped output.
pub const DEFAULT_GROUP_SIZE: usize = 5;
