//! Error types for enigma-core.
//!
//! One enum per validation site (wiring, catalog model, plugboard) plus
//! the umbrella [`EnigmaError`]. Callers branch on the variant, never on
//! message text. Display strings are stable and covered by the
//! conformance suite.
//!
//! All errors are configuration errors: nothing here is transient, and
//! the core never retries. Correct the input and rebuild the component.

/// Rotor or reflector wiring failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WiringError {
    /// Wiring is not exactly 26 symbols long.
    #[error("Wiring error: must be 26 characters long, got {0}")]
    WrongLength(usize),

    /// A symbol appears more than once.
    #[error("Wiring error: duplicate letter {0:?}")]
    DuplicateLetter(char),

    /// A symbol is outside the A–Z alphabet.
    #[error("Wiring error: invalid letter {0:?}")]
    InvalidLetter(char),
}

/// A catalog lookup named a model that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Model error: unknown rotor model {0:?}")]
    UnknownRotor(String),

    #[error("Model error: unknown reflector model {0:?}")]
    UnknownReflector(String),
}

/// A plugboard connection was rejected.
///
/// Fatal to the single `connect` call that raised it. Pairs applied
/// earlier in a bulk operation stay connected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlugboardError {
    /// One or both letters already carry a cable.
    #[error("Plugboard error: connection for {0:?} or {1:?} already exists")]
    ConnectionExists(char, char),

    /// A letter cannot be cabled to itself.
    #[error("Plugboard error: cannot connect {0:?} to itself")]
    SelfConnection(char),

    /// A letter is outside the A–Z alphabet.
    #[error("Plugboard error: invalid letter {0:?}")]
    InvalidLetter(char),

    /// All ten cables are already in use.
    #[error("Plugboard error: cannot have more than {max} connections")]
    TooManyConnections { max: usize },

    /// A pair string had an odd number of letters after whitespace removal.
    #[error("Plugboard error: pair string must have an even number of letters, got {0}")]
    OddLength(usize),
}

/// Unified error type for all enigma-core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnigmaError {
    #[error(transparent)]
    Wiring(#[from] WiringError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Plugboard(#[from] PlugboardError),

    /// A notch, ring setting, or position was not an A–Z letter.
    #[error("Letter error: {0:?} is not in the alphabet")]
    InvalidLetter(char),
}
