//! Conformance: Error Kind and Display Stability
//!
//! Callers branch on the variant. Display strings are part of the CLI
//! surface, so they are pinned too.

use enigma_core::{
    EnigmaError, MachineSettings, ModelError, Plugboard, PlugboardError, Reflector, Rotor,
    WiringError,
};

#[test]
fn conformance_error_display_format_stable() {
    let cases: Vec<(EnigmaError, &str)> = vec![
        (
            WiringError::WrongLength(3).into(),
            "Wiring error: must be 26 characters long, got 3",
        ),
        (
            WiringError::DuplicateLetter('A').into(),
            "Wiring error: duplicate letter 'A'",
        ),
        (
            WiringError::InvalidLetter('5').into(),
            "Wiring error: invalid letter '5'",
        ),
        (
            ModelError::UnknownRotor("VI".into()).into(),
            "Model error: unknown rotor model \"VI\"",
        ),
        (
            ModelError::UnknownReflector("D".into()).into(),
            "Model error: unknown reflector model \"D\"",
        ),
        (
            PlugboardError::ConnectionExists('A', 'C').into(),
            "Plugboard error: connection for 'A' or 'C' already exists",
        ),
        (
            PlugboardError::SelfConnection('A').into(),
            "Plugboard error: cannot connect 'A' to itself",
        ),
        (
            PlugboardError::InvalidLetter('1').into(),
            "Plugboard error: invalid letter '1'",
        ),
        (
            PlugboardError::TooManyConnections { max: 10 }.into(),
            "Plugboard error: cannot have more than 10 connections",
        ),
        (
            PlugboardError::OddLength(3).into(),
            "Plugboard error: pair string must have an even number of letters, got 3",
        ),
        (
            EnigmaError::InvalidLetter('b'),
            "Letter error: 'b' is not in the alphabet",
        ),
    ];

    for (error, expected) in &cases {
        assert_eq!(error.to_string(), *expected, "EnigmaError display drift detected");
    }
}

#[test]
fn conformance_error_is_std_error() {
    let err = EnigmaError::InvalidLetter('1');
    let _: &dyn std::error::Error = &err;
}

#[test]
fn conformance_error_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EnigmaError>();
}

// ── Construction sites → error kind ─────────────────────────────

#[test]
fn conformance_rotor_construction_maps_to_wiring_kind() {
    assert!(matches!(
        Rotor::new("ABC", 'A', 'A', 'A'),
        Err(EnigmaError::Wiring(WiringError::WrongLength(3)))
    ));
}

#[test]
fn conformance_reflector_construction_maps_to_wiring_kind() {
    assert!(matches!(
        Reflector::new("AACDEFGHIJKLMNOPQRSTUVWXYZ"),
        Err(EnigmaError::Wiring(WiringError::DuplicateLetter('A')))
    ));
}

#[test]
fn conformance_catalog_lookup_maps_to_model_kind() {
    assert!(matches!(
        Rotor::by_name("VI", 'A', 'A'),
        Err(EnigmaError::Model(ModelError::UnknownRotor(_)))
    ));
    assert!(matches!(
        Reflector::by_name("A"),
        Err(EnigmaError::Model(ModelError::UnknownReflector(_)))
    ));
}

#[test]
fn conformance_plugboard_maps_to_plugboard_kind() {
    assert!(matches!(
        "ABC".parse::<Plugboard>(),
        Err(PlugboardError::OddLength(3))
    ));
    let settings = MachineSettings {
        plugboard: "AA".into(),
        ..MachineSettings::default()
    };
    assert!(matches!(
        settings.build(),
        Err(EnigmaError::Plugboard(PlugboardError::SelfConnection('A')))
    ));
}
