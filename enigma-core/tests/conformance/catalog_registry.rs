//! Conformance: Rotor and Reflector Catalog
//!
//! Wirings and notches must match the Enigma I wheel set exactly. Any
//! drift here silently changes every ciphertext.

use enigma_core::{Letter, Reflector, ReflectorModel, Rotor, RotorModel};

#[test]
fn conformance_rotor_catalog_exact() {
    let expected: [(&str, &str, char); 5] = [
        ("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", 'R'),
        ("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", 'F'),
        ("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", 'W'),
        ("IV", "ESOVPZJAYQUIRHXLNFTGKDCMWB", 'K'),
        ("V", "VZBRGITYUPSDNHLXAWMJQOFECK", 'A'),
    ];
    assert_eq!(RotorModel::ALL.len(), expected.len());
    for (model, (name, wiring, notch)) in RotorModel::ALL.into_iter().zip(expected) {
        assert_eq!(model.name(), name);
        assert_eq!(model.wiring(), wiring, "rotor {name} wiring drift");
        assert_eq!(model.notch(), notch, "rotor {name} notch drift");
    }
}

#[test]
fn conformance_reflector_catalog_exact() {
    let expected = [
        ("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT"),
        ("C", "FVPJIAOYEDRZXWGCTKUQSBNMHL"),
    ];
    assert_eq!(ReflectorModel::ALL.len(), expected.len());
    for (model, (name, wiring)) in ReflectorModel::ALL.into_iter().zip(expected) {
        assert_eq!(model.name(), name);
        assert_eq!(model.wiring(), wiring, "reflector {name} wiring drift");
    }
}

/// Catalog rotors at home position translate exactly as their wiring string.
#[test]
fn conformance_rotor_forward_matches_wiring() {
    for model in RotorModel::ALL {
        let rotor = Rotor::from_model(model, 'A', 'A').unwrap();
        let out: String = Letter::all().map(|l| rotor.forward(l).to_char()).collect();
        assert_eq!(out, model.wiring());
    }
}

#[test]
fn conformance_reflector_lookup_by_name() {
    for model in ReflectorModel::ALL {
        let by_name = Reflector::by_name(model.name()).unwrap();
        assert_eq!(by_name, Reflector::from_model(model).unwrap());
    }
}
