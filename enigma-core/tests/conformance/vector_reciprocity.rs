//! Conformance: Vector Replay and Reciprocity
//!
//! Every case in `vectors/machine.vectors.json` must:
//! - encipher its plaintext to the recorded ciphertext on a fresh machine
//! - decipher the ciphertext back on a fresh machine
//! - produce the same output again after `reset()`

use enigma_core::vectors::MachineVectors;
use std::path::PathBuf;

fn vectors_dir() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest.join("..").join("vectors")
}

fn load_vectors() -> MachineVectors {
    let path = vectors_dir().join("machine.vectors.json");
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&data).expect("machine vectors parse failed")
}

#[test]
fn conformance_vectors_encipher() {
    for case in load_vectors().cases {
        let mut m = case.settings.build().expect("vector settings build");
        assert_eq!(m.encipher(&case.plaintext), case.ciphertext, "case {}", case.name);
    }
}

#[test]
fn conformance_vectors_decipher() {
    for case in load_vectors().cases {
        let mut m = case.settings.build().expect("vector settings build");
        assert_eq!(m.decipher(&case.ciphertext), case.plaintext, "case {}", case.name);
    }
}

#[test]
fn conformance_vectors_repeat_after_reset() {
    for case in load_vectors().cases {
        let mut m = case.settings.build().expect("vector settings build");
        let first = m.encipher(&case.plaintext);
        m.reset();
        let second = m.encipher(&case.plaintext);
        assert_eq!(first, second, "case {}", case.name);
    }
}

#[test]
fn conformance_ciphertext_never_echoes_plaintext() {
    for case in load_vectors().cases {
        for (p, c) in case.plaintext.chars().zip(case.ciphertext.chars()) {
            assert_ne!(p, c, "case {}: a letter enciphered to itself", case.name);
        }
    }
}
