//! Deterministic golden vector generator (test use only).
//!
//! Each case is a [`MachineSettings`] plus plaintext; the ciphertext is
//! whatever a freshly built machine produces. The committed file
//! `vectors/machine.vectors.json` at the workspace root is the reference.
//! `tests/vector_equivalence.rs` regenerates and compares, so any change
//! to stepping or the signal path shows up as drift.

use serde::{Deserialize, Serialize};

use crate::catalog::{ReflectorModel, RotorModel};
use crate::errors::EnigmaError;
use crate::settings::MachineSettings;

/// Top-level vector file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineVectors {
    pub description: String,
    pub version: u32,
    pub cases: Vec<MachineVector>,
}

/// One named configuration and its expected output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineVector {
    pub name: String,
    #[serde(flatten)]
    pub settings: MachineSettings,
    pub plaintext: String,
    pub ciphertext: String,
}

const DESCRIPTION: &str =
    "Enigma I golden vectors. Ciphertext is produced from a fresh machine built from the listed settings.";

fn settings(
    rotors: [RotorModel; 3],
    ring_settings: [char; 3],
    positions: [char; 3],
    reflector: ReflectorModel,
    plugboard: &str,
) -> MachineSettings {
    MachineSettings {
        rotors,
        ring_settings,
        positions,
        reflector,
        plugboard: plugboard.to_string(),
    }
}

/// The fixed case list: name, settings, plaintext.
fn cases() -> Vec<(&'static str, MachineSettings, String)> {
    use crate::catalog::ReflectorModel::{B, C};
    use crate::catalog::RotorModel::{I, II, III, IV, V};

    vec![
        (
            "default_settings_repeated_letter",
            settings([I, II, III], ['A', 'A', 'A'], ['A', 'A', 'A'], B, ""),
            "AAAAA".to_string(),
        ),
        (
            "middle_rotor_carry",
            settings([I, II, III], ['A', 'A', 'A'], ['A', 'A', 'U'], B, ""),
            "AAA".to_string(),
        ),
        (
            "double_step",
            settings([I, II, III], ['A', 'A', 'A'], ['B', 'D', 'U'], B, ""),
            "AAA".to_string(),
        ),
        (
            "full_configuration",
            settings([III, IV, I], ['L', 'E', 'T'], ['F', 'R', 'H'], B, "EM UG HT YI RF AJ"),
            "HELLOWORLD".to_string(),
        ),
        (
            "reflector_c_ten_cables",
            settings(
                [IV, V, II],
                ['B', 'U', 'L'],
                ['C', 'A', 'T'],
                C,
                "QW ER TY UI OP AS DF GH JK LZ",
            ),
            "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".to_string(),
        ),
        (
            "rotor_v_wraparound",
            settings([II, IV, V], ['Z', 'Z', 'Z'], ['Q', 'J', 'Z'], B, "AZ"),
            "ENIGMAREVEALSNOTHING".to_string(),
        ),
        (
            "long_run_225",
            settings([I, II, III], ['A', 'A', 'A'], ['A', 'A', 'A'], B, ""),
            "A".repeat(225),
        ),
        (
            "long_run_855",
            settings([I, II, III], ['A', 'A', 'A'], ['A', 'A', 'A'], B, ""),
            "A".repeat(855),
        ),
    ]
}

/// Build every case on a fresh machine.
///
/// # Errors
/// Propagates any [`EnigmaError`] from building a case's machine.
pub fn generate_machine_vectors() -> Result<MachineVectors, EnigmaError> {
    let cases = cases()
        .into_iter()
        .map(|(name, settings, plaintext)| {
            let ciphertext = settings.build()?.encipher(&plaintext);
            Ok(MachineVector {
                name: name.to_string(),
                settings,
                plaintext,
                ciphertext,
            })
        })
        .collect::<Result<Vec<_>, EnigmaError>>()?;

    Ok(MachineVectors {
        description: DESCRIPTION.to_string(),
        version: 1,
        cases,
    })
}

/// Generate the vector file as pretty-printed JSON.
///
/// # Panics
/// If a built-in case fails to build. The case list is fixed, so this
/// only fires when the catalog or validation itself regresses.
pub fn generate_machine_vectors_json() -> String {
    let vectors = generate_machine_vectors().expect("built-in vector cases must build");
    serde_json::to_string_pretty(&vectors).expect("vectors serialize")
}
