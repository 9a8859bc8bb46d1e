//! Conformance: Stepping State Machine
//!
//! Window positions after each key press, including the double step.
//! The left rotor only moves with the middle rotor's own notch.

use enigma_core::{EnigmaMachine, Letter, MachineSettings, RotorModel};

fn machine(positions: [char; 3]) -> EnigmaMachine {
    MachineSettings {
        positions,
        ..MachineSettings::default()
    }
    .build()
    .unwrap()
}

fn window(m: &EnigmaMachine) -> String {
    m.positions().iter().map(|l| l.to_char()).collect()
}

fn steps(m: &mut EnigmaMachine, n: usize) -> Vec<String> {
    (0..n)
        .map(|_| {
            m.step();
            window(m)
        })
        .collect()
}

#[test]
fn conformance_right_rotor_always_steps() {
    let mut m = machine(['A', 'A', 'A']);
    assert_eq!(steps(&mut m, 3), ["AAB", "AAC", "AAD"]);
}

#[test]
fn conformance_right_rotor_wraps() {
    let mut m = machine(['A', 'A', 'Y']);
    assert_eq!(steps(&mut m, 2), ["AAZ", "AAA"]);
}

/// III carries when it arrives at W (turnover V→W).
#[test]
fn conformance_single_carry() {
    let mut m = machine(['A', 'A', 'U']);
    assert_eq!(steps(&mut m, 3), ["AAV", "ABW", "ABX"]);
}

/// II pending at E: middle and left move together, then II is carried again.
#[test]
fn conformance_double_step_sequence() {
    let mut m = machine(['A', 'D', 'U']);
    assert_eq!(steps(&mut m, 4), ["ADV", "AEW", "BFX", "BFY"]);
}

#[test]
fn conformance_double_step_from_pending_middle() {
    let mut m = machine(['A', 'E', 'A']);
    assert_eq!(steps(&mut m, 2), ["BFB", "BFC"]);
}

/// Stepping happens before the letter is enciphered.
#[test]
fn conformance_step_precedes_encipher() {
    let mut m = machine(['A', 'A', 'A']);
    m.encipher("A");
    assert_eq!(window(&m), "AAB");
}

/// With the double step the three-rotor cycle is 26 × 25 × 26, not 26³.
#[test]
fn conformance_period() {
    let mut m = machine(['A', 'A', 'A']);
    let start = m.positions();
    let mut period = 0usize;
    loop {
        m.step();
        period += 1;
        if m.positions() == start {
            break;
        }
        assert!(period < 26 * 26 * 26, "no cycle within 26^3 steps");
    }
    assert_eq!(period, 16_900);
}

#[test]
fn conformance_reset_returns_to_original_positions() {
    let mut m = machine(['Q', 'E', 'V']);
    steps(&mut m, 500);
    m.reset();
    assert_eq!(window(&m), "QEV");
}

/// Rotor V carries on arrival at A (turnover Z→A).
#[test]
fn conformance_rotor_v_carries_on_wrap() {
    let mut m = MachineSettings {
        rotors: [RotorModel::I, RotorModel::II, RotorModel::V],
        positions: ['A', 'A', 'Y'],
        ..MachineSettings::default()
    }
    .build()
    .unwrap();
    assert_eq!(steps(&mut m, 2), ["AAZ", "ABA"]);
    assert_eq!(m.rotors()[2].position(), Letter::A);
}

/// Rule 2 wins over rule 3: the right rotor reaching its notch carries the
/// middle rotor only, even when the middle rotor is one short of its own.
#[test]
fn conformance_right_carry_preempts_pending_middle() {
    let mut m = MachineSettings {
        rotors: [RotorModel::II, RotorModel::IV, RotorModel::V],
        positions: ['Q', 'J', 'Z'],
        ..MachineSettings::default()
    }
    .build()
    .unwrap();
    assert_eq!(steps(&mut m, 1), ["QKA"]);
    // The middle rotor now sits on its notch; the next carry is plain.
    assert_eq!(steps(&mut m, 1), ["QKB"]);
}
