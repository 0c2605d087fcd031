// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use apform::{apply_controlled_not, apply_controlled_z, apply_hadamard, apply_phase, ApState};
use num_complex::Complex64;
use rand::{distributions::Uniform, prelude::Distribution, rngs::StdRng, SeedableRng};

const SEED: u64 = 1000;

fn scrambled(num_qubits: usize, num_gates: usize, seed: u64) -> ApState {
    let mut rng = StdRng::seed_from_u64(seed);
    let distr = Uniform::new(0, usize::MAX);
    let mut state = ApState::new(num_qubits);
    for _ in 0..num_gates {
        let qubit = distr.sample(&mut rng) % num_qubits;
        let mut other = distr.sample(&mut rng) % num_qubits;
        while other == qubit {
            other = distr.sample(&mut rng) % num_qubits;
        }
        match distr.sample(&mut rng) % 4 {
            0 => state.h(qubit),
            1 => state.s(qubit),
            2 => state.cz(qubit, other),
            _ => state.cx(qubit, other),
        };
    }
    state
}

/// Magnitude of the inner product of the two expanded states; 1 means equal
/// up to a global phase.
fn overlap(left: &ApState, right: &ApState) -> f64 {
    let right_amplitudes = right.amplitudes();
    let product: Complex64 = left
        .amplitudes()
        .iter()
        .zip(&right_amplitudes)
        .map(|(a, b)| a.conj() * b)
        .sum();
    product.norm()
}

#[test]
fn hadamard_is_self_inverse() {
    let reference = scrambled(5, 150, SEED);
    for qubit in 0..5 {
        let mut state = reference.clone();
        state.h(qubit).h(qubit);
        assert!((overlap(&state, &reference) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn cz_is_symmetric_and_self_inverse() {
    let reference = scrambled(5, 150, SEED + 1);
    let mut state = reference.clone();
    state.cz(1, 3).cz(3, 1);
    assert_eq!(state, reference);
}

#[test]
fn cx_is_self_inverse() {
    let reference = scrambled(5, 150, SEED + 2);
    let mut state = reference.clone();
    state.cx(1, 3).cx(1, 3);
    assert_eq!(state, reference);
}

#[test]
fn phase_gate_has_period_four() {
    let reference = scrambled(5, 150, SEED + 3);
    let mut state = reference.clone();
    state.s(2).s(2).s(2).s(2);
    assert_eq!(state, reference);
}

#[test]
fn updates_on_disjoint_qubits_commute() {
    let reference = scrambled(6, 200, SEED + 4);
    let mut first = reference.clone();
    first.h(0).s(3);
    let mut second = reference.clone();
    second.s(3).h(0);
    assert_eq!(first, second);
}

#[test]
fn hadamard_sandwich_reverses_cx() {
    let reference = scrambled(5, 150, SEED + 5);
    let mut sandwiched = reference.clone();
    sandwiched.h(0).h(2).cx(0, 2).h(0).h(2);
    let mut reversed = reference.clone();
    reversed.cx(2, 0);
    assert!((overlap(&sandwiched, &reversed) - 1.0).abs() < 1e-9);
}

#[test]
fn cz_is_cx_conjugated_by_hadamard() {
    let reference = scrambled(5, 150, SEED + 6);
    let mut direct = reference.clone();
    direct.cz(1, 4);
    let mut conjugated = reference.clone();
    conjugated.h(4).cx(1, 4).h(4);
    assert!((overlap(&direct, &conjugated) - 1.0).abs() < 1e-9);
}

#[test]
fn free_functions_match_the_methods() {
    let reference = scrambled(5, 150, SEED + 7);
    let mut chained = reference.clone();
    chained.h(0).s(1).cz(1, 2).cx(2, 0);
    let mut spelled_out = reference.clone();
    apply_hadamard(&mut spelled_out, 0);
    apply_phase(&mut spelled_out, 1);
    apply_controlled_z(&mut spelled_out, 1, 2);
    apply_controlled_not(&mut spelled_out, 2, 0);
    assert_eq!(chained, spelled_out);
}

#[test]
fn ghz_amplitudes_sit_on_the_two_end_patterns() {
    let mut state = ApState::new(8);
    for qubit in 0..8 {
        state.h(qubit);
    }
    state.h(0);
    for target in 1..8 {
        state.cx(0, target);
    }
    let amplitudes = state.amplitudes();
    let end = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
    assert!((amplitudes[0] - end).norm() < 1e-12);
    assert!((amplitudes[255] - end).norm() < 1e-12);
    let middle: f64 = amplitudes[1..255].iter().copied().map(Complex64::norm).sum();
    assert!(middle < 1e-12);
}

#[test]
fn random_circuits_stay_normalized() {
    for round in 0..5 {
        let amplitudes = scrambled(6, 250, SEED + round).amplitudes();
        assert_eq!(amplitudes.len(), 64);
        let norm_sqr: f64 = amplitudes.iter().map(Complex64::norm_sqr).sum();
        assert!((norm_sqr - 1.0).abs() < 1e-9);
    }
}
