// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display, Formatter};

use log::debug;
use num_complex::Complex64;
use num_traits::Zero;
use rayon::prelude::*;

use crate::{phase_factor, ApState};

impl ApState {
    /// Expands the state into a normalized dense amplitude vector; basis
    /// index bit `i` holds the value of qubit `i`.
    ///
    /// Cost is `O(2^n)`, so this is for verification of small registers
    /// only. A contradictory constraint set (reachable through hand-built
    /// projectors, never through gates) has empty support and divides by a
    /// zero norm, so every entry comes back NaN.
    ///
    /// # Panics
    /// Panics if the register is too wide for basis patterns to fit in a
    /// `usize`.
    #[must_use]
    pub fn amplitudes(&self) -> Vec<Complex64> {
        basis_amplitudes(self)
    }

    /// Writes the nonzero amplitudes to stdout, one basis pattern per line
    /// in increasing index order.
    ///
    /// # Panics
    /// Same limits as [`ApState::amplitudes`].
    pub fn print(&self) {
        print!("{self}");
    }
}

/// Normalized dense amplitudes of `state`, in basis-index order.
///
/// # Panics
/// Panics if the register is too wide for basis patterns to fit in a
/// `usize`.
#[must_use]
pub fn basis_amplitudes(state: &ApState) -> Vec<Complex64> {
    assert!(
        state.num_qubits() < usize::BITS as usize,
        "basis patterns for {} qubits do not fit in a usize",
        state.num_qubits()
    );
    debug!(
        "expanding {} qubits from {} projectors, {} cz terms",
        state.num_qubits(),
        state.projectors().len(),
        state.cz_terms().len()
    );
    let dimension = 1_usize << state.num_qubits();
    let mut amplitudes: Vec<Complex64> = (0..dimension)
        .into_par_iter()
        .map(|pattern| amplitude_of(state, pattern))
        .collect();
    let norm = amplitudes
        .iter()
        .map(Complex64::norm_sqr)
        .sum::<f64>()
        .sqrt();
    for amplitude in &mut amplitudes {
        *amplitude /= norm;
    }
    amplitudes
}

fn amplitude_of(state: &ApState, pattern: usize) -> Complex64 {
    if !state
        .projectors()
        .iter()
        .all(|projector| projector.accepts(pattern))
    {
        return Complex64::zero();
    }
    let mut exponent = 0_u8;
    for (qubit, phase) in state.phases().iter().enumerate() {
        if (pattern >> qubit) & 1 == 1 {
            exponent = exponent.wrapping_add(phase.value());
        }
    }
    for term in state.cz_terms() {
        if term.applies_to(pattern) {
            exponent = exponent.wrapping_add(2);
        }
    }
    phase_factor(exponent)
}

impl Display for ApState {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let amplitudes = basis_amplitudes(self);
        for (pattern, amplitude) in amplitudes.iter().enumerate() {
            if amplitude.norm_sqr() > 0.0 {
                writeln!(
                    formatter,
                    "{}: {:+.5}{:+.5}i",
                    bit_pattern(pattern, self.num_qubits()),
                    amplitude.re,
                    amplitude.im
                )?;
            }
        }
        Ok(())
    }
}

/// Bit values of `pattern` as a string, qubit 0 leftmost.
#[must_use]
pub fn bit_pattern(pattern: usize, num_qubits: usize) -> String {
    let mut res = String::with_capacity(num_qubits);
    for qubit in 0..num_qubits {
        res.push(if (pattern >> qubit) & 1 == 1 { '1' } else { '0' });
    }
    res
}
