// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Dense statevector simulation over the H/S/CZ/CX gate set, used as the
//! ground truth when cross-checking compact state representations. Memory
//! and time are exponential in qubit count, so keep instances small.

use num_complex::Complex64;
use num_traits::Zero;
use std::f64::consts::FRAC_1_SQRT_2;

/// A qubit ID.
pub type QubitID = usize;

/// A register of qubits held as a dense amplitude vector.
///
/// Basis index bit `i` holds the value of qubit `i`, so index 3 of a
/// three-qubit register is the pattern `110` (qubits 0 and 1 set).
#[must_use]
#[derive(Clone, Debug)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Creates a register of `num_qubits` qubits in the all-zeros state.
    ///
    /// # Panics
    /// Panics if `num_qubits` is zero or too wide for basis indexes to fit
    /// in a `usize`.
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits > 0, "a register needs at least one qubit");
        assert!(
            num_qubits < usize::BITS as usize,
            "basis patterns for {num_qubits} qubits do not fit in a usize"
        );
        let mut amplitudes = vec![Complex64::zero(); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        StateVector {
            num_qubits,
            amplitudes,
        }
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[must_use]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Applies a Hadamard to `qubit`.
    pub fn h(&mut self, qubit: QubitID) -> &mut Self {
        let mask = self.mask(qubit);
        for index in 0..self.amplitudes.len() {
            if index & mask == 0 {
                let zero = self.amplitudes[index];
                let one = self.amplitudes[index | mask];
                self.amplitudes[index] = (zero + one) * FRAC_1_SQRT_2;
                self.amplitudes[index | mask] = (zero - one) * FRAC_1_SQRT_2;
            }
        }
        self
    }

    /// Applies the phase gate S, `diag(1, i)`, to `qubit`.
    pub fn s(&mut self, qubit: QubitID) -> &mut Self {
        let mask = self.mask(qubit);
        for (index, amplitude) in self.amplitudes.iter_mut().enumerate() {
            if index & mask != 0 {
                *amplitude *= Complex64::new(0.0, 1.0);
            }
        }
        self
    }

    /// Applies a controlled-Z between `a` and `b`.
    ///
    /// # Panics
    /// Panics if `a == b`.
    pub fn cz(&mut self, a: QubitID, b: QubitID) -> &mut Self {
        assert!(a != b, "cz needs two distinct qubits");
        let mask = self.mask(a) | self.mask(b);
        for (index, amplitude) in self.amplitudes.iter_mut().enumerate() {
            if index & mask == mask {
                *amplitude = -*amplitude;
            }
        }
        self
    }

    /// Applies a controlled-X with the given `control` and `target`.
    ///
    /// # Panics
    /// Panics if `control == target`.
    pub fn cx(&mut self, control: QubitID, target: QubitID) -> &mut Self {
        assert!(control != target, "cx needs distinct control and target");
        let control_mask = self.mask(control);
        let target_mask = self.mask(target);
        for index in 0..self.amplitudes.len() {
            if index & control_mask != 0 && index & target_mask == 0 {
                self.amplitudes.swap(index, index | target_mask);
            }
        }
        self
    }

    /// Euclidean norm of the register; 1 for any gate-reachable state.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(Complex64::norm_sqr)
            .sum::<f64>()
            .sqrt()
    }

    /// Magnitude of the inner product with `other`, given as amplitudes in
    /// the same bit order. 1 means equal up to a global phase.
    ///
    /// # Panics
    /// Panics if `other` has a different dimension.
    #[must_use]
    pub fn overlap(&self, other: &[Complex64]) -> f64 {
        assert_eq!(self.amplitudes.len(), other.len(), "dimension mismatch");
        self.amplitudes
            .iter()
            .zip(other)
            .map(|(own, their)| own.conj() * their)
            .sum::<Complex64>()
            .norm()
    }

    fn mask(&self, qubit: QubitID) -> usize {
        assert!(qubit < self.num_qubits, "qubit {qubit} out of range");
        1 << qubit
    }
}
