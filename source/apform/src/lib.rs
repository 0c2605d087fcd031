//! Affine-projector simulation of Clifford-reachable states.
//!
//! A state is held as a set of parity constraints ([`Projector`]), a set of
//! pairwise CZ couplings ([`CzTerm`]) and one power of `i` per qubit
//! ([`PhasePower`]). The H, S, CZ and CX updates in [`state`] rewrite these
//! collections directly, with no tableau and no square roots, and
//! [`reconstruction`] expands a small register back into a dense amplitude
//! vector for verification.

pub mod coupling;
pub mod phase;
pub mod projector;
pub mod reconstruction;
pub mod state;
pub mod support;


pub use coupling::CzTerm;
pub use phase::{phase_factor, PhasePower};
pub use projector::Projector;
pub use reconstruction::{basis_amplitudes, bit_pattern};
pub use state::{apply_controlled_not, apply_controlled_z, apply_hadamard, apply_phase, ApState};
pub use support::QubitSet;

use thiserror::Error;

/// A qubit ID.
pub type QubitID = usize;

/// Rejected constructions and gate arguments.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("a projector must constrain at least one qubit")]
    EmptyProjector,
    #[error("a cz term couples two distinct qubits, got {0} twice")]
    RepeatedCzQubit(QubitID),
    #[error("cx needs distinct control and target, got {0} twice")]
    RepeatedCxQubit(QubitID),
}

#[must_use]
pub fn subscript_digits(number: usize) -> String {
    let mut res = String::new();
    for char in number.to_string().chars() {
        let digit = char.to_digit(10).unwrap_or_default() as usize;
        res.push(SUB_CHARS[digit]);
    }
    res
}

pub const SUB_CHARS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
