// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::mem::take;

use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::{CzTerm, Error, PhasePower, Projector, QubitID, QubitSet};

/// A Clifford-reachable state in affine-projector form: parity constraints,
/// CZ couplings and one power of `i` per qubit.
///
/// A fresh register carries no constraints at all, which reads back as the
/// unnormalized uniform superposition; apply a Hadamard to every qubit to
/// reach the all-zeros computational state.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApState {
    num_qubits: usize,
    projectors: FxHashSet<Projector>,
    cz_terms: FxHashSet<CzTerm>,
    phases: Vec<PhasePower>,
}

impl ApState {
    /// # Panics
    /// Panics if `num_qubits` is zero.
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits > 0, "a register needs at least one qubit");
        ApState {
            num_qubits,
            projectors: FxHashSet::default(),
            cz_terms: FxHashSet::default(),
            phases: vec![PhasePower::ZERO; num_qubits],
        }
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[must_use]
    pub fn projectors(&self) -> &FxHashSet<Projector> {
        &self.projectors
    }

    #[must_use]
    pub fn cz_terms(&self) -> &FxHashSet<CzTerm> {
        &self.cz_terms
    }

    #[must_use]
    pub fn phases(&self) -> &[PhasePower] {
        &self.phases
    }

    /// Hadamard on `qubit`.
    pub fn h(&mut self, qubit: QubitID) -> &mut Self {
        apply_hadamard(self, qubit);
        self
    }

    /// Phase gate S, `diag(1, i)`, on `qubit`.
    pub fn s(&mut self, qubit: QubitID) -> &mut Self {
        apply_phase(self, qubit);
        self
    }

    /// Controlled-Z between `a` and `b`.
    ///
    /// # Panics
    /// Panics if `a == b`.
    pub fn cz(&mut self, a: QubitID, b: QubitID) -> &mut Self {
        apply_controlled_z(self, a, b);
        self
    }

    /// Controlled-X with the given `control` and `target`.
    ///
    /// # Panics
    /// Panics if `control == target`.
    pub fn cx(&mut self, control: QubitID, target: QubitID) -> &mut Self {
        apply_controlled_not(self, control, target);
        self
    }

    /// Fallible form of [`ApState::cz`].
    pub fn try_cz(&mut self, a: QubitID, b: QubitID) -> Result<&mut Self, Error> {
        if a == b {
            return Err(Error::RepeatedCzQubit(a));
        }
        apply_controlled_z(self, a, b);
        Ok(self)
    }

    /// Fallible form of [`ApState::cx`].
    pub fn try_cx(&mut self, control: QubitID, target: QubitID) -> Result<&mut Self, Error> {
        if control == target {
            return Err(Error::RepeatedCxQubit(control));
        }
        apply_controlled_not(self, control, target);
        Ok(self)
    }
}

/// Applies a Hadamard to `qubit` of `state`.
///
/// Constraints and couplings touching `qubit` are lifted out first. With no
/// connected constraint the qubit's own phase decides between a phase flip
/// and a new single-qubit constraint; otherwise the first connected
/// constraint pivots the rest. Couplings lifted out re-enter as
/// controlled-X pivots onto `qubit` at the very end.
///
/// # Panics
/// Panics if `qubit` is out of range.
pub fn apply_hadamard(state: &mut ApState, qubit: QubitID) {
    assert!(qubit < state.num_qubits, "qubit {qubit} out of range");

    let (connected_projectors, kept_projectors): (Vec<Projector>, Vec<Projector>) =
        take(&mut state.projectors)
            .into_iter()
            .partition(|projector| projector.touches(qubit));
    let (connected_terms, kept_terms): (Vec<CzTerm>, Vec<CzTerm>) = take(&mut state.cz_terms)
        .into_iter()
        .partition(|term| term.touches(qubit));
    let mut projectors: FxHashSet<Projector> = kept_projectors.into_iter().collect();
    let mut cz_terms: FxHashSet<CzTerm> = kept_terms.into_iter().collect();
    let mut phases = take(&mut state.phases);

    let phase = phases[qubit];
    match connected_projectors.split_first() {
        None => {
            if phase.is_odd() {
                phases[qubit] += 2;
            } else {
                projectors.insert(Projector::fixing(qubit, phase.value() == 2));
            }
        }
        Some((pivot, rest)) => {
            for projector in rest {
                projectors.insert(projector.multiplied_by(pivot));
            }
            let others: Vec<QubitID> = pivot
                .qubits()
                .iter()
                .filter(|&other| other != qubit)
                .collect();
            if phase.is_even() {
                for &other in &others {
                    toggle(&mut cz_terms, CzTerm::new(qubit, other));
                }
            } else {
                let support: Vec<QubitID> = pivot.qubits().iter().collect();
                for (&a, &b) in support.iter().tuple_combinations() {
                    toggle(&mut cz_terms, CzTerm::new(a, b));
                }
            }
            for &other in &others {
                phases[other] += phase.negated_if(pivot.parity());
            }
            phases[qubit] = PhasePower::new(u8::from(pivot.parity()) * 2);
        }
    }

    state.projectors = projectors;
    state.cz_terms = cz_terms;
    state.phases = phases;

    // H conjugates each lifted coupling into a controlled-X onto `qubit`;
    // fold those in last, once per partner.
    let partners: QubitSet = connected_terms
        .iter()
        .flat_map(|term| term.qubits())
        .filter(|&partner| partner != qubit)
        .collect();
    for partner in partners {
        apply_controlled_not(state, partner, qubit);
    }
}

/// Applies the phase gate S to `qubit` of `state`.
///
/// # Panics
/// Panics if `qubit` is out of range.
pub fn apply_phase(state: &mut ApState, qubit: QubitID) {
    assert!(qubit < state.num_qubits, "qubit {qubit} out of range");
    state.phases[qubit] += 1;
}

/// Applies a controlled-Z to `state` by toggling the coupling between the
/// two qubits.
///
/// # Panics
/// Panics if `a == b` or either qubit is out of range.
pub fn apply_controlled_z(state: &mut ApState, a: QubitID, b: QubitID) {
    assert!(a < state.num_qubits, "qubit {a} out of range");
    assert!(b < state.num_qubits, "qubit {b} out of range");
    toggle(&mut state.cz_terms, CzTerm::new(a, b));
}

/// Applies a controlled-X to `state`.
///
/// Constraints touching `target` absorb `control` into their support.
/// Couplings touching `target` stay where they are; each conjugates through
/// CX into itself times a coupling on `control`, so only the control-side
/// edges are toggled in. The two phase corrections at the end do not
/// commute with the coupling toggle between them; the order follows the
/// conjugation algebra.
///
/// # Panics
/// Panics if `control == target` or either qubit is out of range.
pub fn apply_controlled_not(state: &mut ApState, control: QubitID, target: QubitID) {
    assert!(control != target, "cx needs distinct control and target");
    assert!(control < state.num_qubits, "qubit {control} out of range");
    assert!(target < state.num_qubits, "qubit {target} out of range");

    let (connected_projectors, kept_projectors): (Vec<Projector>, Vec<Projector>) =
        take(&mut state.projectors)
            .into_iter()
            .partition(|projector| projector.touches(target));
    let mut projectors: FxHashSet<Projector> = kept_projectors.into_iter().collect();
    let mut cz_terms = take(&mut state.cz_terms);
    let mut phases = take(&mut state.phases);

    let partners: QubitSet = cz_terms
        .iter()
        .filter(|term| term.touches(target))
        .flat_map(|term| term.qubits())
        .filter(|&partner| partner != target)
        .collect();

    for projector in connected_projectors {
        projectors.insert(projector.toggled(control));
    }
    for partner in partners.iter().filter(|&partner| partner != control) {
        toggle(&mut cz_terms, CzTerm::new(control, partner));
    }
    if partners.contains(control) {
        phases[control] += 2;
    }
    let target_phase = phases[target];
    if target_phase.is_odd() {
        phases[control] += target_phase.value();
        toggle(&mut cz_terms, CzTerm::new(control, target));
    } else if target_phase.value() == 2 {
        phases[control] += 2;
    }

    state.projectors = projectors;
    state.cz_terms = cz_terms;
    state.phases = phases;
}

fn toggle(terms: &mut FxHashSet<CzTerm>, term: CzTerm) {
    if !terms.insert(term) {
        terms.remove(&term);
    }
}
