// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display, Formatter};

use crate::{subscript_digits, Error, QubitID, QubitSet};

/// An affine parity constraint: the basis patterns it keeps are those whose
/// bits XOR to `parity` over `qubits`.
///
/// As a stabilizer condition this projects onto the `(-1)^parity`
/// eigenspace of the Z-product over `qubits`, which is why `Display`
/// renders e.g. `-Z₀Z₂`.
#[must_use]
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct Projector {
    parity: bool,
    qubits: QubitSet,
}

impl Projector {
    /// Creates the constraint `XOR(bits over qubits) == parity`.
    ///
    /// # Panics
    /// Panics if `qubits` is empty.
    pub fn new(parity: bool, qubits: QubitSet) -> Self {
        assert!(
            !qubits.is_empty(),
            "a projector must constrain at least one qubit"
        );
        Projector { parity, qubits }
    }

    /// Fallible form of [`Projector::new`].
    pub fn try_new(parity: bool, qubits: QubitSet) -> Result<Self, Error> {
        if qubits.is_empty() {
            return Err(Error::EmptyProjector);
        }
        Ok(Projector { parity, qubits })
    }

    /// Constraint fixing a single qubit to `value`.
    pub fn fixing(qubit: QubitID, value: bool) -> Self {
        Projector {
            parity: value,
            qubits: QubitSet::singleton(qubit),
        }
    }

    #[must_use]
    pub fn parity(&self) -> bool {
        self.parity
    }

    #[must_use]
    pub fn qubits(&self) -> &QubitSet {
        &self.qubits
    }

    #[must_use]
    pub fn touches(&self, qubit: QubitID) -> bool {
        self.qubits.contains(qubit)
    }

    /// Satisfied by the basis pattern `pattern` (qubit `i` at bit `i`).
    #[must_use]
    pub fn accepts(&self, pattern: usize) -> bool {
        self.qubits.bit_parity(pattern) == self.parity
    }

    /// Product with `other` as Z-string multiplication: supports combine by
    /// symmetric difference and parities add.
    pub(crate) fn multiplied_by(&self, other: &Projector) -> Projector {
        let mut qubits = self.qubits.clone();
        qubits.xor_assign(&other.qubits);
        Projector {
            parity: self.parity ^ other.parity,
            qubits,
        }
    }

    /// The same constraint with membership of `qubit` flipped.
    pub(crate) fn toggled(&self, qubit: QubitID) -> Projector {
        let mut qubits = self.qubits.clone();
        qubits.toggle(qubit);
        Projector {
            parity: self.parity,
            qubits,
        }
    }
}

impl Display for Projector {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", if self.parity { '-' } else { '+' })?;
        for qubit in self.qubits.iter() {
            write!(formatter, "Z{}", subscript_digits(qubit))?;
        }
        Ok(())
    }
}
