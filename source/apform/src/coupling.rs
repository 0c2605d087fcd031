// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display, Formatter};

use crate::{Error, QubitID};

/// A controlled-Z coupling between two distinct qubits. The pair is
/// unordered; construction canonicalizes so that equality and hashing
/// agree regardless of argument order.
#[must_use]
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct CzTerm {
    low: QubitID,
    high: QubitID,
}

impl CzTerm {
    /// # Panics
    /// Panics if `a == b`.
    pub fn new(a: QubitID, b: QubitID) -> Self {
        assert!(a != b, "a cz term couples two distinct qubits");
        CzTerm {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// Fallible form of [`CzTerm::new`].
    pub fn try_new(a: QubitID, b: QubitID) -> Result<Self, Error> {
        if a == b {
            return Err(Error::RepeatedCzQubit(a));
        }
        Ok(CzTerm {
            low: a.min(b),
            high: a.max(b),
        })
    }

    #[must_use]
    pub fn qubits(self) -> [QubitID; 2] {
        [self.low, self.high]
    }

    #[must_use]
    pub fn touches(self, qubit: QubitID) -> bool {
        self.low == qubit || self.high == qubit
    }

    /// Both coupled bits are set in the basis pattern, so the term
    /// contributes a sign flip there.
    #[must_use]
    pub fn applies_to(self, pattern: usize) -> bool {
        (pattern >> self.low) & 1 == 1 && (pattern >> self.high) & 1 == 1
    }
}

impl Display for CzTerm {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "CZ({}, {})", self.low, self.high)
    }
}
