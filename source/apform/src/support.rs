use sorted_iter::{assume::AssumeSortedByItemExt, SortedIterator};
use sorted_vec::SortedSet;

use crate::QubitID;

/// A set of qubit positions, kept sorted so that iteration order, equality
/// and hashing are all canonical.
#[must_use]
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct QubitSet {
    qubits: SortedSet<QubitID>,
}

impl QubitSet {
    pub fn new() -> QubitSet {
        QubitSet {
            qubits: SortedSet::new(),
        }
    }

    pub fn singleton(qubit: QubitID) -> Self {
        QubitSet {
            qubits: unsafe { SortedSet::from_sorted(vec![qubit]) },
        }
    }

    pub fn pair(first: QubitID, second: QubitID) -> Self {
        [first, second].into_iter().collect()
    }

    #[must_use]
    pub fn contains(&self, qubit: QubitID) -> bool {
        self.qubits.contains(&qubit)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }

    pub fn iter(&self) -> impl SortedIterator<Item = QubitID> + '_ {
        self.qubits.iter().copied().assume_sorted_by_item()
    }

    pub fn insert(&mut self, qubit: QubitID) {
        self.qubits.push(qubit);
    }

    pub fn remove(&mut self, qubit: QubitID) {
        self.qubits.remove_item(&qubit);
    }

    /// Flips membership of `qubit`.
    pub fn toggle(&mut self, qubit: QubitID) {
        let found = self.qubits.find_or_insert(qubit);
        if found.is_found() {
            self.qubits.remove_index(found.index());
        }
    }

    /// Symmetric difference, in place.
    pub fn xor_assign(&mut self, other: &QubitSet) {
        for qubit in other.iter() {
            self.toggle(qubit);
        }
    }

    /// XOR of the bits of `pattern` at the positions in this set.
    #[must_use]
    pub fn bit_parity(&self, pattern: usize) -> bool {
        let mut parity = false;
        for qubit in self.iter() {
            parity ^= (pattern >> qubit) & 1 == 1;
        }
        parity
    }
}

impl Default for QubitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<QubitID> for QubitSet {
    fn from_iter<Iterator: IntoIterator<Item = QubitID>>(iterator: Iterator) -> Self {
        let qubits = SortedSet::from_unsorted(iterator.into_iter().collect());
        QubitSet { qubits }
    }
}

impl IntoIterator for QubitSet {
    type Item = QubitID;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.qubits.into_vec().into_iter()
    }
}
