// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of the Group structure and its methods.

/// Group of atoms forming one monomer of the system.
///
/// Atom indices are 1-based, referencing the atom order of the structure
/// file the group was defined for. Once constructed, the indices are
/// sorted in ascending order and contain no duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    atom_indices: Vec<usize>,
}

impl Group {
    /// Create a new valid Group structure from atom indices.
    ///
    /// ## Parameters
    /// Expects a vector of 1-based atom indices. There can be duplicate
    /// atoms in the `atom_indices`. In the final Group structure, they
    /// will be removed and the indices will be sorted in ascending order.
    pub fn from_indices(mut atom_indices: Vec<usize>) -> Self {
        atom_indices.sort_unstable();
        atom_indices.dedup();

        Group { atom_indices }
    }

    /// Get the atom indices of the group, sorted in ascending order.
    pub fn get_atom_indices(&self) -> &[usize] {
        &self.atom_indices
    }

    /// Get the number of atoms in the group.
    pub fn get_n_atoms(&self) -> usize {
        self.atom_indices.len()
    }

    /// Check whether the group contains no atoms.
    pub fn is_empty(&self) -> bool {
        self.atom_indices.is_empty()
    }

    /// Merge several groups into a single ascending list of atom indices.
    ///
    /// ## Notes
    /// - Duplicate indices are removed. For monomers of a validated
    ///   partition the groups are disjoint and no duplicates can occur.
    pub fn merge<'a>(groups: impl IntoIterator<Item = &'a Group>) -> Vec<usize> {
        let mut merged: Vec<usize> = groups
            .into_iter()
            .flat_map(|group| group.atom_indices.iter().copied())
            .collect();

        merged.sort_unstable();
        merged.dedup();
        merged
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_group_simple() {
        let group = Group::from_indices(vec![4, 1, 3]);

        assert_eq!(group.get_atom_indices(), [1, 3, 4]);
        assert_eq!(group.get_n_atoms(), 3);
        assert!(!group.is_empty());
    }

    #[test]
    fn new_group_duplicates() {
        let group = Group::from_indices(vec![2, 7, 2, 7, 5]);

        assert_eq!(group.get_atom_indices(), [2, 5, 7]);
    }

    #[test]
    fn new_group_empty() {
        let group = Group::from_indices(vec![]);

        assert_eq!(group.get_n_atoms(), 0);
        assert!(group.is_empty());
    }

    #[test]
    fn merge_disjoint() {
        let group1 = Group::from_indices(vec![1, 3, 4]);
        let group2 = Group::from_indices(vec![2, 5, 6]);

        assert_eq!(Group::merge([&group1, &group2]), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn merge_with_empty() {
        let group1 = Group::from_indices(vec![8, 2]);
        let group2 = Group::from_indices(vec![]);

        assert_eq!(Group::merge([&group1, &group2]), vec![2, 8]);
    }

    #[test]
    fn merge_single() {
        let group = Group::from_indices(vec![6, 4]);

        assert_eq!(Group::merge([&group]), vec![4, 6]);
    }
}
