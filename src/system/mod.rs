// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of the System structure and its basic methods.

use std::path::Path;

use crate::errors::ParsePoscarError;
use crate::io::poscar_io::read_poscar;
use crate::structures::{
    atom::Atom, coordinates::CoordinateKind, group::Group, lattice::Lattice,
};

pub mod clusters;

/// Structure describing the molecular system: the parsed structure file
/// and the monomers defined for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct System {
    /// Comment line of the structure file.
    name: String,
    /// Scale-factor and lattice-vector lines, verbatim.
    lattice: Lattice,
    /// Species symbols in the order of the structure file.
    species: Vec<String>,
    /// Number of atoms of each species, parallel to `species`.
    counts: Vec<usize>,
    /// Verbatim `Selective dynamics` line, if the structure file has one.
    selective: Option<String>,
    /// Verbatim coordinate-mode line.
    coordinate_line: String,
    /// Coordinate type declared by the coordinate-mode line.
    coordinate_kind: CoordinateKind,
    /// Atoms in the order of the structure file; the atom with the
    /// 1-based index `i` is `atoms[i - 1]`.
    atoms: Vec<Atom>,
    /// Monomers of the system: user-defined monomers in definition order,
    /// followed by the automatically synthesized leftover monomer.
    monomers: Vec<Group>,
}

impl System {
    /// Create a new System structure.
    ///
    /// ## Notes
    /// - The system is created with no monomers defined.
    ///   Use [`System::read_monomers`] to define them.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        lattice: Lattice,
        species: Vec<String>,
        counts: Vec<usize>,
        selective: Option<String>,
        coordinate_line: &str,
        coordinate_kind: CoordinateKind,
        atoms: Vec<Atom>,
    ) -> Self {
        System {
            name: name.to_string(),
            lattice,
            species,
            counts,
            selective,
            coordinate_line: coordinate_line.to_string(),
            coordinate_kind,
            atoms,
            monomers: Vec::new(),
        }
    }

    /// Create a new System from a POSCAR/CONTCAR file.
    ///
    /// ## Returns
    /// `System` structure if successful or `ParsePoscarError` if parsing fails.
    ///
    /// ## Example
    /// ```no_run
    /// use manybody_rs::system::System;
    ///
    /// let system = match System::from_file("CONTCAR") {
    ///     Ok(x) => x,
    ///     Err(e) => {
    ///         eprintln!("{}", e);
    ///         return;
    ///     }
    /// };
    /// ```
    pub fn from_file(filename: impl AsRef<Path>) -> Result<Self, ParsePoscarError> {
        read_poscar(filename)
    }

    /// Get the name of the molecular system, i.e. the comment line of the structure file.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Get the lattice block of the system.
    pub fn get_lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Get the species symbols of the system in the order of the structure file.
    pub fn get_species(&self) -> &[String] {
        &self.species
    }

    /// Get the number of atoms of each species, parallel to `get_species`.
    pub fn get_counts(&self) -> &[usize] {
        &self.counts
    }

    /// Get the verbatim `Selective dynamics` line of the structure file, if present.
    pub fn get_selective(&self) -> Option<&str> {
        self.selective.as_deref()
    }

    /// Get the verbatim coordinate-mode line of the structure file.
    pub fn get_coordinate_line(&self) -> &str {
        &self.coordinate_line
    }

    /// Get the coordinate type of the structure file.
    pub fn get_coordinate_kind(&self) -> CoordinateKind {
        self.coordinate_kind
    }

    /// Get the atoms of the system in the order of the structure file.
    pub fn get_atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Get the number of atoms in the system.
    pub fn get_n_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// Get the species symbol of the atom with the given 1-based index.
    ///
    /// ## Returns
    /// The species symbol, or `None` if the index is 0 or exceeds the
    /// number of atoms in the system.
    pub fn get_species_of(&self, index: usize) -> Option<&str> {
        match index.checked_sub(1) {
            Some(x) => self.atoms.get(x).map(Atom::get_species),
            None => None,
        }
    }

    /// Get the monomers of the system.
    ///
    /// ## Notes
    /// - The returned slice is empty until monomers have been defined
    ///   using [`System::read_monomers`].
    /// - The last monomer is the automatically synthesized leftover
    ///   monomer, which may be empty.
    pub fn get_monomers(&self) -> &[Group] {
        &self.monomers
    }

    /// Get the number of monomers defined for the system, including the leftover monomer.
    pub fn get_n_monomers(&self) -> usize {
        self.monomers.len()
    }

    /// Get the monomer with the given 1-based number.
    ///
    /// ## Returns
    /// The monomer, or `None` if no monomer with such number exists.
    pub fn get_monomer(&self, number: usize) -> Option<&Group> {
        match number.checked_sub(1) {
            Some(x) => self.monomers.get(x),
            None => None,
        }
    }

    /// Replace the monomers of the system with a new, already validated collection.
    pub(crate) fn set_monomers(&mut self, monomers: Vec<Group>) {
        self.monomers = monomers;
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/

#[cfg(test)]
mod tests {
    use super::*;

    fn make_system() -> System {
        let lattice = Lattice::new(
            "   1.0",
            [
                "    10.0  0.0  0.0".to_string(),
                "     0.0 10.0  0.0".to_string(),
                "     0.0  0.0 10.0".to_string(),
            ],
        );

        let atoms = vec![
            Atom::new("O", "  0.1  0.1  0.1"),
            Atom::new("O", "  0.3  0.1  0.1"),
            Atom::new("H", "  0.15 0.19 0.1"),
            Atom::new("H", "  0.15 0.01 0.1"),
        ];

        System::new(
            "Test system",
            lattice,
            vec!["O".to_string(), "H".to_string()],
            vec![2, 2],
            None,
            "Direct",
            CoordinateKind::Direct,
            atoms,
        )
    }

    #[test]
    fn basic_getters() {
        let system = make_system();

        assert_eq!(system.get_name(), "Test system");
        assert_eq!(system.get_n_atoms(), 4);
        assert_eq!(system.get_species(), ["O", "H"]);
        assert_eq!(system.get_counts(), [2, 2]);
        assert_eq!(system.get_selective(), None);
        assert_eq!(system.get_coordinate_kind(), CoordinateKind::Direct);
        assert_eq!(system.get_coordinate_line(), "Direct");
    }

    #[test]
    fn species_of_atom() {
        let system = make_system();

        assert_eq!(system.get_species_of(1), Some("O"));
        assert_eq!(system.get_species_of(2), Some("O"));
        assert_eq!(system.get_species_of(3), Some("H"));
        assert_eq!(system.get_species_of(4), Some("H"));

        assert_eq!(system.get_species_of(0), None);
        assert_eq!(system.get_species_of(5), None);
    }

    #[test]
    fn no_monomers_after_creation() {
        let system = make_system();

        assert_eq!(system.get_n_monomers(), 0);
        assert!(system.get_monomers().is_empty());
        assert_eq!(system.get_monomer(1), None);
    }

    #[test]
    fn monomer_numbering() {
        let mut system = make_system();
        system.set_monomers(vec![
            Group::from_indices(vec![1, 3]),
            Group::from_indices(vec![2, 4]),
        ]);

        assert_eq!(system.get_n_monomers(), 2);
        assert_eq!(system.get_monomer(1).unwrap().get_atom_indices(), [1, 3]);
        assert_eq!(system.get_monomer(2).unwrap().get_atom_indices(), [2, 4]);
        assert_eq!(system.get_monomer(0), None);
        assert_eq!(system.get_monomer(3), None);
    }
}
