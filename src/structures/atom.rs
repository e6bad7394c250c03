// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of the Atom structure and its methods.

use std::io::Write;

use crate::errors::WritePoscarError;

/// Single atom of a structure: its species symbol and its verbatim
/// coordinate record from the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    species: String,
    record: String,
}

impl Atom {
    /// Create a new Atom structure with the specified species symbol and coordinate record.
    pub fn new(species: &str, record: &str) -> Self {
        Atom {
            species: species.to_string(),
            record: record.to_string(),
        }
    }

    /// Get the species symbol of the atom.
    pub fn get_species(&self) -> &str {
        &self.species
    }

    /// Get the verbatim coordinate record of the atom.
    pub fn get_record(&self) -> &str {
        &self.record
    }

    /// Write the coordinate record of the atom into an open POSCAR file.
    ///
    /// ## Notes
    /// - The record is copied verbatim, i.e. exactly as it appeared in the
    ///   source structure file, including any selective dynamics flags.
    pub fn write_poscar(&self, writer: &mut impl Write) -> Result<(), WritePoscarError> {
        writeln!(writer, "{}", self.record).map_err(|_| WritePoscarError::CouldNotWrite)
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
