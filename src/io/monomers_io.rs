// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of functions for reading monomer definition files.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::ParseMonomersError;
use crate::structures::group::Group;
use crate::system::System;

/// ## Methods for reading monomer definition files.
impl System {
    /// Read a monomers file and define the monomer Groups of the system.
    ///
    /// ## Returns
    /// `Ok` if the parsing is successful or `ParseMonomersError` if parsing
    /// or validation fails.
    ///
    /// ## Format
    /// One monomer per line as comma-separated 1-based atom indices.
    /// `#` starts a comment reaching to the end of the line. Whitespace is
    /// ignored. Lines that are empty after comment removal are skipped.
    ///
    /// ## Example
    /// ```no_run
    /// use manybody_rs::system::System;
    ///
    /// let mut system = System::from_file("CONTCAR").unwrap();
    ///
    /// if let Err(e) = system.read_monomers("monomers") {
    ///     eprintln!("{}", e);
    ///     return;
    /// }
    /// ```
    ///
    /// ## Notes
    /// - In case an error occurs, the system is not changed.
    /// - All validation is performed before any monomer is stored: an atom
    ///   index assigned to more than one monomer or an atom index that does
    ///   not exist in the system aborts the call, reporting every offending
    ///   index at once.
    /// - Atoms that are assigned to no monomer form an additional leftover
    ///   monomer which is appended as the last monomer, even if it is empty.
    /// - Calling this function again replaces all previously defined monomers.
    pub fn read_monomers(&mut self, filename: impl AsRef<Path>) -> Result<(), ParseMonomersError> {
        let file = match File::open(filename.as_ref()) {
            Ok(x) => x,
            Err(_) => {
                return Err(ParseMonomersError::FileNotFound(Box::from(
                    filename.as_ref(),
                )))
            }
        };

        self.parse_monomers(BufReader::new(file), filename)
    }

    /// Parse monomer definitions from any buffered reader.
    ///
    /// ## Parameters
    /// `origin` identifies the source of the content and is only used to
    /// label errors. See [`System::read_monomers`] for the format and the
    /// validation rules.
    pub fn parse_monomers(
        &mut self,
        buffer: impl BufRead,
        origin: impl AsRef<Path>,
    ) -> Result<(), ParseMonomersError> {
        let mut parsed: Vec<Vec<usize>> = Vec::new();

        for (line_number, raw_line) in buffer.lines().enumerate() {
            let line = match raw_line {
                Ok(x) => x,
                Err(_) => {
                    return Err(ParseMonomersError::LineNotFound(Box::from(
                        origin.as_ref(),
                    )))
                }
            };

            let cleaned = clean_monomer_line(&line);
            if cleaned.is_empty() {
                continue;
            }

            // a single invalid character aborts the entire run
            if let Some(invalid) = cleaned.chars().find(|c| !c.is_ascii_digit() && *c != ',') {
                return Err(ParseMonomersError::InvalidCharacter(
                    invalid,
                    line_number + 1,
                ));
            }

            parsed.push(line_as_indices(&cleaned)?);
        }

        validate_indices(&parsed, self.get_n_atoms())?;

        let mut monomers: Vec<Group> = parsed.into_iter().map(Group::from_indices).collect();
        monomers.push(leftover_group(&monomers, self.get_n_atoms()));

        self.set_monomers(monomers);
        Ok(())
    }
}

/// Remove a trailing comment and all whitespace from a line of a monomers file.
fn clean_monomer_line(line: &str) -> String {
    let content = match line.find('#') {
        Some(x) => &line[..x],
        None => line,
    };

    content.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse a cleaned line of a monomers file as atom indices, sorted ascending.
fn line_as_indices(line: &str) -> Result<Vec<usize>, ParseMonomersError> {
    let mut indices = Vec::new();

    for split in line.split(',') {
        match split.parse::<usize>() {
            Ok(x) => indices.push(x),
            Err(_) => return Err(ParseMonomersError::ParseLineErr(line.to_string())),
        }
    }

    indices.sort_unstable();
    Ok(indices)
}

/// Check that no atom index repeats and that all atom indices exist in the system.
/// Every offending index is collected before an error is reported.
fn validate_indices(parsed: &[Vec<usize>], n_atoms: usize) -> Result<(), ParseMonomersError> {
    let mut all: Vec<usize> = parsed.iter().flatten().copied().collect();
    all.sort_unstable();

    let mut duplicates: Vec<usize> = Vec::new();
    for window in all.windows(2) {
        if window[0] == window[1] && duplicates.last() != Some(&window[0]) {
            duplicates.push(window[0]);
        }
    }

    let mut out_of_range: Vec<usize> = all
        .iter()
        .copied()
        .filter(|&index| index == 0 || index > n_atoms)
        .collect();
    out_of_range.dedup();

    if !duplicates.is_empty() {
        return Err(ParseMonomersError::DuplicateIndices(duplicates));
    }

    if !out_of_range.is_empty() {
        return Err(ParseMonomersError::IndicesOutOfRange(out_of_range));
    }

    Ok(())
}

/// Synthesize the leftover monomer from the atoms assigned to no explicit monomer.
fn leftover_group(monomers: &[Group], n_atoms: usize) -> Group {
    let assigned: HashSet<usize> = monomers
        .iter()
        .flat_map(|group| group.get_atom_indices().iter().copied())
        .collect();

    let leftover: Vec<usize> = (1..=n_atoms)
        .filter(|index| !assigned.contains(index))
        .collect();

    Group::from_indices(leftover)
}

/******************************/
/*         UNIT TESTS         */
/******************************/
