// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of functions for reading POSCAR files and writing cluster POSCAR files.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;

use crate::errors::{ParsePoscarError, WritePoscarError};
use crate::structures::{atom::Atom, coordinates::CoordinateKind, lattice::Lattice};
use crate::system::System;

/// Read a POSCAR/CONTCAR file and construct a System structure.
///
/// ## Returns
/// `System` structure if successful or `ParsePoscarError` if parsing fails.
pub fn read_poscar(filename: impl AsRef<Path>) -> Result<System, ParsePoscarError> {
    let file = match File::open(filename.as_ref()) {
        Ok(x) => x,
        Err(_) => return Err(ParsePoscarError::FileNotFound(Box::from(filename.as_ref()))),
    };

    parse_poscar(BufReader::new(file), filename)
}

/// Parse POSCAR content from any buffered reader and construct a System structure.
///
/// ## Parameters
/// `origin` identifies the source of the content and is only used to
/// label errors, e.g. with the name of the file the content came from.
///
/// ## Supported layout
/// The fixed POSCAR layout is expected: comment line, scale factor,
/// three lattice vectors, species symbols, species counts, an optional
/// `Selective dynamics` line, the coordinate-mode line, and one
/// coordinate record per atom.
///
/// ## Notes
/// - Lines following the last coordinate record (e.g. the velocity block
///   of a CONTCAR file) are ignored.
/// - A structure with no atoms (empty species and counts lines) is valid.
pub fn parse_poscar(
    buffer: impl BufRead,
    origin: impl AsRef<Path>,
) -> Result<System, ParsePoscarError> {
    let origin = origin.as_ref();

    let mut lines = Vec::new();
    for raw_line in buffer.lines() {
        match raw_line {
            Ok(x) => lines.push(x),
            Err(_) => return Err(ParsePoscarError::LineNotFound(Box::from(origin))),
        }
    }

    if lines.len() < 8 {
        return Err(ParsePoscarError::LineNotFound(Box::from(origin)));
    }

    let name = lines[0].trim().to_string();
    let lattice = Lattice::new(
        &lines[1],
        [lines[2].clone(), lines[3].clone(), lines[4].clone()],
    );

    let species: Vec<String> = lines[5]
        .split_whitespace()
        .map(|symbol| symbol.to_string())
        .collect();

    let counts = line_as_counts(&lines[6])?;

    if species.len() != counts.len() {
        return Err(ParsePoscarError::SpeciesCountsMismatch(
            lines[5].trim().to_string(),
            lines[6].trim().to_string(),
        ));
    }

    // an optional `Selective dynamics` line shifts the rest of the file by one
    let (selective, kind_index) = match lines[7].trim_start().chars().next() {
        Some('s') | Some('S') => (Some(lines[7].clone()), 8),
        _ => (None, 7),
    };

    let coordinate_line = match lines.get(kind_index) {
        Some(x) => x.clone(),
        None => return Err(ParsePoscarError::LineNotFound(Box::from(origin))),
    };

    let coordinate_kind = match CoordinateKind::from_line(&coordinate_line) {
        Some(x) => x,
        None => {
            return Err(ParsePoscarError::ParseCoordinateKindErr(
                coordinate_line.trim().to_string(),
            ))
        }
    };

    let n_atoms: usize = counts.iter().sum();
    let first_record = kind_index + 1;

    if lines.len() < first_record + n_atoms {
        return Err(ParsePoscarError::LineNotFound(Box::from(origin)));
    }

    // bin the coordinate records into species by walking the per-species counts
    let mut atoms = Vec::with_capacity(n_atoms);
    let mut record = first_record;
    for (symbol, &count) in species.iter().zip(counts.iter()) {
        for _ in 0..count {
            atoms.push(Atom::new(symbol, &lines[record]));
            record += 1;
        }
    }

    Ok(System::new(
        &name,
        lattice,
        species,
        counts,
        selective,
        &coordinate_line,
        coordinate_kind,
        atoms,
    ))
}

/// Parse a line as per-species atom counts.
fn line_as_counts(line: &str) -> Result<Vec<usize>, ParsePoscarError> {
    let mut counts = Vec::new();

    for split in line.split_whitespace() {
        match split.parse::<usize>() {
            Ok(x) => counts.push(x),
            Err(_) => return Err(ParsePoscarError::ParseCountsErr(line.trim().to_string())),
        }
    }

    Ok(counts)
}

/// Format POSCAR header fields with three leading spaces and three-space separation.
fn format_fields<T: Display>(fields: impl IntoIterator<Item = T>) -> String {
    let joined = fields
        .into_iter()
        .map(|field| field.to_string())
        .collect::<Vec<String>>()
        .join("   ");

    format!("   {}", joined)
}

/// ## Methods for writing cluster POSCAR files.
impl System {
    /// Write a POSCAR file for the cluster formed by the given monomers.
    ///
    /// ## Returns
    /// `Ok` if writing has been successful. Otherwise `WritePoscarError`.
    ///
    /// ## Example
    /// Writing the pair cluster of monomers 1 and 3.
    /// ```no_run
    /// use manybody_rs::system::System;
    ///
    /// let mut system = System::from_file("CONTCAR").unwrap();
    /// system.read_monomers("monomers").unwrap();
    ///
    /// if let Err(e) = system.cluster_write_poscar(&[1, 3], "POSCAR_1_3") {
    ///     eprintln!("{}", e);
    ///     return;
    /// }
    /// ```
    ///
    /// ## Notes
    /// - A pre-existing file at `filename` is overwritten.
    pub fn cluster_write_poscar(
        &self,
        numbers: &[usize],
        filename: impl AsRef<Path>,
    ) -> Result<(), WritePoscarError> {
        let output = match File::create(filename.as_ref()) {
            Ok(x) => x,
            Err(_) => {
                return Err(WritePoscarError::CouldNotCreate(Box::from(
                    filename.as_ref(),
                )))
            }
        };

        let mut writer = BufWriter::new(output);
        self.write_cluster(&mut writer, numbers)?;

        writer.flush().map_err(|_| WritePoscarError::CouldNotWrite)
    }

    /// Serialize the cluster formed by the given monomers into any writer.
    ///
    /// ## Returns
    /// `Ok` if writing has been successful. Otherwise `WritePoscarError`.
    ///
    /// ## Notes
    /// - The emitted structure lists the cluster's species in the order of
    ///   their first occurrence while scanning the cluster's atom indices
    ///   in ascending order. Species without atoms in the cluster are
    ///   omitted.
    /// - The scale factor, the lattice vectors, the `Selective dynamics`
    ///   line (if present), the coordinate-mode line, and all coordinate
    ///   records are copied verbatim from the source structure.
    pub fn write_cluster(
        &self,
        writer: &mut impl Write,
        numbers: &[usize],
    ) -> Result<(), WritePoscarError> {
        let atom_indices = self.cluster_atom_indices(numbers)?;

        // species of the cluster in first-occurrence order with their counts
        let mut composition: IndexMap<&str, usize> = IndexMap::new();
        for &index in &atom_indices {
            match self.get_species_of(index) {
                Some(symbol) => *composition.entry(symbol).or_insert(0) += 1,
                None => panic!(
                    "FATAL MANYBODY ERROR | System::write_cluster | Atom index `{}` escaped validation.",
                    index
                ),
            }
        }

        let species_line = format_fields(composition.keys());

        writeln!(writer, "{}", species_line).map_err(|_| WritePoscarError::CouldNotWrite)?;

        self.get_lattice().write_poscar(writer)?;

        writeln!(writer, "{}", species_line).map_err(|_| WritePoscarError::CouldNotWrite)?;
        writeln!(writer, "{}", format_fields(composition.values()))
            .map_err(|_| WritePoscarError::CouldNotWrite)?;

        if let Some(selective) = self.get_selective() {
            writeln!(writer, "{}", selective).map_err(|_| WritePoscarError::CouldNotWrite)?;
        }

        writeln!(writer, "{}", self.get_coordinate_line())
            .map_err(|_| WritePoscarError::CouldNotWrite)?;

        for &index in &atom_indices {
            self.get_atoms()[index - 1].write_poscar(writer)?;
        }

        Ok(())
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/



#[cfg(test)]
mod tests_write_files {
    use super::*;
    use file_diff;
    use tempfile::TempDir;

    fn diff_against_expected(written: &Path, expected: &str) {
        let mut result = File::open(written).unwrap();
        let mut expected = File::open(expected).unwrap();

        assert!(file_diff::diff_files(&mut result, &mut expected));
    }

    #[test]
    fn write_clusters_full_decomposition() {
        let mut system = System::from_file("test_files/CONTCAR").unwrap();
        system.read_monomers("test_files/monomers_partial").unwrap();

        let output_dir = TempDir::new().unwrap();
        let n_written = system.write_clusters(output_dir.path(), 0).unwrap();

        assert_eq!(n_written, 3);

        diff_against_expected(
            &output_dir.path().join("POSCAR_1"),
            "test_files/expected_POSCAR_1",
        );
        diff_against_expected(
            &output_dir.path().join("POSCAR_2"),
            "test_files/expected_POSCAR_2",
        );
        diff_against_expected(
            &output_dir.path().join("POSCAR_1_2"),
            "test_files/expected_POSCAR_1_2",
        );
    }

    #[test]
    fn write_clusters_bounded_order() {
        let mut system = System::from_file("test_files/CONTCAR").unwrap();
        system.read_monomers("test_files/monomers").unwrap();

        let output_dir = TempDir::new().unwrap();

        // 3 monomers (two waters and the empty leftover), pairs at most
        let n_written = system.write_clusters(output_dir.path(), 2).unwrap();
        assert_eq!(n_written, 6);

        for name in [
            "POSCAR_1",
            "POSCAR_2",
            "POSCAR_3",
            "POSCAR_1_2",
            "POSCAR_1_3",
            "POSCAR_2_3",
        ] {
            assert!(output_dir.path().join(name).exists());
        }

        assert!(!output_dir.path().join("POSCAR_1_2_3").exists());
    }

    #[test]
    fn write_clusters_idempotent() {
        let mut system = System::from_file("test_files/CONTCAR").unwrap();
        system.read_monomers("test_files/monomers").unwrap();

        let first_dir = TempDir::new().unwrap();
        let second_dir = TempDir::new().unwrap();

        let n_first = system.write_clusters(first_dir.path(), 0).unwrap();
        let n_second = system.write_clusters(second_dir.path(), 0).unwrap();

        assert_eq!(n_first, 7);
        assert_eq!(n_second, 7);

        for numbers in crate::combinations::Combinations::new(3, 0) {
            let name = crate::system::clusters::cluster_file_name(&numbers);

            let mut first = File::open(first_dir.path().join(&name)).unwrap();
            let mut second = File::open(second_dir.path().join(&name)).unwrap();

            assert!(file_diff::diff_files(&mut first, &mut second));
        }
    }

    #[test]
    fn write_clusters_overwrites() {
        let mut system = System::from_file("test_files/CONTCAR").unwrap();
        system.read_monomers("test_files/monomers_partial").unwrap();

        let output_dir = TempDir::new().unwrap();

        std::fs::write(output_dir.path().join("POSCAR_1"), "stale content").unwrap();

        system.write_clusters(output_dir.path(), 0).unwrap();

        diff_against_expected(
            &output_dir.path().join("POSCAR_1"),
            "test_files/expected_POSCAR_1",
        );
    }

    #[test]
    fn written_files_roundtrip() {
        let mut system = System::from_file("test_files/CONTCAR").unwrap();
        system.read_monomers("test_files/monomers_partial").unwrap();

        let output_dir = TempDir::new().unwrap();
        system.write_clusters(output_dir.path(), 0).unwrap();

        for (name, n_atoms) in [("POSCAR_1", 3), ("POSCAR_2", 3), ("POSCAR_1_2", 6)] {
            let reread = read_poscar(output_dir.path().join(name)).unwrap();
            assert_eq!(reread.get_n_atoms(), n_atoms);
        }
    }
}
