// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of error types used by the `manybody_rs` crate.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur when reading and parsing a POSCAR/CONTCAR file.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParsePoscarError {
    #[error("File `{0}` was not found.")]
    FileNotFound(Box<Path>),
    #[error("File `{0}` ended unexpectedly.")]
    LineNotFound(Box<Path>),
    #[error("Could not parse line `{0}` as species counts.")]
    ParseCountsErr(String),
    #[error("Species line `{0}` does not match counts line `{1}`.")]
    SpeciesCountsMismatch(String, String),
    #[error("Could not parse line `{0}` as a coordinate type.")]
    ParseCoordinateKindErr(String),
}

/// Errors that can occur when reading and parsing a monomers file.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseMonomersError {
    #[error("File `{0}` was not found.")]
    FileNotFound(Box<Path>),
    #[error("File `{0}` ended unexpectedly.")]
    LineNotFound(Box<Path>),
    #[error("Invalid character `{0}` encountered on line `{1}` of a monomers file.")]
    InvalidCharacter(char, usize),
    #[error("Could not parse line `{0}` as atom indices.")]
    ParseLineErr(String),
    #[error("Atom indices `{0:?}` are assigned to more than one monomer.")]
    DuplicateIndices(Vec<usize>),
    #[error("Atom indices `{0:?}` do not exist in the system.")]
    IndicesOutOfRange(Vec<usize>),
}

/// Errors that can occur when writing cluster POSCAR files.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WritePoscarError {
    #[error("Monomer `{0}` does not exist.")]
    MonomerNotFound(usize),
    #[error("No monomers are defined for the system.")]
    NoMonomers,
    #[error("File `{0}` could not be created.")]
    CouldNotCreate(Box<Path>),
    #[error("Could not write line into output file.")]
    CouldNotWrite,
}
