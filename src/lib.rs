// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! # manybody_rs: Many-Body Cluster Generation for Rust
//!
//! Rust library for splitting VASP structure files into monomers and
//! generating a POSCAR file for every combination of monomers up to a
//! requested order. Such files are the input of many-body expansion
//! workflows, e.g. the calculation of pairwise and triple-wise
//! interaction energies.
//!
//! ## Usage
//!
//! Run
//!
//! ```bash
//! $ cargo add manybody_rs
//! ```
//!
//! Import the crate in your Rust code:
//! ```
//! use manybody_rs::prelude::*;
//! ```
//!
//! ## Examples
//!
//! #### Generating cluster files
//!
//! Read a CONTCAR file and a monomers file and write a POSCAR file for
//! every combination of up to three monomers.
//!
//! ```no_run
//! use manybody_rs::prelude::*;
//! use std::error::Error;
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     // read a structure file
//!     let mut system = System::from_file("CONTCAR")?;
//!
//!     // read a monomers file
//!     // atoms that are assigned to no monomer form an additional,
//!     // automatically synthesized monomer
//!     system.read_monomers("monomers")?;
//!
//!     // write one POSCAR file per combination into the current directory
//!     let n_written = system.write_clusters(".", 3)?;
//!     println!("Wrote {} cluster files.", n_written);
//!
//!     Ok(())
//! }
//! ```
//!
//! #### Inspecting the monomers of a system
//!
//! ```no_run
//! use manybody_rs::prelude::*;
//!
//! let mut system = System::from_file("CONTCAR").unwrap();
//! system.read_monomers("monomers").unwrap();
//!
//! for (i, monomer) in system.get_monomers().iter().enumerate() {
//!     println!("monomer {}: {} atoms", i + 1, monomer.get_n_atoms());
//! }
//! ```
//!
//! ## Error handling
//!
//! All monomer definitions are validated before a single output file is
//! written: duplicate atom indices, out-of-range atom indices, and invalid
//! characters in the monomers file abort the run with a descriptive error.

pub mod combinations;
pub mod errors;
pub mod io;
pub mod structures;
pub mod system;

/// Reexported basic structures of the `manybody_rs` crate.
pub mod prelude {
    pub use crate::combinations::Combinations;
    pub use crate::structures::atom::Atom;
    pub use crate::structures::coordinates::CoordinateKind;
    pub use crate::structures::group::Group;
    pub use crate::structures::lattice::Lattice;
    pub use crate::system::clusters::cluster_file_name;
    pub use crate::system::System;
}
