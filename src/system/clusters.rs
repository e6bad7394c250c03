// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of System methods for generating many-body clusters.

use std::path::Path;

use crate::combinations::Combinations;
use crate::errors::WritePoscarError;
use crate::structures::group::Group;
use crate::system::System;

/// Get the name of the output file for the given combination of monomer numbers.
///
/// The monomer numbers are joined by underscores and appended to the
/// `POSCAR_` stem, e.g. the combination of monomers 1, 2, and 4 is
/// written into `POSCAR_1_2_4`.
pub fn cluster_file_name(numbers: &[usize]) -> String {
    let joined = numbers
        .iter()
        .map(|number| number.to_string())
        .collect::<Vec<String>>()
        .join("_");

    format!("POSCAR_{}", joined)
}

/// ## Methods for generating many-body clusters.
impl System {
    /// Collect the atom indices of the cluster formed by the given monomers.
    ///
    /// ## Returns
    /// Ascending atom indices of the cluster if successful.
    /// `WritePoscarError::NoMonomers` if no monomers are defined for the
    /// system, or `WritePoscarError::MonomerNotFound` if any of the
    /// monomer numbers does not exist.
    pub fn cluster_atom_indices(&self, numbers: &[usize]) -> Result<Vec<usize>, WritePoscarError> {
        if self.get_n_monomers() == 0 {
            return Err(WritePoscarError::NoMonomers);
        }

        let mut groups = Vec::with_capacity(numbers.len());
        for &number in numbers {
            match self.get_monomer(number) {
                Some(x) => groups.push(x),
                None => return Err(WritePoscarError::MonomerNotFound(number)),
            }
        }

        Ok(Group::merge(groups))
    }

    /// Write POSCAR files for all combinations of monomers up to the given order.
    ///
    /// ## Returns
    /// The number of files written if successful. Otherwise `WritePoscarError`.
    ///
    /// ## Parameters
    /// `max_order` limits how many monomers are combined into one cluster.
    /// A `max_order` of 0 means no limit, i.e. the full decomposition up to
    /// the `n`-body cluster of all `n` monomers is generated.
    ///
    /// ## Example
    /// Generating all monomer, pair, and triple clusters of a structure.
    /// ```no_run
    /// use manybody_rs::system::System;
    ///
    /// let mut system = System::from_file("CONTCAR").unwrap();
    /// system.read_monomers("monomers").unwrap();
    ///
    /// if let Err(e) = system.write_clusters(".", 3) {
    ///     eprintln!("{}", e);
    ///     return;
    /// }
    /// ```
    ///
    /// ## Notes
    /// - One file is written per combination, named by the underscore-joined
    ///   monomer numbers (see [`cluster_file_name`]).
    /// - Files are written into `output_dir`, which must exist.
    /// - Pre-existing files with the same names are overwritten.
    /// - Combinations are generated in the order documented for
    ///   [`Combinations`], so repeated runs on identical input produce
    ///   identical files.
    pub fn write_clusters(
        &self,
        output_dir: impl AsRef<Path>,
        max_order: usize,
    ) -> Result<usize, WritePoscarError> {
        if self.get_n_monomers() == 0 {
            return Err(WritePoscarError::NoMonomers);
        }

        let mut n_written = 0;
        for numbers in Combinations::new(self.get_n_monomers(), max_order) {
            let path = output_dir.as_ref().join(cluster_file_name(&numbers));
            self.cluster_write_poscar(&numbers, path)?;
            n_written += 1;
        }

        Ok(n_written)
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
