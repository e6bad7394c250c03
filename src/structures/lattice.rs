// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of the Lattice structure and its methods.

use std::io::Write;

use crate::errors::WritePoscarError;

/// Lattice block of a POSCAR file: the scale-factor line and the three
/// lattice-vector lines, carried verbatim.
///
/// The lines are never interpreted numerically. Cluster POSCAR files must
/// describe their atoms in the cell of the source structure, so the block
/// is copied into every output file exactly as it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    scale: String,
    vectors: [String; 3],
}

impl Lattice {
    /// Create a new Lattice structure from the verbatim lines of a POSCAR file.
    pub fn new(scale: &str, vectors: [String; 3]) -> Self {
        Lattice {
            scale: scale.to_string(),
            vectors,
        }
    }

    /// Get the verbatim scale-factor line.
    pub fn get_scale(&self) -> &str {
        &self.scale
    }

    /// Get the verbatim lattice-vector lines.
    pub fn get_vectors(&self) -> &[String; 3] {
        &self.vectors
    }

    /// Write the scale-factor line and the lattice-vector lines into an open POSCAR file.
    pub fn write_poscar(&self, writer: &mut impl Write) -> Result<(), WritePoscarError> {
        writeln!(writer, "{}", self.scale).map_err(|_| WritePoscarError::CouldNotWrite)?;

        for vector in &self.vectors {
            writeln!(writer, "{}", vector).map_err(|_| WritePoscarError::CouldNotWrite)?;
        }

        Ok(())
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_verbatim() {
        let lattice = Lattice::new(
            "   1.00000000000000",
            [
                "    10.0  0.0  0.0".to_string(),
                "     0.0 10.0  0.0".to_string(),
                "     0.0  0.0 10.0".to_string(),
            ],
        );

        let mut output = Vec::new();
        lattice.write_poscar(&mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "   1.00000000000000\n    10.0  0.0  0.0\n     0.0 10.0  0.0\n     0.0  0.0 10.0\n"
        );
    }
}
