// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Enum capturing the coordinate types of a POSCAR coordinate block.

/// Type of the coordinates in a POSCAR coordinate block.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CoordinateKind {
    Direct,
    Cartesian,
}

impl CoordinateKind {
    /// Identify the coordinate type from the coordinate-mode line of a POSCAR file.
    ///
    /// ## Notes
    /// - Only the first non-whitespace character of the line is significant
    ///   and it is matched case-insensitively: `d` selects direct
    ///   coordinates, `c` or `k` selects cartesian coordinates.
    pub fn from_line(line: &str) -> Option<CoordinateKind> {
        match line.trim_start().chars().next() {
            Some('d') | Some('D') => Some(CoordinateKind::Direct),
            Some('c') | Some('C') | Some('k') | Some('K') => Some(CoordinateKind::Cartesian),
            Some(_) | None => None,
        }
    }
}
