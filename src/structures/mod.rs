// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of data structures describing atoms, monomers, and the lattice.

pub mod atom;
pub mod coordinates;
pub mod group;
pub mod lattice;
