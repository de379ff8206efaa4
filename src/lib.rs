//! A facelet-level model of the 3x3x3 twisty puzzle: the cube as a fixed
//! permutation of 54 colored facets, the Singmaster move algebra over it, and
//! a naive breadth-first solver for lightly scrambled states.

#![deny(missing_docs)]

pub mod cube;
pub mod error;
pub mod moves;
