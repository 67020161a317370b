//! # Blum Blum Shub pseudorandom bit generator
//!
//! `blum_blum_shub` implements the Blum Blum Shub quadratic-residue
//! pseudorandom bit generator together with the number-theoretic functions
//! it relies on and a bit-frequency validator for sanity-checking its
//! output.

/// Errors during bit-sequence generation.
pub mod errors;
/// Bit-frequency analysis of generated sequences.
pub mod frequency;
/// Blum Blum Shub quadratic-residue bit generator.
pub mod generator;
/// Number theoretic functions.
pub mod number;
/// Coprime seed selection.
pub mod seed;
