use failure::Fail;
use num_bigint::BigUint;

/// Error type for bit-sequence generation.
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum Error {
    #[fail(
        display = "{} must be congruent to 3 modulo 4, but {} mod 4 = {}",
        name, name, residue
    )]
    InvalidModulusCongruence { name: &'static str, residue: BigUint },
    #[fail(display = "no seed coprime with the modulus found within {} draws", draws)]
    SeedSearchExhausted { draws: usize },
}
