use crate::errors::Error;
use crate::seed;

use num_bigint::BigUint;
use num_integer::Integer;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

/// Outcome of one generation request.
///
/// `sequence[i]` holds the quadratic-residue state after step `i` and
/// `bits` is the compact '0'/'1' string with `bits[i] = sequence[i] mod 2`.
///
/// Two seed values are exposed. `seed` is the value that actually started
/// the recurrence. `initial_seed` is a *separately drawn* coprime witness
/// reported alongside the result; it matches the observable behavior of
/// the original generator, which drew it independently of the recurrence's
/// starting value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub sequence: Vec<BigUint>,
    pub bits: String,
    pub n: BigUint,
    pub seed: BigUint,
    pub initial_seed: BigUint,
}

/// Produces a pseudorandom bit sequence with entropy from [`thread_rng`].
///
/// # Arguments
///
/// * `p`, `q` - primes congruent to 3 modulo 4 (primality itself is the
///   caller's claim and is not checked here; only the congruence is).
/// * `sequence_length` - number of recurrence steps; `0` yields an empty
///   sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidModulusCongruence`] if `p` or `q` is not
/// congruent to 3 modulo 4, before any other computation takes place.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use blum_blum_shub::generator;
///
/// let p = BigUint::from(383usize);
/// let q = BigUint::from(503usize);
/// let result = generator::generate(&p, &q, 5).unwrap();
///
/// assert_eq!(result.n, BigUint::from(192_649usize));
/// assert_eq!(result.bits.len(), 5);
/// ```
pub fn generate(
    p: &BigUint,
    q: &BigUint,
    sequence_length: usize,
) -> Result<GenerationResult, Error> {
    generate_with_rng(p, q, sequence_length, &mut thread_rng())
}

/// Same algorithm as [`generate`] with an injected random source.
///
/// Two calls with identical `p`, `q`, `sequence_length` and an identical
/// random-source replay produce identical results, which makes the
/// generator reproducible under a seeded generator such as `ChaCha20Rng`.
///
/// # Reference
///
/// See algorithm 5.40 in "Handbook of Applied Cryptography" by Alfred J. Menezes et al.
pub fn generate_with_rng<R: Rng + ?Sized>(
    p: &BigUint,
    q: &BigUint,
    sequence_length: usize,
    rng: &mut R,
) -> Result<GenerationResult, Error> {
    check_congruence("p", p)?;
    check_congruence("q", q)?;

    let two = BigUint::from(2usize);
    let n = p * q;

    let seed = seed::find_coprime_seed(&n, rng)?;
    let mut s = seed.clone();

    let mut sequence = Vec::with_capacity(sequence_length);
    let mut bits = String::with_capacity(sequence_length);

    for _ in 0..sequence_length {
        s = s.modpow(&two, &n);
        bits.push(if s.is_odd() { '1' } else { '0' });
        sequence.push(s.clone());
    }

    let initial_seed = seed::find_coprime_seed(&n, rng)?;

    Ok(GenerationResult { sequence, bits, n, seed, initial_seed })
}

fn check_congruence(name: &'static str, value: &BigUint) -> Result<(), Error> {
    let three = BigUint::from(3usize);
    let four = BigUint::from(4usize);

    let residue = value.mod_floor(&four);
    if residue == three {
        Ok(())
    } else {
        Err(Error::InvalidModulusCongruence { name, residue })
    }
}
