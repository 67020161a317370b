use crate::errors::Error;
use crate::number;

use num_bigint::{BigUint, RandBigInt};
use rand::Rng;

/// Upper bound on the number of candidate draws before the search is
/// abandoned. A random candidate fails the coprimality check with
/// probability `1/p + 1/q - 1/(p*q)`, so for any realistic modulus the
/// expected number of draws is barely above one; the cap only guards
/// against pathological moduli and a misbehaving random source.
const MAX_SEED_DRAWS: usize = 128;

/// Draws uniform candidates in `[2, n-1]` from `rng` until one is
/// relatively prime with `n`.
///
/// # Assumptions
///
/// `n` is the product of two primes `≥ 3`, hence `n > 3`.
///
/// # Errors
///
/// Returns [`Error::SeedSearchExhausted`] if no coprime candidate is found
/// within `MAX_SEED_DRAWS` draws.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use blum_blum_shub::{number, seed};
///
/// let n = BigUint::from(192_649usize); // 383 * 503
/// let s = seed::find_coprime_seed(&n, &mut rand::thread_rng()).unwrap();
///
/// assert!(s >= BigUint::from(2usize) && s < n);
/// assert!(number::are_coprime(&s, &n));
/// ```
pub fn find_coprime_seed<R: Rng + ?Sized>(n: &BigUint, rng: &mut R) -> Result<BigUint, Error> {
    let two = BigUint::from(2usize);

    for _ in 0..MAX_SEED_DRAWS {
        let candidate = rng.gen_biguint_range(&two, n);
        if number::are_coprime(&candidate, n) {
            return Ok(candidate);
        }
    }

    Err(Error::SeedSearchExhausted { draws: MAX_SEED_DRAWS })
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn strategy_for_blum_prime(
        lower_bound: usize,
        upper_bound: usize,
    ) -> impl Strategy<Value = usize> {
        let sieve = primal::Sieve::new(upper_bound);
        (lower_bound..upper_bound)
            .prop_filter("is_blum_prime", move |&n| sieve.is_prime(n) && n % 4 == 3)
    }

    #[test]
    fn test_identical_rng_replay_yields_identical_seed() {
        let n = BigUint::from(192_649usize);
        let mut rng1 = ChaCha20Rng::from_seed([7u8; 32]);
        let mut rng2 = ChaCha20Rng::from_seed([7u8; 32]);

        let s1 = find_coprime_seed(&n, &mut rng1).unwrap();
        let s2 = find_coprime_seed(&n, &mut rng2).unwrap();

        assert_eq!(s1, s2);
    }

    proptest! {
        #[test]
        fn test_seed_is_coprime_and_in_range(
            p in strategy_for_blum_prime(3, 1_000),
            q in strategy_for_blum_prime(1_000, 10_000),
            rng_seed in any::<[u8; 32]>()
        ) {
            let n = BigUint::from(p * q);
            let mut rng = ChaCha20Rng::from_seed(rng_seed);

            let s = find_coprime_seed(&n, &mut rng).unwrap();

            prop_assert_eq!(s >= BigUint::from(2usize), true);
            prop_assert_eq!(s < n, true);
            prop_assert_eq!(number::are_coprime(&s, &n), true);
        }
    }
}
