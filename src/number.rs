use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Greatest common divisor by the classic Euclidean algorithm: repeatedly
/// replace `(a, b)` with `(b, a mod b)` until `b = 0`.
///
/// Unsigned inputs make the negative case unrepresentable; `gcd(a, 0) = a`.
///
/// # Reference
///
/// See algorithm 2.104 in "Handbook of Applied Cryptography" by Alfred J. Menezes et al.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use blum_blum_shub::number;
///
/// assert_eq!(number::gcd(&BigUint::from(54usize), &BigUint::from(24usize)), BigUint::from(6usize));
/// assert_eq!(number::gcd(&BigUint::from(17usize), &BigUint::from(5usize)), BigUint::from(1usize));
/// ```
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();

    while !b.is_zero() {
        let r = a.mod_floor(&b);
        a = b;
        b = r;
    }

    a
}

/// Determines whether two unsigned integers are relatively prime,
/// that is, whether `gcd(a, b) = 1`.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use blum_blum_shub::number;
///
/// assert_eq!(number::are_coprime(&BigUint::from(8usize), &BigUint::from(15usize)), true);
/// assert_eq!(number::are_coprime(&BigUint::from(6usize), &BigUint::from(15usize)), false);
/// ```
pub fn are_coprime(a: &BigUint, b: &BigUint) -> bool {
    gcd(a, b).is_one()
}
