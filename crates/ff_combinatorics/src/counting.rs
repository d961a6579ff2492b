//! Reference count of necklaces with fixed content.
//!
//! By Burnside's lemma over the cyclic group of order `n`:
//!
//! `N = 1/n · Σ_{d | g} φ(d) · (n/d)! / Π (c_i/d)!`
//!
//! where `g` is the gcd of all nonzero counts `c_i`.
//!

use log::debug;

use crate::Composition;
use crate::NecklaceError;

/// Greatest common divisor, `gcd(0, b) = b`.
pub fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Euler's totient function. `euler_phi(0) = 0`.
pub fn euler_phi(n: usize) -> usize {
    let mut result = n;
    let mut m = n;
    let mut p = 2;
    while p <= m / p {
        if m % p == 0 {
            while m % p == 0 {
                m /= p;
            }
            result -= result / p;
        }
        p += 1;
    }
    if m > 1 {
        result -= result / m;
    }
    result
}

/// All divisors of `n`, ascending. Only scans up to `sqrt(n)`.
pub fn divisors(n: usize) -> Vec<usize> {
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut d = 1;
    while d <= n / d {
        if n % d == 0 {
            low.push(d);
            if d != n / d {
                high.push(n / d);
            }
        }
        d += 1;
    }
    low.extend(high.into_iter().rev());
    low
}

/// Binomial coefficient with overflow detection.
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut r: u128 = 1;
    for i in 0..k {
        // Exact at every step: r·(n-i)/(i+1) = C(n, i+1).
        r = r.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    Some(r)
}

/// Multinomial coefficient `(Σ c_i)! / Π c_i!` with overflow detection.
pub fn multinomial(counts: &[usize]) -> Option<u128> {
    let mut total: usize = 0;
    let mut r: u128 = 1;
    for &c in counts {
        total = total.checked_add(c)?;
        r = r.checked_mul(binomial(total, c)?)?;
    }
    Some(r)
}

/// Number of distinct necklaces with the given content.
pub fn count_necklaces<C>(composition: C) -> Result<u128, NecklaceError>
where
    C: TryInto<Composition>,
    NecklaceError: From<C::Error>,
{
    let composition = composition.try_into()?;
    let n = composition.total();
    let counts: Vec<usize> = composition.nonzero_counts().collect();
    let g = counts.iter().fold(0, |acc, &c| gcd(acc, c));

    let mut sum: u128 = 0;
    for d in divisors(g) {
        let reduced: Vec<usize> = counts.iter().map(|&c| c / d).collect();
        let term = multinomial(&reduced)
            .and_then(|m| m.checked_mul(euler_phi(d) as u128))
            .ok_or(NecklaceError::CountOverflow)?;
        sum = sum.checked_add(term).ok_or(NecklaceError::CountOverflow)?;
    }
    debug_assert_eq!(sum % n as u128, 0);

    let count = sum / n as u128;
    debug!("Composition {composition}: {count} necklaces (gcd {g}).");
    Ok(count)
}
