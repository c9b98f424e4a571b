// Copyright @yucwang 2026

use crate::math::constants::Float;

/// Euclid's algorithm carried out on doubles, so it agrees with the
/// engine's own arithmetic for any integral input.
pub fn gcd(a: Float, b: Float) -> Float {
    let mut x = a.abs();
    let mut y = b.abs();
    while x != 0.0 && y != 0.0 {
        if x > y {
            x %= y;
        } else {
            y %= x;
        }
    }
    x.max(y)
}

/// Prime factors of `num` with multiplicity, in ascending order.
///
/// Plain trial division: strip the 2s, then odd divisors up to the square
/// root of what remains. Whatever is left above 1 is prime. Generator-scale
/// moduli (at most 2^53) keep this cheap.
pub fn prime_factors(mut num: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if num < 2 {
        return factors;
    }

    while num % 2 == 0 {
        factors.push(2);
        num /= 2;
    }

    let mut divisor: u64 = 3;
    while divisor <= num / divisor {
        if num % divisor == 0 {
            factors.push(divisor);
            num /= divisor;
        } else {
            divisor += 2;
        }
    }

    if num > 1 {
        factors.push(num);
    }
    factors
}

/// Same as `prime_factors` but each prime appears once.
pub fn distinct_prime_factors(num: u64) -> Vec<u64> {
    let mut factors = prime_factors(num);
    factors.dedup();
    factors
}
