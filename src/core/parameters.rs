// Copyright @yucwang 2026

use crate::core::error::ParameterError;
use crate::math::constants::{
    Float, DEFAULT_INCREMENT, DEFAULT_MODULUS, DEFAULT_MULTIPLIER, MAX_EXACT_INTEGER,
};
use crate::math::number::{distinct_prime_factors, gcd};

/// The `(a, m, c)` triple of the recurrence `x' = (a * x + c) mod m`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LcgParameters {
    pub multiplier: Float,
    pub modulus: Float,
    pub increment: Float,
}

impl Default for LcgParameters {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_MULTIPLIER,
            modulus: DEFAULT_MODULUS,
            increment: DEFAULT_INCREMENT,
        }
    }
}

impl LcgParameters {
    pub fn new(multiplier: Float, modulus: Float, increment: Float) -> Self {
        Self {
            multiplier,
            modulus,
            increment,
        }
    }

    /// Checks the Hull–Dobell full-period conditions.
    ///
    /// Every failing condition is reported; nothing is skipped silently.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let (a, m, c) = (self.multiplier, self.modulus, self.increment);
        if !is_integral(a) || !is_integral(m) || !is_integral(c) {
            return Err(ParameterError::NonIntegral);
        }
        if m <= 0.0 {
            return Err(ParameterError::NonPositiveModulus);
        }
        if m > MAX_EXACT_INTEGER {
            return Err(ParameterError::ModulusTooLarge);
        }

        let divisor = gcd(c, m);
        if divisor != 1.0 {
            return Err(ParameterError::NotCoprime { gcd: divisor });
        }

        let a_minus_one = a - 1.0;
        for factor in distinct_prime_factors(m as u64) {
            if a_minus_one % (factor as Float) != 0.0 {
                return Err(ParameterError::PrimeFactor { factor });
            }
        }

        if m % 4.0 == 0.0 && a_minus_one % 4.0 != 0.0 {
            return Err(ParameterError::NotMultipleOfFour);
        }

        Ok(())
    }
}

fn is_integral(value: Float) -> bool {
    value.is_finite() && value.fract() == 0.0
}
