// Copyright @yucwang 2026

use std::fmt;

use crate::math::constants::Float;

/// A Hull–Dobell condition (or a precondition for checking one) that a
/// candidate `(a, m, c)` triple failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterError {
    NonIntegral,
    NonPositiveModulus,
    ModulusTooLarge,
    NotCoprime { gcd: Float },
    PrimeFactor { factor: u64 },
    NotMultipleOfFour,
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NonIntegral => write!(f, "A, M and C must be finite integers"),
            ParameterError::NonPositiveModulus => write!(f, "M must be greater than zero"),
            ParameterError::ModulusTooLarge => write!(f, "M must not exceed 2^53"),
            ParameterError::NotCoprime { gcd } => {
                write!(f, "C and M must be relatively prime (gcd = {})", gcd)
            }
            ParameterError::PrimeFactor { factor } => {
                write!(f, "A - 1 must be divisible by all the prime factors of M (missing {})", factor)
            }
            ParameterError::NotMultipleOfFour => {
                write!(f, "if M is a multiple of 4, A - 1 must be also")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZerkError {
    InvalidParameters(ParameterError),
    DivisionByZero,
    InvalidRange { min: Float, max: Float },
}

impl From<ParameterError> for ZerkError {
    fn from(err: ParameterError) -> Self {
        ZerkError::InvalidParameters(err)
    }
}

impl fmt::Display for ZerkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZerkError::InvalidParameters(err) => write!(f, "invalid parameters: {}", err),
            ZerkError::DivisionByZero => write!(f, "division by zero: range has min == max"),
            ZerkError::InvalidRange { min, max } => {
                write!(f, "invalid range: min = {}, max = {}", min, max)
            }
        }
    }
}

impl std::error::Error for ZerkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZerkError::InvalidParameters(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ZerkError>;
