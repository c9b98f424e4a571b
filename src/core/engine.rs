// Copyright @yucwang 2026

use crate::core::error::ParameterError;
use crate::core::parameters::LcgParameters;
use crate::math::constants::Float;

/// Running state of the congruential recurrence.
///
/// Arithmetic stays in `f64` on purpose: `a * x` exceeds 2^53 for the
/// default triple and the resulting rounding is part of the sequence.
#[derive(Debug, Clone)]
pub struct RecurrenceEngine {
    params: LcgParameters,
    last_value: Float,
}

impl RecurrenceEngine {
    pub fn new(initial: Float) -> Self {
        Self {
            params: LcgParameters::default(),
            last_value: initial,
        }
    }

    /// `(a * last + c) mod m`. Does not update `last_value`.
    pub fn advance(&self) -> Float {
        let p = &self.params;
        (p.multiplier * self.last_value + p.increment) % p.modulus
    }

    /// Replaces the whole triple if it satisfies Hull–Dobell; otherwise the
    /// current triple stays in effect. `last_value` is never touched.
    pub fn set_parameters(&mut self, params: LcgParameters) -> Result<(), ParameterError> {
        match params.validate() {
            Ok(()) => {
                log::debug!(
                    "Accepted LCG parameters a = {}, m = {}, c = {}.",
                    params.multiplier, params.modulus, params.increment
                );
                self.params = params;
                Ok(())
            }
            Err(err) => {
                log::debug!("Rejected LCG parameters {:?}: {}.", params, err);
                Err(err)
            }
        }
    }

    pub fn parameters(&self) -> &LcgParameters {
        &self.params
    }

    pub fn last_value(&self) -> Float {
        self.last_value
    }

    pub fn set_last_value(&mut self, value: Float) {
        self.last_value = value;
    }
}
