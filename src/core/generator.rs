// Copyright @yucwang 2026

use crate::core::engine::RecurrenceEngine;
use crate::core::error::{Result, ZerkError};
use crate::core::extractor::extract;
use crate::core::parameters::LcgParameters;
use crate::math::constants::{Float, Int, DECIMAL_SCALE};

/// Seedable LCG whose outputs are a bit window of the floating-point state.
///
/// Same seed and same triple give the same sequence for the same calls.
/// There is no internal locking; share one instance across threads only
/// behind external synchronisation.
#[derive(Debug, Clone)]
pub struct ZerkRandom {
    seed: Int,
    engine: RecurrenceEngine,
}

impl ZerkRandom {
    pub fn new(seed: Int) -> Self {
        Self {
            seed,
            engine: RecurrenceEngine::new(seed as Float),
        }
    }

    pub fn with_parameters(seed: Int, params: LcgParameters) -> Result<Self> {
        let mut rng = Self::new(seed);
        rng.set_parameters(params)?;
        Ok(rng)
    }

    pub fn set_parameters(&mut self, params: LcgParameters) -> Result<()> {
        self.engine.set_parameters(params)?;
        Ok(())
    }

    pub fn seed(&self) -> Int {
        self.seed
    }

    pub fn parameters(&self) -> &LcgParameters {
        self.engine.parameters()
    }

    pub fn last_value(&self) -> Float {
        self.engine.last_value()
    }

    /// One advance + extract step. The signed draw is fed back as the new
    /// state even when `positive_only` folds the returned value.
    pub fn generate(&mut self, positive_only: bool) -> Int {
        let raw = self.engine.advance();
        let value = extract(raw);
        log::trace!("advance: raw = {}, extracted = {}", raw, value);
        self.engine.set_last_value(value as Float);
        if positive_only {
            fold_positive(value)
        } else {
            value
        }
    }

    pub fn next_int(&mut self) -> Int {
        self.generate(false)
    }

    pub fn next_positive_int(&mut self) -> Int {
        self.generate(true)
    }

    /// A value in `[0, 1)` with two decimal digits of resolution.
    pub fn next_decimal(&mut self) -> Float {
        let value = self.next_positive_int() as Float;
        self.engine.set_last_value(value);
        (value % DECIMAL_SCALE) / DECIMAL_SCALE
    }

    /// A value in `[min, max)`, offset from `min` by a whole number.
    ///
    /// Draws a non-negative integer when `min >= 0`, a signed one otherwise,
    /// and reduces it with a Euclidean remainder by `max - min`.
    pub fn next_in_range(&mut self, min: Float, max: Float) -> Result<Float> {
        check_range(min, max)?;
        Ok(self.draw_in_range(min, max))
    }

    /// `next_in_range` for bounds already accepted by `check_range`.
    pub(crate) fn draw_in_range(&mut self, min: Float, max: Float) -> Float {
        let diff = max - min;
        let value = self.generate(min >= 0.0) as Float;
        self.engine.set_last_value(value);
        let result = value.rem_euclid(diff) + min;
        // Near max the sum can round up onto the bound itself.
        if result >= max {
            next_below(max)
        } else {
            result
        }
    }
}

/// `abs` that maps `i32::MIN`, which has no positive counterpart, to `i32::MAX`.
fn fold_positive(value: Int) -> Int {
    value.saturating_abs()
}

/// Largest finite float strictly below a finite `value`.
fn next_below(value: Float) -> Float {
    if value == 0.0 {
        -Float::from_bits(1)
    } else if value > 0.0 {
        Float::from_bits(value.to_bits() - 1)
    } else {
        Float::from_bits(value.to_bits() + 1)
    }
}

pub(crate) fn check_range(min: Float, max: Float) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ZerkError::InvalidRange { min, max });
    }
    if max == min {
        return Err(ZerkError::DivisionByZero);
    }
    if max < min {
        return Err(ZerkError::InvalidRange { min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ParameterError;

    #[test]
    fn test_seed_42_sequence() {
        let mut rng = ZerkRandom::new(42);
        let values: Vec<Int> = (0..5).map(|_| rng.next_int()).collect();
        assert_eq!(values, vec![385251177, 13240749, 214380751, 74964223, 214258410]);
    }

    #[test]
    fn test_seed_reproducibility() {
        let mut a = ZerkRandom::new(42);
        let mut b = ZerkRandom::new(42);
        for _ in 0..3 {
            assert_eq!(a.next_int(), b.next_int());
        }
    }

    #[test]
    fn test_negative_outputs() {
        let mut rng = ZerkRandom::new(1);
        let values: Vec<Int> = (0..4).map(|_| rng.next_int()).collect();
        assert_eq!(values, vec![1992503, -475502898, 10946263, 958258441]);
        assert_eq!(rng.last_value(), 958258441.0);
    }

    #[test]
    fn test_seed_zero_is_fixed_point() {
        let mut rng = ZerkRandom::new(0);
        for _ in 0..3 {
            assert_eq!(rng.next_int(), 0);
        }
    }

    #[test]
    fn test_positive_feeds_back_signed_value() {
        let mut signed = ZerkRandom::new(1);
        let mut positive = ZerkRandom::new(1);
        signed.next_int();
        positive.next_int();
        assert_eq!(signed.next_int(), -475502898);
        assert_eq!(positive.next_positive_int(), 475502898);
        assert_eq!(positive.last_value(), -475502898.0);
        assert_eq!(signed.next_int(), positive.next_int());
    }

    #[test]
    fn test_decimal_sequence() {
        let mut rng = ZerkRandom::new(42);
        assert_eq!(rng.next_decimal(), 0.77);
        assert_eq!(rng.next_decimal(), 0.49);
        assert_eq!(rng.next_decimal(), 0.51);
    }

    #[test]
    fn test_decimal_bounds() {
        let mut rng = ZerkRandom::new(-1234);
        for _ in 0..10000 {
            let value = rng.next_decimal();
            assert!(value >= 0.0 && value < 1.0, "decimal {} out of [0, 1)", value);
        }
    }

    #[test]
    fn test_range_sequence() {
        let mut rng = ZerkRandom::new(42);
        let values: Vec<Float> = (0..5).map(|_| rng.next_in_range(0.0, 10.0).unwrap()).collect();
        assert_eq!(values, vec![7.0, 9.0, 1.0, 3.0, 0.0]);

        let mut rng = ZerkRandom::new(-42);
        let values: Vec<Float> = (0..5).map(|_| rng.next_in_range(-1000.0, 1000.0).unwrap()).collect();
        assert_eq!(values, vec![81.0, 322.0, 947.0, 318.0, -586.0]);
    }

    #[test]
    fn test_range_containment() {
        let bounds = [(0.0, 10.0), (-5.0, 5.0), (-1000.0, -990.0), (3.0, 3.5), (-1.0, 1000000.0)];
        for &(min, max) in bounds.iter() {
            let mut rng = ZerkRandom::new(99);
            for _ in 0..10000 {
                let value = rng.next_in_range(min, max).unwrap();
                assert!(value >= min && value < max, "{} not in [{}, {})", value, min, max);
            }
        }
    }

    #[test]
    fn test_range_containment_large_bounds() {
        let (min, max) = (1e16 + 2.0, 1e16 + 4.0);
        let mut rng = ZerkRandom::new(42);
        for _ in 0..10000 {
            let value = rng.next_in_range(min, max).unwrap();
            assert!(value >= min && value < max, "{} not in [{}, {})", value, min, max);
        }
    }

    #[test]
    fn test_next_below() {
        assert_eq!(next_below(1e16 + 4.0), 1e16 + 2.0);
        assert_eq!(next_below(1.0), 1.0 - Float::EPSILON / 2.0);
        assert!(next_below(0.0) < 0.0);
        assert!(next_below(-1.0) < -1.0);
    }

    #[test]
    fn test_fold_positive_saturates() {
        assert_eq!(fold_positive(Int::MIN), Int::MAX);
        assert_eq!(fold_positive(-5), 5);
        assert_eq!(fold_positive(7), 7);
    }

    #[test]
    fn test_positive_draw_of_min_value() {
        // a = 1, c = 1 makes the next raw value last + 1. 2^52 + 1024 has
        // exactly bit 10 set inside the window, which extracts to i32::MIN.
        let params = LcgParameters::new(1.0, 9007199254740992.0, 1.0);
        let mut rng = ZerkRandom::with_parameters(0, params).unwrap();
        rng.engine.set_last_value(4503599627371520.0 - 1.0);
        assert_eq!(rng.next_positive_int(), Int::MAX);
        assert_eq!(rng.last_value(), Int::MIN as Float);
    }

    #[test]
    fn test_range_errors() {
        let mut rng = ZerkRandom::new(7);
        assert_eq!(rng.next_in_range(4.0, 4.0), Err(ZerkError::DivisionByZero));
        assert_eq!(
            rng.next_in_range(5.0, 1.0),
            Err(ZerkError::InvalidRange { min: 5.0, max: 1.0 })
        );
        assert!(rng.next_in_range(0.0, Float::INFINITY).is_err());
        // Failed calls do not advance the state.
        assert_eq!(rng.last_value(), 7.0);
    }

    #[test]
    fn test_set_parameters() {
        let mut rng = ZerkRandom::new(3);
        let err = rng.set_parameters(LcgParameters::new(5.0, 8.0, 2.0)).unwrap_err();
        assert_eq!(err, ZerkError::InvalidParameters(ParameterError::NotCoprime { gcd: 2.0 }));
        assert_eq!(*rng.parameters(), LcgParameters::default());

        rng.set_parameters(LcgParameters::new(5.0, 8.0, 3.0)).unwrap();
        assert_eq!(rng.parameters().multiplier, 5.0);
        assert_eq!(rng.last_value(), 3.0);
        assert_eq!(rng.seed(), 3);
    }

    #[test]
    fn test_with_parameters_determinism() {
        let params = LcgParameters::new(1103515245.0, 2147483648.0, 12345.0);
        let mut a = ZerkRandom::with_parameters(2024, params).unwrap();
        let mut b = ZerkRandom::with_parameters(2024, params).unwrap();
        for _ in 0..100 {
            assert_eq!(a.next_int(), b.next_int());
        }
        assert!(ZerkRandom::with_parameters(1, LcgParameters::new(2.0, 9.0, 2.0)).is_err());
    }
}
