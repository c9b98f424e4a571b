// Copyright @yucwang 2026

use crate::core::error::Result;
use crate::core::generator::{check_range, ZerkRandom};
use crate::math::constants::{Float, Int};

/// Endless stream of integer draws. Each item advances the borrowed
/// generator, so the stream cannot be rewound.
pub struct Ints<'a> {
    rng: &'a mut ZerkRandom,
    positive_only: bool,
}

impl<'a> Iterator for Ints<'a> {
    type Item = Int;

    fn next(&mut self) -> Option<Int> {
        Some(self.rng.generate(self.positive_only))
    }
}

pub struct Decimals<'a> {
    rng: &'a mut ZerkRandom,
}

impl<'a> Iterator for Decimals<'a> {
    type Item = Float;

    fn next(&mut self) -> Option<Float> {
        Some(self.rng.next_decimal())
    }
}

pub struct RangeValues<'a> {
    rng: &'a mut ZerkRandom,
    min: Float,
    max: Float,
}

impl<'a> Iterator for RangeValues<'a> {
    type Item = Float;

    fn next(&mut self) -> Option<Float> {
        Some(self.rng.draw_in_range(self.min, self.max))
    }
}

impl ZerkRandom {
    pub fn ints(&mut self) -> Ints<'_> {
        Ints { rng: self, positive_only: false }
    }

    pub fn positive_ints(&mut self) -> Ints<'_> {
        Ints { rng: self, positive_only: true }
    }

    pub fn decimals(&mut self) -> Decimals<'_> {
        Decimals { rng: self }
    }

    /// Bounds are checked once, up front, with the same rules as `next_in_range`.
    pub fn range(&mut self, min: Float, max: Float) -> Result<RangeValues<'_>> {
        check_range(min, max)?;
        Ok(RangeValues { rng: self, min, max })
    }

    pub fn generate_sequence(&mut self, count: usize) -> Vec<Int> {
        let values: Vec<Int> = self.ints().take(count).collect();
        log::debug!("Generated {} integers.", values.len());
        values
    }

    pub fn generate_range_sequence(&mut self, count: usize, min: Float, max: Float) -> Result<Vec<Float>> {
        let values: Vec<Float> = self.range(min, max)?.take(count).collect();
        log::debug!("Generated {} values in [{}, {}).", values.len(), min, max);
        Ok(values)
    }

    pub fn generate_decimal_sequence(&mut self, count: usize) -> Vec<Float> {
        let values: Vec<Float> = self.decimals().take(count).collect();
        log::debug!("Generated {} decimals.", values.len());
        values
    }
}
