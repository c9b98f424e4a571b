// Copyright @yucwang 2026

use crate::core::generator::ZerkRandom;
use crate::math::constants::Float;

impl ZerkRandom {
    /// Fisher–Yates over a copy of `items`; the input is left as it was.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        self.shuffle_in_place(&mut shuffled);
        shuffled
    }

    /// Forward Fisher–Yates: position `i` swaps with a draw from `i..n`.
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        let n = items.len();
        for i in 0..n {
            let r = i + (self.next_decimal() * (n - i) as Float) as usize;
            items.swap(i, r);
        }
        log::debug!("Shuffled {} items.", n);
    }
}
