// Copyright @yucwang 2026

use crate::math::constants::{Float, Int, UInt, BIT_WINDOW_END, BIT_WINDOW_START};

/// Derives the observable integer from a raw recurrence value.
///
/// Bits are numbered LSB-first over the IEEE-754 pattern (the little-endian
/// byte order, each byte read from its low bit). Bits `10..42` are then read
/// as a binary string with bit 10 as its most significant digit, and the 32
/// digits are taken as a two's-complement `i32`. The ordering is the same on
/// every target.
pub fn extract(raw: Float) -> Int {
    let width = BIT_WINDOW_END - BIT_WINDOW_START;
    let mask = (1u64 << width) - 1;
    let window = ((raw.to_bits() >> BIT_WINDOW_START) & mask) as UInt;
    window.reverse_bits() as Int
}
