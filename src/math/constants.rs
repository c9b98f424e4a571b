/* Copyright 2020 @Yuchen Wong */

pub type Float = f64;
pub type Int = i32;
pub type UInt = u32;

// The 48-bit triple also used by java.util.Random.
pub const DEFAULT_MULTIPLIER: Float = 25214903917.0;
pub const DEFAULT_MODULUS: Float = 281474976710656.0; // 2^48
pub const DEFAULT_INCREMENT: Float = 11.0;

/// First bit (inclusive, LSB-first numbering) of the output window.
pub const BIT_WINDOW_START: u32 = 10;
/// Last bit (exclusive) of the output window.
pub const BIT_WINDOW_END: u32 = 42;

/// Largest integer up to which every integer is exactly representable as a `Float`.
pub const MAX_EXACT_INTEGER: Float = 9007199254740992.0; // 2^53

pub const DECIMAL_SCALE: Float = 100.0;
