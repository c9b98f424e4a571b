// Copyright @yucwang 2026

pub mod sequence;
pub mod shuffle;
