// Copyright @yucwang 2021

pub mod engine;
pub mod error;
pub mod extractor;
pub mod generator;
pub mod parameters;
