// Copyright @yucwang 2021

pub mod core;
pub mod math;
pub mod sampling;

pub use self::core::error::{ParameterError, Result, ZerkError};
pub use self::core::generator::ZerkRandom;
pub use self::core::parameters::LcgParameters;
