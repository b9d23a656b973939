pub mod error;
pub mod figure;
pub mod geometry;
pub mod math;
pub mod mirror;

pub use error::{CatoptricsError, Result};
