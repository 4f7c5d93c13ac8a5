//! Domain models for the Hawaii Climate API

mod climate;
mod measurement;

pub use climate::*;
pub use measurement::*;
