//! Shared types and models for the Hawaii Climate API
//!
//! This crate contains the record types, query result shapes and date helpers
//! used by the backend. It performs no I/O.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
