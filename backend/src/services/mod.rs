//! Query services for the Hawaii Climate API

pub mod climate;

pub use climate::ClimateService;
