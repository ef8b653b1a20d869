//! Vehicle source implementations
//!
//! This module provides JSON-backed implementations of the `VehicleSource` trait.

mod json_file_source;
mod json_str_source;

pub use json_file_source::JsonFileSource;
pub use json_str_source::JsonStrSource;
