//! Infrastructure layer - record decoding, JSON sources, CSV export

pub mod decoder;
pub mod export;
pub mod source;

pub use decoder::{decode, decode_reader, decode_str, encode, encode_string};
pub use source::{JsonFileSource, JsonStrSource};
