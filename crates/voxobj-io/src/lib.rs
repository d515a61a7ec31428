//! File-level conversion of block scenes into OBJ meshes.
#![forbid(unsafe_code)]

pub mod config;
pub mod convert;
mod output;

pub use config::ConvertConfig;
pub use convert::{Conversion, ConvertError, Status, convert, convert_bytes};
