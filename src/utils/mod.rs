// src/utils/mod.rs
pub mod formatter;

pub use formatter::{format_bytes, format_size, format_updated};
