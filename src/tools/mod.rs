// src/tools/mod.rs
pub mod capitalize;

pub use capitalize::capitalize_words;
