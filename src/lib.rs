// src/lib.rs
//! Password generation and strength scoring, plus a word-capitalisation
//! helper, with the `passforge` command line front end built on top.

pub mod core;
pub mod error;
pub mod generators;
pub mod logging;
pub mod models;
pub mod tools;

pub use crate::core::{GeneratorSession, GeneratorState, PasswordService};
pub use crate::error::{PasswordError, Result};
pub use crate::generators::{generate, score, strength_label, PasswordGenerator, RandomPasswordGenerator};
pub use crate::models::{GeneratedPassword, PasswordOptions, PasswordStrength};
pub use crate::tools::capitalize_words;
