// src/generators/mod.rs
pub mod password;
pub mod strength;

pub use password::{generate, PasswordGenerator, RandomPasswordGenerator};
pub use strength::{score, strength_label};
