// src/core/mod.rs
pub mod config;
pub mod service;
pub mod session;

pub use service::PasswordService;
pub use session::{GeneratorSession, GeneratorState};
