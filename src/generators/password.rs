// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::{PasswordError, Result};
use crate::models::PasswordOptions;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?\"/";

/// Produces a password for a set of validated options.
pub trait PasswordGenerator {
    fn generate(&self, options: &PasswordOptions) -> Result<String>;
}

/// Samples every position independently and uniformly from the union of the
/// enabled character classes. A class being enabled does not guarantee it
/// shows up in the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPasswordGenerator;

impl RandomPasswordGenerator {
    pub fn new() -> Self {
        RandomPasswordGenerator
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        options: &PasswordOptions,
        rng: &mut R,
    ) -> Result<String> {
        let chars = character_pool(options);

        if chars.is_empty() {
            return Err(PasswordError::EmptyCharacterPool);
        }

        let dist = Uniform::from(0..chars.len());
        let password: String = (0..options.length())
            .map(|_| chars[dist.sample(rng)] as char)
            .collect();

        log::debug!(
            "Generated password of length {} from a pool of {} characters",
            options.length(),
            chars.len()
        );

        Ok(password)
    }
}

impl PasswordGenerator for RandomPasswordGenerator {
    fn generate(&self, options: &PasswordOptions) -> Result<String> {
        self.generate_with(options, &mut rand::thread_rng())
    }
}

/// Concatenation of the enabled character classes.
pub fn character_pool(options: &PasswordOptions) -> Vec<u8> {
    let mut chars = Vec::new();

    if options.include_lowercase() {
        chars.extend_from_slice(LOWERCASE);
    }
    if options.include_uppercase() {
        chars.extend_from_slice(UPPERCASE);
    }
    if options.include_numbers() {
        chars.extend_from_slice(NUMBERS);
    }
    if options.include_symbols() {
        chars.extend_from_slice(SYMBOLS);
    }

    chars
}

/// Generates a password with the thread-local RNG.
pub fn generate(options: &PasswordOptions) -> Result<String> {
    RandomPasswordGenerator.generate(options)
}
