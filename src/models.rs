// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PasswordError, Result};

/// Password generation options.
///
/// Always valid once constructed: the length lies in
/// [`MIN_LENGTH`](Self::MIN_LENGTH)..=[`MAX_LENGTH`](Self::MAX_LENGTH) and at
/// least one character class is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPasswordOptions")]
pub struct PasswordOptions {
    length: usize,
    include_uppercase: bool,
    include_lowercase: bool,
    include_numbers: bool,
    include_symbols: bool,
}

// Unvalidated wire shape, only used to route deserialization through `new`.
#[derive(Deserialize)]
struct RawPasswordOptions {
    length: usize,
    include_uppercase: bool,
    include_lowercase: bool,
    include_numbers: bool,
    include_symbols: bool,
}

impl TryFrom<RawPasswordOptions> for PasswordOptions {
    type Error = PasswordError;

    fn try_from(raw: RawPasswordOptions) -> Result<Self> {
        PasswordOptions::new(
            raw.length,
            raw.include_uppercase,
            raw.include_lowercase,
            raw.include_numbers,
            raw.include_symbols,
        )
    }
}

impl PasswordOptions {
    pub const MIN_LENGTH: usize = 4;
    pub const MAX_LENGTH: usize = 64;

    pub fn new(
        length: usize,
        include_uppercase: bool,
        include_lowercase: bool,
        include_numbers: bool,
        include_symbols: bool,
    ) -> Result<Self> {
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(PasswordError::InvalidLength { length });
        }
        if !(include_uppercase || include_lowercase || include_numbers || include_symbols) {
            return Err(PasswordError::NoCharacterClass);
        }

        Ok(Self {
            length,
            include_uppercase,
            include_lowercase,
            include_numbers,
            include_symbols,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn include_uppercase(&self) -> bool {
        self.include_uppercase
    }

    pub fn include_lowercase(&self) -> bool {
        self.include_lowercase
    }

    pub fn include_numbers(&self) -> bool {
        self.include_numbers
    }

    pub fn include_symbols(&self) -> bool {
        self.include_symbols
    }

    pub fn with_length(self, length: usize) -> Result<Self> {
        Self::new(
            length,
            self.include_uppercase,
            self.include_lowercase,
            self.include_numbers,
            self.include_symbols,
        )
    }

    pub fn with_uppercase(self, enabled: bool) -> Result<Self> {
        Self::new(
            self.length,
            enabled,
            self.include_lowercase,
            self.include_numbers,
            self.include_symbols,
        )
    }

    pub fn with_lowercase(self, enabled: bool) -> Result<Self> {
        Self::new(
            self.length,
            self.include_uppercase,
            enabled,
            self.include_numbers,
            self.include_symbols,
        )
    }

    pub fn with_numbers(self, enabled: bool) -> Result<Self> {
        Self::new(
            self.length,
            self.include_uppercase,
            self.include_lowercase,
            enabled,
            self.include_symbols,
        )
    }

    pub fn with_symbols(self, enabled: bool) -> Result<Self> {
        Self::new(
            self.length,
            self.include_uppercase,
            self.include_lowercase,
            self.include_numbers,
            enabled,
        )
    }
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
        }
    }
}

// Qualitative password strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Maps a 0-100 score onto a label. Total over all integers.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 90 => PasswordStrength::Strong,
            s if s >= 70 => PasswordStrength::Good,
            s if s >= 40 => PasswordStrength::Fair,
            _ => PasswordStrength::Weak,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// 1 (weak) to 4 (strong), used for meter rendering.
    pub fn level(&self) -> u8 {
        match self {
            PasswordStrength::Weak => 1,
            PasswordStrength::Fair => 2,
            PasswordStrength::Good => 3,
            PasswordStrength::Strong => 4,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A password together with its score and label.
///
/// Only built through [`GeneratedPassword::new`], which scores the password,
/// so the label always matches the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPassword {
    password: String,
    strength: PasswordStrength,
    score: u8,
}

impl GeneratedPassword {
    pub fn new(password: String) -> Self {
        let score = crate::generators::strength::score(&password);
        Self {
            password,
            strength: PasswordStrength::from_score(score as i32),
            score,
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn into_password(self) -> String {
        self.password
    }
}
