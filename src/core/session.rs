// src/core/session.rs
use crate::core::service::PasswordService;
use crate::generators::{PasswordGenerator, RandomPasswordGenerator};
use crate::models::{GeneratedPassword, PasswordOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorState {
    Ready,
    Success(GeneratedPassword),
    Error(String),
}

/// Current options plus the outcome of the last generation.
pub struct GeneratorSession<G = RandomPasswordGenerator> {
    service: PasswordService<G>,
    options: PasswordOptions,
    state: GeneratorState,
}

impl<G: PasswordGenerator> GeneratorSession<G> {
    /// Starts with default options and generates right away.
    pub fn new(service: PasswordService<G>) -> Self {
        Self::with_options(service, PasswordOptions::default())
    }

    pub fn with_options(service: PasswordService<G>, options: PasswordOptions) -> Self {
        let mut session = Self {
            service,
            options,
            state: GeneratorState::Ready,
        };
        session.regenerate();
        session
    }

    pub fn options(&self) -> &PasswordOptions {
        &self.options
    }

    pub fn state(&self) -> &GeneratorState {
        &self.state
    }

    pub fn update_options(&mut self, options: PasswordOptions) -> &GeneratorState {
        self.options = options;
        self.regenerate()
    }

    pub fn regenerate(&mut self) -> &GeneratorState {
        self.state = match self.service.generate_password(&self.options) {
            Ok(generated) => GeneratorState::Success(generated),
            Err(e) => GeneratorState::Error(e.to_string()),
        };
        &self.state
    }
}
