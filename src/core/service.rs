// src/core/service.rs
use crate::error::Result;
use crate::generators::{strength, PasswordGenerator, RandomPasswordGenerator};
use crate::models::{GeneratedPassword, PasswordOptions};

/// Pairs a generator with the strength scorer.
pub struct PasswordService<G = RandomPasswordGenerator> {
    generator: G,
}

impl<G: PasswordGenerator> PasswordService<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generate_password(&self, options: &PasswordOptions) -> Result<GeneratedPassword> {
        let password = self.generator.generate(options).map_err(|e| {
            log::warn!("Password generation failed: {}", e);
            e
        })?;

        Ok(GeneratedPassword::new(password))
    }

    pub fn calculate_password_strength(&self, password: &str) -> u8 {
        strength::score(password)
    }
}

impl Default for PasswordService<RandomPasswordGenerator> {
    fn default() -> Self {
        Self::new(RandomPasswordGenerator::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PasswordError;
    use crate::models::PasswordStrength;

    struct FixedGenerator(&'static str);

    impl PasswordGenerator for FixedGenerator {
        fn generate(&self, _options: &PasswordOptions) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGenerator;

    impl PasswordGenerator for FailingGenerator {
        fn generate(&self, _options: &PasswordOptions) -> Result<String> {
            Err(PasswordError::EmptyCharacterPool)
        }
    }

    #[test]
    fn scores_and_labels_generated_password() {
        let service = PasswordService::new(FixedGenerator("aB3$eF7!"));
        let generated = service.generate_password(&PasswordOptions::default()).unwrap();
        assert_eq!(generated.password(), "aB3$eF7!");
        assert_eq!(generated.score(), 66);
        assert_eq!(generated.strength(), PasswordStrength::Fair);
    }

    #[test]
    fn strong_password() {
        let service = PasswordService::new(FixedGenerator("Abcdefghijklmnopqrst12!@"));
        let generated = service.generate_password(&PasswordOptions::default()).unwrap();
        assert_eq!(generated.score(), 98);
        assert_eq!(generated.strength(), PasswordStrength::Strong);
    }

    #[test]
    fn generator_errors_propagate() {
        let service = PasswordService::new(FailingGenerator);
        let err = service.generate_password(&PasswordOptions::default()).unwrap_err();
        assert!(matches!(err, PasswordError::EmptyCharacterPool));
    }

    #[test]
    fn default_service_respects_length() {
        let options = PasswordOptions::new(30, true, true, true, true).unwrap();
        let service: PasswordService = PasswordService::default();
        let generated = service.generate_password(&options).unwrap();
        assert_eq!(generated.password().len(), 30);
        assert_eq!(generated.score(), service.calculate_password_strength(generated.password()));
    }
}
