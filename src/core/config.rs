// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::error::Result;
use crate::models::PasswordOptions;

// Configuration for the generator and the binary around it
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_lowercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let options = PasswordOptions::default();
        Self {
            // Password Generation
            default_password_length: options.length(),
            default_include_uppercase: options.include_uppercase(),
            default_include_lowercase: options.include_lowercase(),
            default_include_numbers: options.include_numbers(),
            default_include_symbols: options.include_symbols(),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup, falling back to
    /// defaults for anything missing or unparseable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("PASSFORGE_LENGTH") {
            match val.trim().parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => log::warn!("Ignoring invalid PASSFORGE_LENGTH '{}'", val),
            }
        }

        read_flag(&lookup, "PASSFORGE_UPPERCASE", &mut config.default_include_uppercase);
        read_flag(&lookup, "PASSFORGE_LOWERCASE", &mut config.default_include_lowercase);
        read_flag(&lookup, "PASSFORGE_NUMBERS", &mut config.default_include_numbers);
        read_flag(&lookup, "PASSFORGE_SYMBOLS", &mut config.default_include_symbols);

        // Logging
        if let Some(level) = lookup("PASSFORGE_LOG") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', keeping {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("PASSFORGE_LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    /// The configured defaults as validated options.
    pub fn default_options(&self) -> Result<PasswordOptions> {
        PasswordOptions::new(
            self.default_password_length,
            self.default_include_uppercase,
            self.default_include_lowercase,
            self.default_include_numbers,
            self.default_include_symbols,
        )
    }
}

fn read_flag<F>(lookup: &F, key: &str, target: &mut bool)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(key) {
        match val.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => *target = true,
            "0" | "false" | "no" | "off" => *target = false,
            _ => log::warn!("Ignoring invalid {} '{}'", key, val),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.default_options().unwrap(), PasswordOptions::default());
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PASSFORGE_LENGTH", "20"),
            ("PASSFORGE_SYMBOLS", "yes"),
            ("PASSFORGE_UPPERCASE", "0"),
            ("PASSFORGE_LOG", "DEBUG"),
            ("PASSFORGE_LOG_FILE", "logs/passforge.log"),
        ]);
        let options = config.default_options().unwrap();
        assert_eq!(options.length(), 20);
        assert!(options.include_symbols());
        assert!(!options.include_uppercase());
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/passforge.log")));
    }

    #[test]
    fn garbage_values_are_ignored() {
        let config = config_from(&[
            ("PASSFORGE_LENGTH", "twelve"),
            ("PASSFORGE_NUMBERS", "maybe"),
            ("PASSFORGE_LOG", "loud"),
        ]);
        assert_eq!(config.default_password_length, 12);
        assert!(config.default_include_numbers);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn out_of_range_defaults_fail_validation() {
        let config = config_from(&[("PASSFORGE_LENGTH", "2")]);
        assert!(config.default_options().unwrap_err().is_invalid_argument());
    }
}
