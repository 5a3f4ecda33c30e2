// src/cli/handlers.rs
use console::{style, StyledObject};
use serde::Serialize;

use passforge::core::config::Config;
use passforge::{
    capitalize_words, GeneratedPassword, PasswordOptions, PasswordService, PasswordStrength, Result,
};

use super::CliCommand;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub strength: PasswordStrength,
}

/// Flag overrides from the `generate` subcommand.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateFlags {
    pub length: Option<usize>,
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub no_numbers: bool,
    pub symbols: bool,
    pub no_symbols: bool,
}

// Merge command line flags over the configured defaults
pub fn resolve_options(config: &Config, flags: GenerateFlags) -> Result<PasswordOptions> {
    let include_symbols = if flags.symbols {
        true
    } else if flags.no_symbols {
        false
    } else {
        config.default_include_symbols
    };

    PasswordOptions::new(
        flags.length.unwrap_or(config.default_password_length),
        config.default_include_uppercase && !flags.no_uppercase,
        config.default_include_lowercase && !flags.no_lowercase,
        config.default_include_numbers && !flags.no_numbers,
        include_symbols,
    )
}

pub fn handle_generate(
    service: &PasswordService,
    options: &PasswordOptions,
    count: usize,
) -> Result<Vec<GeneratedPassword>> {
    log::debug!(
        "Generating {} password(s): length={} upper={} lower={} numbers={} symbols={}",
        count,
        options.length(),
        options.include_uppercase(),
        options.include_lowercase(),
        options.include_numbers(),
        options.include_symbols()
    );

    (0..count).map(|_| service.generate_password(options)).collect()
}

pub fn handle_score(service: &PasswordService, password: &str) -> StrengthReport {
    let score = service.calculate_password_strength(password);
    StrengthReport {
        score,
        strength: PasswordStrength::from_score(score as i32),
    }
}

pub fn handle_capitalize(words: &[String]) -> String {
    capitalize_words(&words.join(" "))
}

pub fn styled_strength(strength: PasswordStrength) -> StyledObject<&'static str> {
    let label = style(strength.display_name());
    match strength {
        PasswordStrength::Weak => label.red().bold(),
        PasswordStrength::Fair => label.yellow(),
        PasswordStrength::Good => label.cyan(),
        PasswordStrength::Strong => label.green().bold(),
    }
}

pub fn print_generated(generated: &GeneratedPassword) {
    println!("{}", generated.password());
    println!(
        "Strength: {} ({}/100)",
        styled_strength(generated.strength()),
        generated.score()
    );
}

/// Runs a non-interactive subcommand and prints its result.
pub fn run_command(config: &Config, command: CliCommand, json: bool) -> Result<()> {
    let service: PasswordService = PasswordService::default();

    match command {
        CliCommand::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            symbols,
            no_symbols,
            count,
        } => {
            let flags = GenerateFlags {
                length,
                no_uppercase,
                no_lowercase,
                no_numbers,
                symbols,
                no_symbols,
            };
            let options = resolve_options(config, flags)?;
            let generated = handle_generate(&service, &options, count as usize)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&generated)?);
            } else {
                for (i, entry) in generated.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    print_generated(entry);
                }
            }
        }
        CliCommand::Score { password } => {
            let report = handle_score(&service, &password);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "Strength: {} ({}/100)",
                    styled_strength(report.strength),
                    report.score
                );
            }
        }
        CliCommand::Capitalize { text } => {
            let capitalized = handle_capitalize(&text);
            if json {
                println!("{}", serde_json::to_string(&capitalized)?);
            } else {
                println!("{}", capitalized);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use passforge::PasswordError;

    #[test]
    fn flags_override_config() {
        let config = Config::default();
        let options = resolve_options(
            &config,
            GenerateFlags {
                length: Some(30),
                no_numbers: true,
                symbols: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(options.length(), 30);
        assert!(!options.include_numbers());
        assert!(options.include_symbols());
        assert!(options.include_uppercase());
    }

    #[test]
    fn disabling_everything_is_invalid() {
        let config = Config::default();
        let err = resolve_options(
            &config,
            GenerateFlags {
                no_uppercase: true,
                no_lowercase: true,
                no_numbers: true,
                no_symbols: true,
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, PasswordError::NoCharacterClass));
    }

    #[test]
    fn generate_count() {
        let service: PasswordService = PasswordService::default();
        let generated = handle_generate(&service, &PasswordOptions::default(), 5).unwrap();
        assert_eq!(generated.len(), 5);
        assert!(generated.iter().all(|g| g.password().len() == 12));
    }

    #[test]
    fn score_report() {
        let report = handle_score(&PasswordService::default(), "aB3$eF7!");
        assert_eq!(
            report,
            StrengthReport { score: 66, strength: PasswordStrength::Fair }
        );
    }

    #[test]
    fn capitalize_joins_arguments() {
        let words = vec!["hello".to_string(), "WORLD".to_string()];
        assert_eq!(handle_capitalize(&words), "Hello World");
    }
}
