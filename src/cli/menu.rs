// src/cli/menu.rs
use inquire::{Confirm, Select, Text};

use passforge::core::config::Config;
use passforge::{
    GeneratorSession, GeneratorState, PasswordOptions, PasswordService, Result,
};

use super::handlers::{handle_capitalize, handle_score, print_generated, styled_strength};

const GENERATE: &str = "🔐  Generate password";
const CHANGE_OPTIONS: &str = "⚙️  Change generator options";
const CHECK_STRENGTH: &str = "📊  Check password strength";
const CAPITALIZE: &str = "🔠  Capitalize words";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(config: &Config) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║             🦀 PASSFORGE             ║");
    println!("╚══════════════════════════════════════╝");

    let options = config.default_options().unwrap_or_else(|e| {
        log::warn!("Configured defaults rejected ({}), using built-in defaults", e);
        PasswordOptions::default()
    });
    let mut session: GeneratorSession = GeneratorSession::with_options(PasswordService::default(), options);
    let scorer: PasswordService = PasswordService::default();

    loop {
        let choices = vec![GENERATE, CHANGE_OPTIONS, CHECK_STRENGTH, CAPITALIZE, EXIT];

        let selection = Select::new("Choose an option:", choices)
            .with_help_message("Use arrow keys to navigate, Enter to select, Esc to exit.")
            .prompt_skippable()?;

        match selection {
            Some(GENERATE) => {
                show_state(session.regenerate());
            }
            Some(CHANGE_OPTIONS) => match prompt_options(session.options())? {
                Some(options) => show_state(session.update_options(options)),
                None => {}
            },
            Some(CHECK_STRENGTH) => {
                let password = Text::new("Password to check:").prompt()?;
                let report = handle_score(&scorer, &password);
                println!(
                    "Strength: {} ({}/100)",
                    styled_strength(report.strength),
                    report.score
                );
            }
            Some(CAPITALIZE) => {
                let text = Text::new("Text:").prompt()?;
                println!("{}", handle_capitalize(&[text]));
            }
            Some(_) | None => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn show_state(state: &GeneratorState) {
    match state {
        GeneratorState::Success(generated) => {
            println!();
            print_generated(generated);
            println!();
        }
        GeneratorState::Error(message) => eprintln!("❌ Failed to generate password: {}", message),
        GeneratorState::Ready => {}
    }
}

// Returns None when the answers do not form valid options.
fn prompt_options(current: &PasswordOptions) -> Result<Option<PasswordOptions>> {
    let length: usize = Text::new("Password length (4-64):")
        .with_default(&current.length().to_string())
        .prompt()
        .and_then(|s| {
            s.trim()
                .parse()
                .map_err(|_| inquire::InquireError::Custom("Invalid number".into()))
        })?;

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(current.include_uppercase())
        .prompt()?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(current.include_lowercase())
        .prompt()?;

    let include_numbers = Confirm::new("Include numbers?")
        .with_default(current.include_numbers())
        .prompt()?;

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(current.include_symbols())
        .prompt()?;

    match PasswordOptions::new(
        length,
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_symbols,
    ) {
        Ok(options) => Ok(Some(options)),
        Err(e) if e.is_invalid_argument() => {
            log::warn!("Rejected generator options: {}", e);
            println!("❌ {}. Options left unchanged.", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
