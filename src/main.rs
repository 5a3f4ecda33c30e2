use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

mod cli;

use crate::cli::Args;
use passforge::core::config::Config;
use passforge::PasswordError;

fn run() -> Result<(), Box<dyn Error>> {
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    passforge::logging::init(&config)?;
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    match args.command {
        Some(command) => cli::handlers::run_command(&config, command, args.json)?,
        None => cli::menu::run_cli_menu(&config)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("❌ {}", e);

            if let Some(password_error) = e.downcast_ref::<PasswordError>() {
                if password_error.is_invalid_argument() {
                    eprintln!("Enable at least one character type and keep the length between {} and {}.",
                        passforge::PasswordOptions::MIN_LENGTH,
                        passforge::PasswordOptions::MAX_LENGTH);
                    return ExitCode::from(2);
                }
            }

            ExitCode::FAILURE
        }
    }
}
