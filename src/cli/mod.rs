// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate passwords and rate their strength", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let args = Args::parse_from([
            "passforge", "--json", "generate", "-l", "20", "--symbols", "--no-numbers", "-c", "3",
        ]);
        assert!(args.json);
        match args.command {
            Some(CliCommand::Generate { length, symbols, no_numbers, count, .. }) => {
                assert_eq!(length, Some(20));
                assert!(symbols);
                assert!(no_numbers);
                assert_eq!(count, 3);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn symbols_flags_conflict() {
        let result = Args::try_parse_from(["passforge", "generate", "--symbols", "--no-symbols"]);
        assert!(result.is_err());
    }

    #[test]
    fn capitalize_collects_words() {
        let args = Args::parse_from(["passforge", "capitalize", "hello", "big", "world"]);
        match args.command {
            Some(CliCommand::Capitalize { text }) => assert_eq!(text, vec!["hello", "big", "world"]),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
