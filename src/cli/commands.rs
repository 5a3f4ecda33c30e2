// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length (4-64)
        #[arg(short, long)]
        length: Option<usize>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,

        /// Include symbols
        #[arg(long, conflicts_with = "no_symbols")]
        symbols: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// Number of passwords to generate
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=100))]
        count: u16,
    },

    /// Score a password
    Score {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },

    /// Capitalize every word of a text
    Capitalize {
        /// Text to transform
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}
