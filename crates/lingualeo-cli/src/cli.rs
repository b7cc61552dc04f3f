//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Lingualeo CLI - translate words and grow your Lingualeo vocabulary
///
/// Looks up every word concurrently, prints the ranked translations, and
/// optionally plays pronunciations or adds the words to your dictionary.
///
/// Settings are also read from ~/lingualeo.conf, ~/lingualeo.yml and the
/// same files in the current directory. Plain format example:
///
///   email = email@gmail.com
///   password = password
///   add = false
///   sound = true
///   player = mplayer
#[derive(Parser, Debug)]
#[command(
    name = "lingualeo",
    version,
    author,
    about,
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Words to translate
    #[arg(value_name = "WORD", required_unless_present = "completions")]
    pub words: Vec<String>,

    /// Lingualeo account email
    #[arg(short, long, env = "LINGUALEO_EMAIL")]
    pub email: Option<String>,

    /// Lingualeo account password
    #[arg(short, long, env = "LINGUALEO_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Path to configuration file (INI or YAML)
    #[arg(short, long, env = "LINGUALEO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Media player for word pronunciation
    #[arg(short = 'm', long)]
    pub player: Option<String>,

    /// Add words to the dictionary even if they are already there
    #[arg(short, long)]
    pub force: bool,

    /// Add words to the Lingualeo dictionary
    #[arg(short, long)]
    pub add: bool,

    /// Play word pronunciations
    #[arg(short, long)]
    pub sound: bool,

    /// Custom translation to add instead of the top ranked one (repeatable)
    #[arg(short = 't', long = "translate", value_name = "TRANSLATION")]
    pub translations: Vec<String>,

    /// Enable verbose logging (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print shell completions for the given shell and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// Pretty-printed JSON output
    JsonPretty,
    /// YAML output
    Yaml,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }

    /// Words as they will be dispatched: trimmed, empty ones dropped
    pub fn clean_words(&self) -> Vec<String> {
        self.words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
