//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe for two players sharing a terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML theme file. Built-in colors are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output (the terminal is reserved for the game)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.config, None);
        assert_eq!(cli.log_file, PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_config_and_log_file() {
        let cli = Cli::parse_from(["tictactoe", "-c", "theme.toml", "--log-file", "/tmp/t.log"]);
        assert_eq!(cli.config, Some(PathBuf::from("theme.toml")));
        assert_eq!(cli.log_file, PathBuf::from("/tmp/t.log"));
    }
}
