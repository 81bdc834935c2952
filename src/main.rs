//! Tic-tac-toe - terminal client entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe::Cli;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tictactoe::run(cli)
}
