//! Command-line entry point for sift.

use std::process::ExitCode;

use clap::Parser;
use sift::cli::{
    args::{Cli, Commands},
    commands,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(cmd) => commands::rank::cmd_rank(&cmd),
        Commands::Keywords(cmd) => commands::keywords::cmd_keywords(&cmd),
        Commands::Check => commands::check::cmd_check(),
        Commands::Init { force } => commands::init::cmd_init(force),
    }
}
