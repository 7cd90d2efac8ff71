// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chatsort - support-chat triage pipeline.
//!
//! Pulls support-chat messages from a Looker report, classifies each
//! brand's trailing-window conversation, and appends one summary row per
//! brand to a shared Google Sheet.

mod run;

use clap::{Parser, Subcommand};

/// Chatsort - support-chat triage pipeline.
#[derive(Parser, Debug)]
#[command(name = "chatsort", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute one triage pass over the trailing window.
    Run,
    /// Print the resolved configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match chatsort_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            chatsort_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Run) => {
            if let Err(e) = run::execute(&config).await {
                eprintln!("chatsort run failed: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                eprintln!("failed to render configuration: {e}");
                std::process::exit(1);
            }
        },
        None => {
            println!("chatsort: use --help for available commands");
        }
    }
}
