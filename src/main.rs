// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Musterbook CLI - roster store and report engine for station staffing

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use musterbook::{commands, config};

#[derive(Parser)]
#[command(name = "musterbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    /// Data directory holding the roster CSV files and config
    #[arg(long, env = "MUSTERBOOK_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Operator email, checked against the configured allow-list
    #[arg(long, env = "MUSTERBOOK_OPERATOR")]
    operator: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List employee records, optionally filtered
    List {
        /// Case-insensitive PC Number substring
        #[arg(long)]
        pc: Option<String>,

        /// Exact station name ("All" for no filter)
        #[arg(long)]
        station: Option<String>,
    },

    /// List station quota rows, optionally filtered
    Stations {
        /// Exact station name (wins over the other selectors)
        #[arg(long)]
        station: Option<String>,

        /// Exact circle name
        #[arg(long)]
        circle: Option<String>,

        /// Exact sub-division name
        #[arg(long)]
        subdivision: Option<String>,
    },

    /// Show quota totals aggregated by Sub-Division
    Summary,

    /// Add or update an employee record (keyed by PC Number)
    Add {
        /// PC Number, the unique key
        #[arg(long)]
        pc: String,

        /// Employee name
        #[arg(long)]
        name: String,

        /// Posted station
        #[arg(long)]
        station: String,

        /// Posting date as free-form DD.MM.YY text
        #[arg(long, default_value = "")]
        date: String,

        /// Attachment note
        #[arg(long, default_value = "")]
        attachment: String,
    },

    /// Remove an employee record by PC Number
    Remove {
        /// PC Number to remove
        pc: String,
    },

    /// Export the filtered roster as a CSV or PDF report
    Export {
        /// Output format (csv, pdf)
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file (format default name if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,

        /// Case-insensitive PC Number substring
        #[arg(long)]
        pc: Option<String>,

        /// Exact station name ("All" for no filter)
        #[arg(long)]
        station: Option<String>,

        /// Report title (PDF only)
        #[arg(long, default_value = "Police Department Staff Roster")]
        title: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (log_level, allowed_operators)
        key: String,

        /// Value to set (omit to get)
        value: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let data_dir = config::resolve_data_dir(cli.data_dir);

    // The operator gate applies to every command that touches roster data.
    if !matches!(cli.command, Commands::Completions { .. }) {
        let cfg = config::load(&data_dir)?;
        let operator = cli.operator.as_deref().unwrap_or("");
        if !cfg.is_authorized(operator) {
            anyhow::bail!("Access denied. Use an authorized operator email (--operator).");
        }
    }

    // Execute command
    match cli.command {
        Commands::List { pc, station } => {
            commands::list::run(&data_dir, pc.as_deref(), station.as_deref(), cli.json)
        }
        Commands::Stations { station, circle, subdivision } => {
            commands::stations::run(&data_dir, station, circle, subdivision, cli.json)
        }
        Commands::Summary => {
            commands::summary::run(&data_dir, cli.json)
        }
        Commands::Add { pc, name, station, date, attachment } => {
            commands::add::run(&data_dir, pc, name, station, date, attachment)
        }
        Commands::Remove { pc } => {
            commands::remove::run(&data_dir, &pc)
        }
        Commands::Export { format, output, pc, station, title } => {
            commands::export::run(&data_dir, &format, output, pc.as_deref(), station.as_deref(), &title)
        }
        Commands::Config { key, value } => {
            commands::config::run(&data_dir, &key, value)
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
