//! ABEL CLI
//!
//! Command-line interface for diffing and reconciling building-config
//! entity snapshots

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "abel")]
#[command(about = "ABEL - Building-config entity operation reconciler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute the operations that bring the current snapshot up to date
    Diff(commands::diff::DiffArgs),
    /// Merge computed operations with a manually authored operation list
    Reconcile(commands::reconcile::ReconcileArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Reconcile(args) => commands::reconcile::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
