mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stackwin",
    version,
    about = "Inspect the stacked window manager for terminal user interfaces"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Print the effective configuration
    Config,
    /// Add windows to a fresh manager and show where they are placed
    Place(commands::place::PlaceArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Config => commands::config::execute(),
        Commands::Place(args) => commands::place::execute(&args),
    }
}
