//! letsbus CLI - users directory pages and bus reports
//!
//! - Render any route of the users app (`open`, `users`, `routes`)
//! - Walk the bus report flow and submit it (`bus`, `report`)
//! - Delay statistics over GTFS schedules (`stats`)
//! - Run the directory and report service (`serve`, with `server` feature)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letsbus_core::LetsbusConfig;

mod commands;
mod tracing_setup;
mod ui;
mod wizard;

#[derive(Parser, Debug)]
#[command(
    name = "letsbus",
    author,
    version,
    about = "Users directory pages and bus incident reports",
    long_about = "Browse the users directory page by page, report bus incidents, \
                  and compute delay statistics from GTFS schedules."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Suppress progress spinners (for script consumption)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the page for a route (/, /about, /user/:id, /users)
    Open(commands::pages::OpenArgs),
    /// Fetch and render the users list
    Users(commands::pages::UsersArgs),
    /// Show one user: the user page and the directory record
    User(commands::pages::UserArgs),
    /// Print the route table and navigation bar
    Routes,
    /// Print the bus app's home screen
    Bus,
    /// Report a bus incident (interactive when flags are missing)
    Report(commands::report::ReportArgs),
    /// Delay statistics from a GTFS schedule and observed arrivals
    Stats(commands::stats::StatsArgs),
    /// Run the directory and report HTTP server
    #[cfg(feature = "server")]
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();
    ui::init_quiet_mode(cli.quiet);

    let config = LetsbusConfig::load().context("Failed to load ~/.letsbus/config.toml")?;

    match cli.command {
        Commands::Open(args) => commands::run_open(args, &config).await,
        Commands::Users(args) => commands::run_users(args, &config).await,
        Commands::User(args) => commands::run_user(args, &config).await,
        Commands::Routes => commands::run_routes(),
        Commands::Bus => commands::run_bus(),
        Commands::Report(args) => commands::run_report(args, &config).await,
        Commands::Stats(args) => commands::run_stats(args),
        #[cfg(feature = "server")]
        Commands::Serve(args) => commands::run_serve(args, &config).await,
    }
}
