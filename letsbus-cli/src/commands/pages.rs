//! Page rendering commands: open, users, routes, bus

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use letsbus_client::routes::ROUTE_TABLE;
use letsbus_client::views::{BusHome, NavBar, UserPage};
use letsbus_client::{render_route, Directory, HttpDirectory, Route, UsersPage};
use letsbus_core::{LetsbusConfig, UserId};

use crate::ui::Spinner;

#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// Route path, e.g. /users or /user/7
    pub path: String,

    /// Directory endpoint (default: from config, http://localhost:5000/users)
    #[arg(long, env = "LETSBUS_DIRECTORY_URL")]
    pub endpoint: Option<String>,
}

#[derive(Parser, Debug)]
pub struct UsersArgs {
    /// Directory endpoint (default: from config, http://localhost:5000/users)
    #[arg(long, env = "LETSBUS_DIRECTORY_URL")]
    pub endpoint: Option<String>,

    /// Print the fetched records as JSON instead of rows
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct UserArgs {
    /// User id
    pub id: String,

    /// Directory endpoint (default: from config, http://localhost:5000/users)
    #[arg(long, env = "LETSBUS_DIRECTORY_URL")]
    pub endpoint: Option<String>,
}

fn directory(endpoint: Option<String>, config: &LetsbusConfig) -> Arc<dyn Directory> {
    let endpoint = endpoint.unwrap_or_else(|| config.directory.endpoint.clone());
    tracing::debug!(%endpoint, "using directory");
    Arc::new(HttpDirectory::new(endpoint))
}

pub async fn run_open(args: OpenArgs, config: &LetsbusConfig) -> Result<()> {
    let route = Route::parse(&args.path)
        .ok_or_else(|| anyhow!("No page at '{}'. Run `letsbus routes` to list them", args.path))?;

    let spinner = matches!(route, Route::Users).then(|| Spinner::start("Fetching users..."));
    let page = render_route(&route, directory(args.endpoint, config)).await;
    drop(spinner);

    print!("{}", NavBar);
    print!("{}", page);
    Ok(())
}

pub async fn run_users(args: UsersArgs, config: &LetsbusConfig) -> Result<()> {
    let mut page = UsersPage::new(directory(args.endpoint, config));

    let spinner = Spinner::start("Fetching users...");
    page.load().await;
    drop(spinner);

    if args.json {
        let json = serde_json::to_string_pretty(page.state().records())
            .context("Failed to serialize users")?;
        println!("{}", json);
    } else {
        print!("{}", page.view());
    }
    Ok(())
}

/// The user page plus the directory's record for that id, when it has one.
pub async fn run_user(args: UserArgs, config: &LetsbusConfig) -> Result<()> {
    let id = UserId::from(args.id.as_str());
    print!("{}", UserPage { id: &id });

    let spinner = Spinner::start("Looking up user...");
    let result = directory(args.endpoint, config).get_user(&id).await;
    drop(spinner);

    match result {
        Ok(user) => println!("{} / {}", user.name, user.email),
        Err(e) if e.status() == Some(404) => println!("No such user"),
        Err(e) => tracing::error!(error = %e, "There was an error fetching the user"),
    }
    Ok(())
}

pub fn run_routes() -> Result<()> {
    for (path, name) in ROUTE_TABLE {
        println!("{:<12} {}", path, name);
    }
    println!();
    print!("{}", NavBar);
    Ok(())
}

pub fn run_bus() -> Result<()> {
    print!("{}", BusHome);
    Ok(())
}
