//! absview library root.
//! Exposes the CLI parser, the high-level run() function, the generic
//! sortable table and the absence row builder.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod table;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Employee { .. } => cli::commands::employee::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);
    let mut cfg = Config::load(&path)?;

    // command-line overrides
    if let Some(url) = &cli.api_url {
        cfg.api_base_url = url.clone();
        cfg.validate()?;
    }
    if cli.no_color {
        cfg.color = false;
    }

    logging::init(&cfg);

    dispatch(&cli, &cfg)
}
