//! rAttendance library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod environment;
pub mod errors;
pub mod export;
pub mod identity;
pub mod models;
pub mod repository;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use environment::Environment;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, env: &Environment) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init => commands::init::handle(env),
        Commands::Config { .. } => commands::config::handle(cmd, cfg, &env.home),
        Commands::Class { .. } => commands::class::handle(cmd, env),
        Commands::Date { .. } => commands::class::handle_date(cmd, env),
        Commands::Student { .. } => commands::student::handle(cmd, env),
        Commands::Draft { .. } => commands::draft::handle(cmd, env),
        Commands::Submit => commands::submit::handle(cmd, env),
        Commands::Export { .. } => commands::export::handle(cmd, env),
        Commands::Call { .. } => commands::call::handle(cmd, env),
        Commands::Report { .. } => commands::report::handle(cmd, env),
        Commands::Admin { .. } => commands::admin::handle(cmd, env),
        Commands::Token { .. } => commands::token::handle(cmd, env),
        Commands::Log { .. } => commands::log::handle(cmd, env),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let home = utils::path::resolve_home(cli.home.as_deref());
    let cfg = Config::load(&home)?;
    let env = Environment::from_config(&cfg, &home);

    log::debug!("home: {}, backend: {:?}", home.display(), env.backend.kind());

    dispatch(&cli, &cfg, &env)
}
