//! bearnotes - read and soft-delete notes in Bear's local database

pub mod cli;
pub mod domain;
pub mod logging;
pub mod notes;
pub mod server;
pub mod store;
pub mod tools;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_path, handle_recent, handle_serve, handle_show, handle_tagged,
        handle_tools, handle_trash,
    },
};
use notes::NoteOps;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    let config = Config::load()?;
    let ops = NoteOps::new(config.database_path(cli.db.as_ref()));

    match &cli.command {
        Command::Recent(args) => handle_recent(args, &ops),
        Command::Tagged(args) => handle_tagged(args, &ops),
        Command::Show(args) => handle_show(args, &ops),
        Command::Trash(args) => handle_trash(args, &ops),
        Command::Serve => handle_serve(ops),
        Command::Tools => handle_tools(ops),
        Command::Path(args) => handle_path(args, &ops),
        Command::Completions(args) => handle_completions(args),
    }
}
