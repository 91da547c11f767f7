//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// bear-notes - read and trash Bear notes from the command line or a tool host
#[derive(Parser, Debug)]
#[command(name = "bear-notes", version, about, long_about = None)]
pub struct Cli {
    /// Bear database file (overrides config file and the default location)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the most recently updated notes
    Recent(RecentArgs),

    /// List notes carrying a tag
    Tagged(TaggedArgs),

    /// Show a note's title, last update and first lines
    Show(ShowArgs),

    /// Move a note to Bear's trash
    Trash(TrashArgs),

    /// Serve the note tools over stdio (JSON-RPC, one message per line)
    Serve,

    /// Print the tool descriptors as JSON
    Tools,

    /// Show the resolved database path and whether it exists
    Path(PathArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `recent` command
#[derive(Parser, Debug)]
pub struct RecentArgs {
    /// Number of notes to list
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: u32,
}

/// Arguments for the `tagged` command
#[derive(Parser, Debug)]
pub struct TaggedArgs {
    /// Tag title, matched exactly (e.g. "#work")
    pub tag: String,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note title, matched exactly
    pub title: String,
}

/// Arguments for the `trash` command
#[derive(Parser, Debug)]
pub struct TrashArgs {
    /// Note title, matched exactly
    pub title: String,
}

/// Arguments for the `path` command
#[derive(Parser, Debug)]
pub struct PathArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
