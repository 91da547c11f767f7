//! Command handlers for the CLI.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::io::{self, Write};

use super::output::{DatabaseLocation, Output, OutputFormat};
use super::{Cli, CompletionsArgs, PathArgs, RecentArgs, ShowArgs, TaggedArgs, TrashArgs};
use crate::notes::NoteOps;
use crate::server;
use crate::tools::ToolRegistry;

pub fn handle_recent(args: &RecentArgs, ops: &NoteOps) -> Result<()> {
    println!("{}", ops.list_recent(args.count));
    Ok(())
}

pub fn handle_tagged(args: &TaggedArgs, ops: &NoteOps) -> Result<()> {
    println!("{}", ops.notes_by_tag(&args.tag));
    Ok(())
}

pub fn handle_show(args: &ShowArgs, ops: &NoteOps) -> Result<()> {
    println!("{}", ops.note_summary(&args.title));
    Ok(())
}

pub fn handle_trash(args: &TrashArgs, ops: &NoteOps) -> Result<()> {
    println!("{}", ops.delete_note(&args.title));
    Ok(())
}

pub fn handle_serve(ops: NoteOps) -> Result<()> {
    let registry = ToolRegistry::new(ops);
    let stdin = io::stdin();
    let stdout = io::stdout();
    server::serve(stdin.lock(), stdout.lock(), &registry)
}

pub fn handle_tools(ops: NoteOps) -> Result<()> {
    let registry = ToolRegistry::new(ops);
    let output = Output::new(registry.descriptors());
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn handle_path(args: &PathArgs, ops: &NoteOps) -> Result<()> {
    let location = DatabaseLocation::probe(ops.database_path());
    match args.format {
        OutputFormat::Human => {
            let status = if location.exists { "found" } else { "missing" };
            println!("{} ({})", location.path, status);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(location))?);
        }
    }
    Ok(())
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let mut stdout = io::stdout();
    clap_complete::generate(args.shell, &mut cmd, "bear-notes", &mut stdout);
    stdout.flush().context("failed to write completions")
}
