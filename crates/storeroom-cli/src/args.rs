use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AddItemArgs, AppendItemArgs, DeleteItemArgs, EditItemArgs, ExportArgs, FindItemsArgs,
    ImportArgs, ListItemsArgs, LogArgs, ShowItemArgs, ViewJsonArgs,
};

/// A small inventory record keeper
///
/// Storeroom tracks physical assets (description, location, status) in a
/// local SQLite file. Every change to an item adds a timestamped line to its
/// remarks, so the remarks double as the item's audit log.
#[derive(Parser)]
#[command(version, about, name = "sr")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/storeroom/storeroom.db; ":memory:" uses a throwaway
    /// in-memory store
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Floor of the ID sequence for a new store; the first item gets the
    /// next ID above it
    #[arg(long, global = true, default_value_t = 1000)]
    pub index_start: u64,

    /// IANA time zone for remarks timestamps, e.g. Asia/Kolkata. Defaults to
    /// the system time zone
    #[arg(long, global = true)]
    pub time_zone: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, every item is listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Add an item with the next free ID
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// Insert or replace an item under a given ID
    Append(AppendItemArgs),
    /// Change an item's fields and append a remark
    #[command(alias = "e")]
    Edit(EditItemArgs),
    /// Append a timestamped entry to an item's remarks
    #[command(alias = "l")]
    Log(LogArgs),
    /// Delete an item permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteItemArgs),
    /// Show one item with its full remarks
    #[command(alias = "s")]
    Show(ShowItemArgs),
    /// List items in ID order
    #[command(alias = "ls")]
    List(ListItemsArgs),
    /// Find items by status, location or description
    #[command(alias = "f")]
    Find(FindItemsArgs),
    /// Reset the ID sequence to the configured floor
    ResetSequence,
    /// Write every item as CSV or JSON
    Export(ExportArgs),
    /// Load items from a CSV or JSON document, all or nothing
    Import(ImportArgs),
    /// Pretty-print a JSON document
    ViewJson(ViewJsonArgs),
}
