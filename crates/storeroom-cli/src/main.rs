//! Storeroom CLI application.
//!
//! Command-line front end for the storeroom inventory store.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use storeroom_core::InventoryBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        index_start,
        time_zone,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    // Viewing a JSON file does not touch the store.
    if let Some(Commands::ViewJson(args)) = command {
        return cli::view_json(args, &renderer);
    }

    let inventory = InventoryBuilder::new()
        .with_database_path(database_file)
        .with_index_start(index_start)
        .with_time_zone(time_zone)
        .build()
        .context("Failed to open inventory")?;

    info!("Storeroom started");

    Cli::new(inventory, renderer).run(command)
}
