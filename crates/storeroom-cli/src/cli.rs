//! Command argument types and the command runner.
//!
//! Each subcommand has a clap `Args` struct here that converts into the
//! matching core parameter type from [`storeroom_core::params`]. [`Cli`]
//! passes those parameters to the core handlers and renders the result.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Handlers → Renderer
//! ```

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use log::debug;
use storeroom_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    handlers::*,
    params::*,
    Format, Inventory,
};

use crate::{args::Commands, renderer::TerminalRenderer};

/// Reads `-` as standard input/output and anything else as a file path.
fn path_or_stdio(path: String) -> Option<PathBuf> {
    (path != "-").then(|| PathBuf::from(path))
}

/// Add an item with the next free ID
#[derive(Args)]
pub struct AddItemArgs {
    /// What the item is
    pub description: String,
    #[arg(short, long, default_value = "", help = "Where the item is kept")]
    pub location: String,
    #[arg(short, long, default_value = "", help = "Condition, e.g. Operational or Spare")]
    pub status: String,
    #[arg(short, long, default_value = "", help = "First remarks entry")]
    pub remarks: String,
}

impl From<AddItemArgs> for CreateItem {
    fn from(val: AddItemArgs) -> Self {
        CreateItem {
            description: val.description,
            location: val.location,
            status: val.status,
            remarks: val.remarks,
        }
    }
}

/// Insert or replace an item under a given ID
///
/// An existing item with the same ID is overwritten, including its remarks.
/// Use `edit` to keep the audit history.
#[derive(Args)]
pub struct AppendItemArgs {
    #[arg(help = "ID to write the item under")]
    pub id: u64,
    /// What the item is
    pub description: String,
    #[arg(short, long, default_value = "", help = "Where the item is kept")]
    pub location: String,
    #[arg(short, long, default_value = "", help = "Condition, e.g. Operational or Spare")]
    pub status: String,
    #[arg(short, long, default_value = "", help = "Remarks, stamped unless already stamped")]
    pub remarks: String,
}

impl From<AppendItemArgs> for ReplaceItem {
    fn from(val: AppendItemArgs) -> Self {
        ReplaceItem {
            id: val.id,
            description: val.description,
            location: val.location,
            status: val.status,
            remarks: val.remarks,
        }
    }
}

/// Change an item's fields and append a remark
///
/// Fields that are not given keep their current value. `--remarks` adds a
/// new timestamped entry; it never replaces earlier ones.
#[derive(Args)]
pub struct EditItemArgs {
    #[arg(help = "ID of the item to edit")]
    pub id: u64,
    #[arg(short, long, help = "New description")]
    pub description: Option<String>,
    #[arg(short, long, help = "New location")]
    pub location: Option<String>,
    #[arg(short, long, help = "New status")]
    pub status: Option<String>,
    #[arg(short, long, help = "Remarks entry to append")]
    pub remarks: Option<String>,
}

impl From<EditItemArgs> for EditItem {
    fn from(val: EditItemArgs) -> Self {
        EditItem {
            id: val.id,
            description: val.description,
            location: val.location,
            status: val.status,
            remarks: val.remarks,
        }
    }
}

/// Append a timestamped entry to an item's remarks
#[derive(Args)]
pub struct LogArgs {
    #[arg(help = "ID of the item to annotate")]
    pub id: u64,
    /// The entry text
    pub message: String,
}

impl From<LogArgs> for AppendRemark {
    fn from(val: LogArgs) -> Self {
        AppendRemark {
            id: val.id,
            message: val.message,
        }
    }
}

/// Delete an item permanently
#[derive(Args)]
pub struct DeleteItemArgs {
    #[arg(help = "ID of the item to delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteItemArgs> for DeleteItem {
    fn from(val: DeleteItemArgs) -> Self {
        DeleteItem {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Show one item with its full remarks
#[derive(Args)]
pub struct ShowItemArgs {
    #[arg(help = "ID of the item to show")]
    pub id: u64,
}

impl From<ShowItemArgs> for Id {
    fn from(val: ShowItemArgs) -> Self {
        Id { id: val.id }
    }
}

/// List items in ID order
///
/// Without `--limit` every item is listed. With it, one page is listed;
/// pass the last ID shown as `--after` to get the next page.
#[derive(Args)]
pub struct ListItemsArgs {
    #[arg(long, default_value_t = 0, help = "Only list items with a higher ID")]
    pub after: u64,
    #[arg(long, help = "Maximum number of items to list")]
    pub limit: Option<u32>,
}

impl From<ListItemsArgs> for ListItems {
    fn from(val: ListItemsArgs) -> Self {
        ListItems {
            after_id: val.after,
            limit: val.limit,
        }
    }
}

/// Find items by status, location or description
///
/// Every given filter must match. Location and description match any
/// substring, ignoring ASCII case; status must match exactly.
#[derive(Args)]
pub struct FindItemsArgs {
    #[arg(short, long, help = "Exact status")]
    pub status: Option<String>,
    #[arg(short, long, help = "Part of the location")]
    pub location: Option<String>,
    #[arg(short, long, help = "Part of the description")]
    pub description: Option<String>,
}

impl From<FindItemsArgs> for FindItems {
    fn from(val: FindItemsArgs) -> Self {
        FindItems {
            status: val.status,
            location: val.location,
            description: val.description,
        }
    }
}

/// Write every item as CSV or JSON
#[derive(Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,
    #[arg(default_value = "-", help = "Destination file, or - for standard output")]
    pub path: String,
}

impl From<ExportArgs> for ExportItems {
    fn from(val: ExportArgs) -> Self {
        ExportItems {
            format: val.format.into(),
            path: path_or_stdio(val.path),
        }
    }
}

/// Load items from a CSV or JSON document
///
/// Rows without an ID get the next free one; rows with an ID insert or
/// replace that item. If any row is malformed nothing is written.
#[derive(Args)]
pub struct ImportArgs {
    #[arg(short, long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,
    #[arg(default_value = "-", help = "Source file, or - for standard input")]
    pub path: String,
}

impl From<ImportArgs> for ImportItems {
    fn from(val: ImportArgs) -> Self {
        ImportItems {
            format: val.format.into(),
            path: path_or_stdio(val.path),
        }
    }
}

/// Pretty-print a JSON document
#[derive(Args)]
pub struct ViewJsonArgs {
    #[arg(default_value = "-", help = "JSON file, or - for standard input")]
    pub path: String,
}

/// Interchange formats accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for Format {
    fn from(val: FormatArg) -> Self {
        match val {
            FormatArg::Csv => Format::Csv,
            FormatArg::Json => Format::Json,
        }
    }
}

/// Pretty-prints the JSON document at `args.path`. Needs no store.
pub fn view_json(args: ViewJsonArgs, renderer: &TerminalRenderer) -> Result<()> {
    let input = match path_or_stdio(args.path) {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read standard input")?;
            input
        }
    };
    let pretty = handle_view_json(&input).context("Failed to parse JSON")?;
    renderer.print_raw(&pretty);
    Ok(())
}

/// Runs commands against one open inventory.
pub struct Cli {
    inventory: Inventory,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(inventory: Inventory, renderer: TerminalRenderer) -> Self {
        Self {
            inventory,
            renderer,
        }
    }

    /// Dispatches one parsed command. Without a command every item is
    /// listed.
    pub fn run(mut self, command: Option<Commands>) -> Result<()> {
        let Some(command) = command else {
            return self.list_items(&ListItems::default());
        };

        match command {
            Commands::Add(args) => self.add_item(&args.into()),
            Commands::Append(args) => self.append_item(&args.into()),
            Commands::Edit(args) => self.edit_item(&args.into()),
            Commands::Log(args) => self.append_remark(&args.into()),
            Commands::Delete(args) => self.delete_item(&args.into()),
            Commands::Show(args) => self.show_item(&args.into()),
            Commands::List(args) => self.list_items(&args.into()),
            Commands::Find(args) => self.find_items(&args.into()),
            Commands::ResetSequence => self.reset_sequence(),
            Commands::Export(args) => self.export_items(&args.into()),
            Commands::Import(args) => self.import_items(&args.into()),
            Commands::ViewJson(args) => view_json(args, &self.renderer),
        }?;

        self.inventory.close().context("Failed to close inventory")
    }

    fn add_item(&mut self, params: &CreateItem) -> Result<()> {
        let item = handle_add_item(&mut self.inventory, params).context("Failed to add item")?;
        self.renderer.render(&CreateResult::new(item).to_string())
    }

    fn append_item(&mut self, params: &ReplaceItem) -> Result<()> {
        let item = handle_append_item(&mut self.inventory, params)
            .with_context(|| format!("Failed to write item {}", params.id))?;
        self.renderer.render(&CreateResult::new(item).to_string())
    }

    fn edit_item(&mut self, params: &EditItem) -> Result<()> {
        if params.is_empty() {
            bail!("Nothing to change; pass --description, --location, --status or --remarks");
        }
        match handle_edit_item(&mut self.inventory, params)
            .with_context(|| format!("Failed to edit item {}", params.id))?
        {
            Some(item) => {
                let result = UpdateResult::with_changes(item, params.describe_changes());
                self.renderer.render(&result.to_string())
            }
            None => bail!("Item with ID {} not found", params.id),
        }
    }

    fn append_remark(&mut self, params: &AppendRemark) -> Result<()> {
        let item = handle_append_remark(&mut self.inventory, params)
            .with_context(|| format!("Failed to append remarks to item {}", params.id))?;
        self.renderer.render(&UpdateResult::new(item).to_string())
    }

    fn delete_item(&mut self, params: &DeleteItem) -> Result<()> {
        if !params.confirmed {
            bail!("Refusing to delete item {} without --confirm", params.id);
        }
        match handle_delete_item(&mut self.inventory, params)? {
            Some(item) => self.renderer.render(&DeleteResult::new(item).to_string()),
            None => self.renderer.render(
                &OperationStatus::failure(format!("No item with ID {} to delete", params.id))
                    .to_string(),
            ),
        }
    }

    fn show_item(&self, params: &Id) -> Result<()> {
        match handle_show_item(&self.inventory, params)? {
            Some(item) => self.renderer.render(&item.to_string()),
            None => bail!("Item with ID {} not found", params.id),
        }
    }

    fn list_items(&self, params: &ListItems) -> Result<()> {
        let items = handle_list_items(&self.inventory, params).context("Failed to list items")?;
        self.renderer.render(&items.to_string())
    }

    fn find_items(&self, params: &FindItems) -> Result<()> {
        let items = handle_find_items(&self.inventory, params).context("Failed to find items")?;
        self.renderer.render(&items.to_string())
    }

    fn reset_sequence(&mut self) -> Result<()> {
        let floor = handle_reset_sequence(&mut self.inventory)?;
        self.renderer
            .render(&OperationStatus::success(format!("ID sequence reset to {floor}")).to_string())
    }

    fn export_items(&self, params: &ExportItems) -> Result<()> {
        let stdout = io::stdout();
        let result = handle_export_items(&self.inventory, params, stdout.lock())
            .context("Failed to export items")?;
        debug!("export finished: {result}");
        if params.path.is_some() {
            self.renderer.render(&result.to_string())
        } else {
            // Standard output carries the document itself.
            self.renderer.notice(&result.to_string());
            Ok(())
        }
    }

    fn import_items(&mut self, params: &ImportItems) -> Result<()> {
        let stdin = io::stdin();
        let result = handle_import_items(&mut self.inventory, params, stdin.lock())
            .context("Failed to import items")?;
        self.renderer.render(&result.to_string())
    }
}
