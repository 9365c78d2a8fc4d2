//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// gomarket - persisted shopping cart
///
/// Keeps a cart of products on this device and lets you add items and
/// adjust quantities from the command line.
#[derive(Parser, Debug)]
#[command(name = "gomarket")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "GOMARKET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the cart data and audit journal
    #[arg(long, global = true, env = "GOMARKET_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the products in the cart
    List(ListArgs),

    /// Put a product in the cart
    Add(AddArgs),

    /// Raise a product's quantity by one
    #[command(visible_alias = "inc")]
    Increment(QuantityArgs),

    /// Lower a product's quantity by one (removes it at quantity 1)
    #[command(visible_alias = "dec")]
    Decrement(QuantityArgs),

    /// Remove every product from the cart
    Clear(ClearArgs),

    /// Show or edit configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Product ID
    pub id: String,

    /// Display name
    #[arg(short, long)]
    pub title: String,

    /// Image URL
    #[arg(short, long, default_value = "")]
    pub image_url: String,

    /// Unit price
    #[arg(short, long, value_parser = parse_price)]
    pub price: f64,
}

/// Parse a price, refusing NaN and infinities
fn parse_price(value: &str) -> Result<f64, String> {
    let price: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if !price.is_finite() {
        return Err(format!("price must be a finite number, got '{value}'"));
    }
    Ok(price)
}

/// Arguments for increment/decrement
#[derive(Parser, Debug)]
pub struct QuantityArgs {
    /// Product ID
    pub id: String,
}

/// Arguments for the clear command
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., cart.duplicate_policy)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: Shell,
}

/// Output format for the list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON array in the stored shape
    Json,
    /// One `id<TAB>quantity` line per product
    Plain,
}
