use clap::{Parser, Subcommand};
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "grocr")]
#[command(version = VERSION)]
#[command(about = "A fast, local-first grocery list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Storage directory (defaults to the platform data dir, or $GROCR_HOME)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item to the list
    #[command(alias = "a")]
    Add {
        /// Item name
        name: String,

        /// Quantity to buy
        #[arg(short, long, default_value = "0")]
        amount: String,

        /// Free-form note
        #[arg(short, long, default_value = "")]
        note: String,

        /// pending or purchased
        #[arg(short, long, default_value = "pending")]
        status: String,
    },

    /// Show the grocery list
    #[command(alias = "ls")]
    List,

    /// Edit an item's fields in place
    #[command(alias = "e")]
    Edit {
        /// Id of the item (first table column)
        id: u64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New quantity
        #[arg(short, long)]
        amount: Option<String>,

        /// New note
        #[arg(short, long)]
        note: Option<String>,

        /// pending or purchased
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Delete an item from the list
    #[command(alias = "rm")]
    Delete {
        /// Id of the item (first table column)
        id: u64,
    },

    /// Drop the whole persisted list
    Clear,
}
