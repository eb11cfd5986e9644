use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "till")]
#[command(about = "Single-user inventory and point-of-sale ledger", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path of the data file (defaults to the OS data directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog products
    #[command(alias = "ls")]
    List {
        /// Filter by name (case-insensitive substring)
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by exact category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a product to the catalog
    Add {
        /// Product name
        name: String,

        /// Category name
        #[arg(short, long, default_value = "")]
        category: String,

        /// Cost price per unit
        #[arg(long)]
        cost: f64,

        /// Selling price per unit
        #[arg(long)]
        price: f64,

        /// Units in stock
        #[arg(short, long, default_value_t = 0)]
        quantity: u32,

        /// Flag the product when stock falls to this level
        #[arg(long, default_value_t = 0)]
        low_stock: u32,
    },

    /// Edit a product (only the given fields change)
    Edit {
        /// Product id, unique id prefix, or exact name
        product: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(long)]
        cost: Option<f64>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(short, long)]
        quantity: Option<u32>,

        #[arg(long)]
        low_stock: Option<u32>,
    },

    /// Delete a product (sales history is kept)
    #[command(alias = "rm")]
    Delete {
        /// Product id, unique id prefix, or exact name
        product: String,
    },

    /// Add a category name
    Category {
        /// Category name
        name: String,
    },

    /// Record a sale against stock
    Sell {
        /// Product id, unique id prefix, or exact name
        product: String,

        /// Units to sell
        #[arg(default_value_t = 1)]
        quantity: u32,
    },

    /// Show the daily sales report
    Report {
        /// Calendar date (YYYY-MM-DD), defaults to today
        date: Option<NaiveDate>,
    },

    /// Print the data file path
    Path,
}
