//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use frete_types::OutputFormat;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "cdd-frete")]
#[command(version)]
#[command(about = "Freight rate resolution and spreadsheet import for CDD Santa Luzia / Contagem")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Date window for `list`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Period {
    #[default]
    All,
    Week,
    LastMonth,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price a delivery run without storing it
    Quote {
        /// Vehicle description (e.g., "VUC 3/4", "Toco", "Truck")
        vehicle: String,

        /// Number of deliveries
        #[arg(allow_negative_numbers = true)]
        count: i64,

        /// Distribution center (Santa Luzia, Contagem). Uses config value if not specified.
        #[arg(long)]
        cdd: Option<String>,

        /// Destination city
        #[arg(long, default_value = "")]
        city: String,

        /// Destination region
        #[arg(long, default_value = "")]
        region: String,
    },

    /// Add a freight by hand
    Add {
        /// License plate
        plate: String,

        /// Vehicle description
        vehicle: String,

        /// Number of deliveries
        count: i64,

        /// Date (DD/MM/YYYY or YYYY-MM-DD)
        date: String,

        /// Driver name; looked up from the plate if not specified
        #[arg(long)]
        driver: Option<String>,

        /// Route map reference
        #[arg(long, default_value = "")]
        map: String,

        #[arg(long, default_value = "")]
        city: String,

        #[arg(long, default_value = "")]
        region: String,

        /// Distribution center. Uses config value if not specified.
        #[arg(long)]
        cdd: Option<String>,
    },

    /// Import a spreadsheet CSV export
    Import {
        /// Path to CSV file
        file: PathBuf,

        /// Distribution center applied to every row. Uses config value if not specified.
        #[arg(long)]
        cdd: Option<String>,
    },

    /// List stored freights, newest first
    List {
        /// Match driver name or plate
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Only this distribution center
        #[arg(long)]
        cdd: Option<String>,

        /// Date window
        #[arg(long, value_enum, default_value_t = Period::All)]
        period: Period,

        /// Start date (YYYY-MM-DD), overrides --period
        #[arg(long)]
        from: Option<NaiveDate>,

        /// End date (YYYY-MM-DD), overrides --period
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Show dashboard totals
    Stats,

    /// Delete a stored freight
    Delete {
        /// Freight id
        id: Uuid,
    },

    /// Export all freights (.csv or .xlsx by extension)
    Export {
        /// Output file path
        output: PathBuf,
    },

    /// Show the driver roster
    Drivers,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default distribution center for imports
        #[arg(long)]
        set_default_cdd: Option<String>,

        /// Set record store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set TOML driver roster file
        #[arg(long)]
        set_roster: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
