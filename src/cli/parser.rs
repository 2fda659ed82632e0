use crate::core::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for nongkrong
/// Browse and curate student hangout spots around Tembalang
#[derive(Parser)]
#[command(
    name = "nongkrong",
    version = env!("CARGO_PKG_VERSION"),
    about = "Info nongkrong mahasiswa Tembalang: browse, filter and curate hangout spots stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Log in as this user (required to add; admin required to edit/delete)
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Run in test mode (no config file read/write)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Place fields as accepted by `add` (all required except photo/rating/comment).
#[derive(Args, Debug, Clone)]
pub struct NewPlaceArgs {
    #[arg(long, help = "Name of the place")]
    pub name: String,

    #[arg(long, help = "Opening hours label, e.g. \"24 Jam\" or \"Nggak 24 Jam\"")]
    pub hours: String,

    #[arg(long, help = "Price tier, e.g. Murah, \"Mending Mahal\", Mahal")]
    pub price: String,

    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    #[arg(long, default_value = "", help = "Photo URL")]
    pub photo: String,

    #[arg(long, help = "Rating 1.0-5.0 (default from config)")]
    pub rating: Option<f64>,

    #[arg(long, default_value = "")]
    pub comment: String,
}

/// Place fields as accepted by `edit` (only the given ones change).
#[derive(Args, Debug, Clone, Default)]
pub struct EditPlaceArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub hours: Option<String>,

    #[arg(long)]
    pub price: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    #[arg(long)]
    pub photo: Option<String>,

    #[arg(long)]
    pub rating: Option<f64>,

    #[arg(long)]
    pub comment: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, schema checks, statistics)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(
            long = "check",
            help = "Check integrity, the tempat columns and the creator backfill"
        )]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// List places, optionally filtered (like the map sidebar)
    List {
        #[arg(long = "hours", help = "Only these opening hours (repeatable)")]
        hours: Vec<String>,

        #[arg(long = "price", help = "Only these price tiers (repeatable)")]
        price: Vec<String>,

        #[arg(long = "details", help = "Show photo, comment and Google Maps link")]
        details: bool,
    },

    /// Add a new place (login required)
    Add {
        #[command(flatten)]
        place: NewPlaceArgs,
    },

    /// Edit an existing place (admin only)
    Edit {
        id: i64,

        #[command(flatten)]
        changes: EditPlaceArgs,
    },

    /// Delete a place by ID (admin only)
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Bulk import places from a CSV file
    Import {
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Export all places
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(
            long,
            value_name = "FILE",
            help = "Destination (default: nongkrong-backup-<timestamp>.sqlite next to the DB)"
        )]
        file: Option<String>,

        #[arg(long)]
        compress: bool,
    },
}
