use crate::core::compass::Capability;
use crate::core::replay::PermissionAnswer;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTorcia
#[derive(Parser)]
#[command(
    name = "rtorcia",
    version = env!("CARGO_PKG_VERSION"),
    about = "Whose turn is it to hold the flashlight? Rotation calendar and compass",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple households)
    #[arg(global = true, long = "config-file", value_name = "FILE")]
    pub config_file: Option<String>,

    /// Diagnostic log level on stderr (off, error, warn, info, debug, trace)
    #[arg(global = true, long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Run in test mode (no config file is written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the configuration in use")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or invalid fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Show who holds the flashlight today
    Today {
        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the owner of a given date
    Owner {
        /// Date (YYYY-MM-DD, or "today")
        date: String,
    },

    /// Show the ownership calendar around today
    Calendar {
        /// Center the calendar on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Days shown before today (default from config)
        #[arg(long)]
        before: Option<u32>,

        /// Total number of days shown (default from config)
        #[arg(long)]
        days: Option<u32>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Export the ownership calendar
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Center the exported window on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replay a compass sample script through the compass state machine
    Compass {
        /// YAML or JSON script with the sample steps
        #[arg(long, value_name = "FILE")]
        script: String,

        /// Override the platform capability declared in the script
        #[arg(long, value_enum)]
        capability: Option<Capability>,

        /// Override the permission answer declared in the script
        #[arg(long, value_enum)]
        permission: Option<PermissionAnswer>,

        /// Switch to manual mode afterwards and apply these actions (left,right,reset)
        #[arg(long, value_name = "ACTIONS")]
        rotate: Option<String>,
    },

    /// Classify a bread-availability spreadsheet cell value
    Bread {
        /// Raw cell value (omit for an empty cell)
        cell: Option<String>,
    },
}
