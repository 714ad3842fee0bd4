use clap::{Parser, Subcommand};

/// Command-line interface definition for rTrainWatch
/// CLI application to track training events and their end-of-event alerts with SQLite
#[derive(Parser)]
#[command(
    name = "rtrainwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track scheduled training events and report which ones are about to end or just ended",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register a new training event
    Add {
        /// Location of the event
        location: String,

        /// Trainer running the event
        trainer: String,

        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM)
        end: String,

        #[arg(long = "json", help = "Print the assigned id as JSON")]
        json: bool,
    },

    /// List all events, most recently created first
    List {
        #[arg(long = "json", help = "Print events as JSON")]
        json: bool,
    },

    /// Show a single event
    Show {
        id: i64,

        #[arg(long = "json", help = "Print the event as JSON")]
        json: bool,
    },

    /// Delete an event by ID
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the number of stored events
    Count {
        #[arg(long = "json", help = "Print as JSON ({\"total_events\": N})")]
        json: bool,
    },

    /// Check which events are about to end or have just ended
    Alerts {
        #[arg(
            long = "at",
            value_name = "HH:MM",
            help = "Evaluate at this time of day instead of the current clock"
        )]
        at: Option<String>,

        #[arg(long = "json", help = "Print the alert report as JSON")]
        json: bool,
    },
}
