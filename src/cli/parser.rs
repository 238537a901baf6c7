use clap::{Parser, Subcommand};

/// Command-line interface definition for punch
#[derive(Parser)]
#[command(
    name = "punch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record the grind: punch in and out of work sessions grouped by profile",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or a separate store)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the clock
    In {
        /// The profile to attach the session to
        #[arg(long, short)]
        profile: Option<String>,
    },

    /// Stop the clock
    Out {
        /// The profile the session is attached to
        #[arg(long, short)]
        profile: Option<String>,

        /// Attach a note to the session
        #[arg(long, short)]
        note: Option<String>,

        /// Delete the current session instead of closing it
        #[arg(long, short)]
        delete: bool,
    },

    /// Show the open session, if any
    Status {
        #[arg(long, short)]
        profile: Option<String>,
    },

    /// List sessions as JSON
    List {
        /// The profile to filter sessions by
        #[arg(long, short)]
        profile: Option<String>,

        /// Only sessions starting at or after this date (YYYY-MM-DD[ HH:MM:SS])
        #[arg(long, short, conflicts_with = "today")]
        since: Option<String>,

        /// Only sessions starting at or before this date (YYYY-MM-DD[ HH:MM:SS])
        #[arg(long, short, conflicts_with = "today")]
        before: Option<String>,

        /// Only sessions started today
        #[arg(long = "today")]
        today: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Delete a session by id
    Delete { id: i64 },

    /// Manage punch profiles
    Profiles {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Initialize the store and configuration
    Init,

    /// Manage the store (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check store integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the store using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show store information")]
        info: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// List all profiles
    List {
        #[arg(long)]
        pretty: bool,
    },

    /// Create a new profile
    Add {
        slug: String,

        /// A human readable description of the profile
        #[arg(long, short)]
        description: Option<String>,
    },
}
