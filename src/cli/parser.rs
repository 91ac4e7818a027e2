use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for absview
/// CLI application to browse employee absences
#[derive(Parser)]
#[command(
    name = "absview",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse employee absences in a sortable table, with conflict flags from the absences API",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the API base URL from the configuration
    #[arg(global = true, long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Read absences from a JSON file instead of the API
    #[arg(global = true, long = "source", value_name = "FILE")]
    pub source: Option<String>,

    /// Conflict flags keyed by absence id (JSON object, requires --source)
    #[arg(global = true, long = "conflicts", value_name = "FILE", requires = "source")]
    pub conflicts: Option<String>,

    /// Do not fetch conflict flags
    #[arg(global = true, long = "no-conflicts")]
    pub no_conflicts: bool,

    /// Disable ANSI colors
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every table view.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Initial sort: FIELD or FIELD:asc|desc
    /// (fields: name, type, startDate, endDate)
    #[arg(long, short, value_name = "FIELD[:DIR]")]
    pub sort: Option<String>,

    /// Activate a column header, as a click would; repeatable, applied in order
    #[arg(long = "click", value_name = "FIELD")]
    pub click: Vec<String>,

    /// Prompt for column numbers to sort by after showing the table
    #[arg(long, short)]
    pub interactive: bool,

    /// List the commands that open each linked employee
    #[arg(long)]
    pub links: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

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

    /// Show all absences
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show the absences of one employee
    Employee {
        /// Employee id
        id: String,

        #[command(flatten)]
        view: ViewArgs,
    },
}
