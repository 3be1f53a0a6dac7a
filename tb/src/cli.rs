//! CLI command definitions and subcommands

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// tb - break a task down into subtasks with guidance
#[derive(Parser, Debug)]
#[command(name = "tb", author, version, about = "Break a task down into subtasks with guidance", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the input form descriptor as JSON
    Form,

    /// Show the app name, version, views and handlers
    Info,

    /// Break a task down into subtasks
    Breakdown {
        /// Task description (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        task: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Run a handler on a JSON request, like a hosting shell would
    Handle {
        /// Handler name
        #[arg(short, long, default_value = "break_down_task")]
        name: String,

        /// File holding the request JSON (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Output format for breakdown results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Location of the log file
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskbreakdown")
        .join("logs")
        .join("tb.log")
}
