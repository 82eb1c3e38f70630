// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::default_config_path;

/// Command-line arguments for `waveplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "waveplan",
    version,
    about = "Detect task hazards, plan parallel waves and decide failure recovery.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the project file (TOML) holding components and tasks.
    ///
    /// Default: `Waveplan.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path(), global = true)]
    pub config: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WAVEPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print hazards, execution waves and the critical path.
    Plan,

    /// Check files modified by a task against its declared writes.
    Verify {
        /// Task whose write scope is checked.
        #[arg(long, value_name = "ID")]
        task: String,

        /// Files the task modified. Relative paths are resolved against the
        /// current directory.
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Decide how to recover from a task failure.
    Restart {
        /// The task that failed.
        #[arg(long, value_name = "ID")]
        failed: String,

        /// Tasks that have already completed (repeatable).
        #[arg(long, value_name = "ID")]
        completed: Vec<String>,

        /// Tasks currently in flight (repeatable).
        #[arg(long, value_name = "ID")]
        dispatched: Vec<String>,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
