//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `export`: Write the spreadsheet artifact and print the run report
//! - `check`: Run the same pipeline without writing; fail on missing keys
//! - `init`: Initialize langsheet configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }

    pub fn format(&self) -> ReportFormat {
        match &self.command {
            Some(Command::Export(cmd)) => cmd.common.format,
            Some(Command::Check(cmd)) => cmd.common.format,
            Some(Command::Init) | None => ReportFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Common arguments shared by `export` and `check`.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Android project (or module) directory
    pub project: PathBuf,

    /// Additional resource file to export (repeatable)
    #[arg(long = "file", value_name = "NAME")]
    pub files: Vec<String>,

    /// Resource name to leave out of the export (repeatable)
    #[arg(long = "ignore", value_name = "KEY")]
    pub ignored_keys: Vec<String>,

    /// Report output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file (default: exported_strings_<timestamp>.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export string resources of every locale into a spreadsheet
    Export(ExportCommand),
    /// Report missing translations without writing anything
    Check(CheckCommand),
    /// Initialize a new .langsheetrc.json configuration file
    Init,
}
