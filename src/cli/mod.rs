//! CLI argument parsing for lockrec.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lockrec: inspect and update file-backed lock records.
///
/// Every command takes the path of a record file. A missing file is created
/// as an unlocked record unless --no-create is given.
#[derive(Parser, Debug)]
#[command(name = "lockrec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Fail instead of creating a missing record file.
    #[arg(long, global = true)]
    pub no_create: bool,

    /// Read lock options from a YAML file.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Hold the advisory guard next to the record while the command runs.
    #[arg(long, global = true)]
    pub exclusive: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for lockrec.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the record as indented JSON.
    Show(PathArgs),

    /// Print "locked" or "unlocked".
    Status(PathArgs),

    /// Mark the record as locked and save it.
    Lock(LockArgs),

    /// Mark the record as unlocked and save it.
    Unlock(PathArgs),

    /// Stamp the record with the current time and save it.
    Touch(PathArgs),

    /// Replace the record with a fresh unlocked one.
    ///
    /// The existing file is not read, so this also recovers corrupt records.
    Reset(PathArgs),

    /// Metadata commands.
    ///
    /// List, read or write key/value metadata on the record.
    Meta(MetaCommand),
}

/// Arguments for commands that only need the record path.
#[derive(Parser, Debug)]
pub struct PathArgs {
    /// Path to the record file.
    pub path: PathBuf,
}

/// Arguments for the `lock` command.
#[derive(Parser, Debug)]
pub struct LockArgs {
    /// Path to the record file.
    pub path: PathBuf,

    /// Record `owner` (user@host) and `pid` metadata.
    #[arg(long)]
    pub stamp_owner: bool,
}

/// Metadata subcommand wrapper.
#[derive(Parser, Debug)]
pub struct MetaCommand {
    #[command(subcommand)]
    pub action: MetaAction,
}

/// Available metadata actions.
#[derive(Subcommand, Debug)]
pub enum MetaAction {
    /// Print every key and value.
    List(PathArgs),

    /// Print the value of one key.
    Get(MetaGetArgs),

    /// Set one key and save the record.
    Set(MetaSetArgs),
}

/// Arguments for the `meta get` command.
#[derive(Parser, Debug)]
pub struct MetaGetArgs {
    /// Path to the record file.
    pub path: PathBuf,

    /// Metadata key.
    pub key: String,
}

/// Arguments for the `meta set` command.
#[derive(Parser, Debug)]
pub struct MetaSetArgs {
    /// Path to the record file.
    pub path: PathBuf,

    /// Metadata key.
    pub key: String,

    /// Value stored as UTF-8 bytes.
    pub value: String,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
