//! Command line surface

use clap::Parser;
use std::path::PathBuf;

/// Find files and directories whose names are invalid on NTFS, and
/// optionally rename them.
#[derive(Parser, Debug)]
#[command(name = "ntfs-namecheck")]
#[command(version)]
pub struct Cli {
    /// Path to recursively search for invalid names
    pub base_path: PathBuf,

    /// Substitute invalid characters with this string [default: _]
    #[arg(short = 's', long = "sub-string", visible_alias = "sub_string")]
    pub sub_string: Option<String>,

    /// Do not print scan events to stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Rename offending files and directories (default is to only list them)
    #[arg(short, long)]
    pub rename: bool,
}
