use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// A due-date task calendar with a terminal UI.
#[derive(Debug, Parser)]
#[command(name = "tc", version, about)]
pub struct Cli {
    /// Data directory (defaults to discovering taskcal/ upward from the
    /// working directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a taskcal/ data directory with a sample task list
    Init,
    /// Print tasks and their due dates
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only tasks due on this calendar day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub on: Option<NaiveDate>,

    /// Only tasks whose title matches this regex
    #[arg(long, value_name = "REGEX")]
    pub find: Option<String>,
}
