use crate::constants::{API_ORIGIN, SHEET_PATH, SORT};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
/// Copy the ZEN University syllabus catalog into a spreadsheet
pub struct Args {
    /// Action to run. Defaults to opening the menu.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Sheet to write (CSV)
    #[arg(default_value = SHEET_PATH)]
    #[arg(long, global = true)]
    pub sheet: String,

    /// Syllabus API origin
    #[arg(default_value = API_ORIGIN)]
    #[arg(long, env = "ZEN_SYLLABUS_ORIGIN", global = true)]
    pub origin: String,

    /// Sort directive passed to the search endpoint
    #[arg(default_value = SORT)]
    #[arg(long, global = true)]
    pub sort: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Install the menu and pick an action from it
    Menu,
    /// Fetch the latest syllabus and rewrite the sheet
    Refresh,
}
