use anyhow::{Context, Result};
use args::{Args, Command};
use dialoguer::Select;
use fetch::HttpTransport;
use menu::{dispatch, install_menu, Action};
use sheet::CsvSheet;
use std::io::IsTerminal;

pub mod api;
pub mod args;
pub mod constants;
pub mod errors;
pub mod fetch;
pub mod logging;
pub mod menu;
pub mod sheet;
pub mod utils;

pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Refresh) => run_action(Action::RefreshSyllabus, &args),
        Some(Command::Menu) | None => open_menu(&args),
    }
}

fn run_action(action: Action, args: &Args) -> Result<()> {
    let transport = HttpTransport::new()?;
    let mut sheet =
        CsvSheet::open(&args.sheet).with_context(|| format!("opening sheet {}", args.sheet))?;
    dispatch(action, &transport, &mut sheet, &args.origin, &args.sort)
        .with_context(|| format!("{:?} into {}", action, sheet.path().display()))
}

fn open_menu(args: &Args) -> Result<()> {
    let menu = install_menu();
    let labels = menu.labels();

    if !std::io::stdin().is_terminal() {
        println!("{}", menu.title);
        for label in &labels {
            println!("  {}", label);
        }
        return Ok(());
    }

    let selection = Select::new()
        .with_prompt(menu.title)
        .items(&labels)
        .default(0)
        .interact_opt()?;
    match selection {
        Some(index) => run_action(menu.items[index].action, args),
        None => Ok(()),
    }
}
