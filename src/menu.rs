use crate::constants::{MENU_REFRESH_LABEL, MENU_TITLE};
use crate::errors::Result;
use crate::fetch::{fetch_all, Transport};
use crate::sheet::{set_headers, write_rows, Grid};
use log::info;

/// The actions a menu item can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RefreshSyllabus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn labels(&self) -> Vec<&'static str> {
        self.items.iter().map(|item| item.label).collect()
    }
}

/// Runs when the sheet is opened. Only builds the menu; nothing is fetched.
pub fn install_menu() -> Menu {
    Menu {
        title: MENU_TITLE,
        items: vec![MenuItem {
            label: MENU_REFRESH_LABEL,
            action: Action::RefreshSyllabus,
        }],
    }
}

/// Headers first, then the full fetch, then the body. Returns the rows written.
pub fn refresh_syllabus(
    transport: &impl Transport,
    grid: &mut impl Grid,
    origin: &str,
    sort: &str,
) -> Result<usize> {
    set_headers(grid)?;
    let subjects = fetch_all(transport, origin, sort)?;
    write_rows(grid, &subjects)
}

pub fn dispatch(
    action: Action,
    transport: &impl Transport,
    grid: &mut impl Grid,
    origin: &str,
    sort: &str,
) -> Result<()> {
    match action {
        Action::RefreshSyllabus => {
            let rows = refresh_syllabus(transport, grid, origin, sort)?;
            info!("syllabus refreshed: {} subjects", rows);
        }
    }
    Ok(())
}
