use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use grocr::error::{GrocrError, Result};
use grocr::list::GroceryListStore;
use grocr::model::{DraftField, GroceryItem, ItemStatus};
use grocr::store::fs::FileSlot;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut store = GroceryListStore::load(FileSlot::new(data_dir(&cli)?));

    match cli.command {
        Some(Commands::Add {
            name,
            amount,
            note,
            status,
        }) => handle_add(&mut store, name, amount, note, status),
        Some(Commands::Edit {
            id,
            name,
            amount,
            note,
            status,
        }) => handle_edit(&mut store, id, name, amount, note, status),
        Some(Commands::Delete { id }) => handle_delete(&mut store, id),
        Some(Commands::Clear) => handle_clear(&mut store),
        Some(Commands::List) | None => {
            print_items(store.items());
            Ok(())
        }
    }
}

/// Storage root resolution: --dir beats $GROCR_HOME beats the platform
/// data dir.
fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if let Ok(home) = std::env::var("GROCR_HOME") {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "grocr", "grocr")
        .ok_or_else(|| GrocrError::Slot("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_add(
    store: &mut GroceryListStore<FileSlot>,
    name: String,
    amount: String,
    note: String,
    status: String,
) -> Result<()> {
    validate_status(&status)?;
    store.update_draft_field(DraftField::Name, &name);
    store.update_draft_field(DraftField::Amount, &amount);
    store.update_draft_field(DraftField::Note, &note);
    store.update_draft_field(DraftField::Status, &status);
    store.submit()?;

    let item = store.items().last().expect("just added");
    println!("{}", format!("Added ({}): {}", item.id, item.name).green());
    Ok(())
}

fn handle_edit(
    store: &mut GroceryListStore<FileSlot>,
    id: u64,
    name: Option<String>,
    amount: Option<String>,
    note: Option<String>,
    status: Option<String>,
) -> Result<()> {
    if let Some(s) = &status {
        validate_status(s)?;
    }
    if !store.start_edit(id) {
        println!("{}", format!("No item with id {}.", id).yellow());
        return Ok(());
    }

    if let Some(v) = name {
        store.update_draft_field(DraftField::Name, &v);
    }
    if let Some(v) = amount {
        store.update_draft_field(DraftField::Amount, &v);
    }
    if let Some(v) = note {
        store.update_draft_field(DraftField::Note, &v);
    }
    if let Some(v) = status {
        store.update_draft_field(DraftField::Status, &v);
    }
    store.submit()?;

    let item = store.get(id).expect("edited in place");
    println!("{}", format!("Updated ({}): {}", item.id, item.name).green());
    Ok(())
}

fn handle_delete(store: &mut GroceryListStore<FileSlot>, id: u64) -> Result<()> {
    if store.delete(id)? {
        println!("{}", format!("Deleted ({}).", id).green());
    } else {
        println!("{}", format!("No item with id {}.", id).yellow());
    }
    Ok(())
}

fn handle_clear(store: &mut GroceryListStore<FileSlot>) -> Result<()> {
    store.clear()?;
    println!("{}", "Grocery list cleared.".green());
    Ok(())
}

fn validate_status(raw: &str) -> Result<()> {
    raw.parse::<ItemStatus>()
        .map(|_| ())
        .map_err(GrocrError::Api)
}

const HEADERS: [&str; 5] = ["Id", "Name", "Amount", "Note", "Status"];

fn print_items(items: &[GroceryItem]) {
    if items.is_empty() {
        println!("No items in the grocery list.");
        return;
    }

    let rows: Vec<[String; 5]> = items
        .iter()
        .map(|i| {
            [
                i.id.to_string(),
                i.name.clone(),
                format_amount(i.amount),
                i.note.clone(),
                i.status.to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = HEADERS.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    print_row(&HEADERS.map(str::to_string), &widths, true);
    for row in &rows {
        print_row(row, &widths, false);
    }
}

const STATUS_COL: usize = 4;

fn print_row(cells: &[String; 5], widths: &[usize; 5], header: bool) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        let padding = width.saturating_sub(cell.width());
        if i > 0 {
            line.push_str("  ");
        }
        let styled = if header {
            cell.bold()
        } else if i == STATUS_COL && cell == "purchased" {
            cell.green()
        } else if i == STATUS_COL {
            cell.yellow()
        } else {
            cell.normal()
        };
        line.push_str(&styled.to_string());
        line.push_str(&" ".repeat(padding));
    }
    println!("{}", line.trim_end());
}

/// Whole amounts print without a trailing `.0`; the number input the list
/// grew up with produced integers almost always.
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}
