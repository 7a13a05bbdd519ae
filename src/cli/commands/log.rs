use crate::cli::parser::Commands;
use crate::db::initialize::open_store;
use crate::db::log::load_entries;
use crate::environment::{Backend, Environment};
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::table::visible_width;
use ansi_term::Colour;

const OP_MAX_WIDTH: usize = 40;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "submit" => Colour::Green,
        "token" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to `OP_MAX_WIDTH` columns; only the operation is colored.
fn op_cell(operation: &str, target: &str) -> String {
    let plain = if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    };

    let plain = if plain.chars().count() > OP_MAX_WIDTH {
        let mut s: String = plain.chars().take(OP_MAX_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    let color = color_for_operation(operation);
    match plain.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(plain.as_str()).to_string(),
    }
}

/// Handle the `log` command.
pub fn handle(cmd: &Commands, env: &Environment) -> AppResult<()> {
    if !matches!(cmd, Commands::Log { print: true }) {
        return Ok(());
    }

    let Backend::Remote { database, .. } = &env.backend else {
        warning("Demo mode: there is no document store log to print.");
        return Ok(());
    };

    let pool = open_store(database)?;
    let entries = load_entries(&pool.conn)?;

    if entries.is_empty() {
        info("The internal log is empty.");
        return Ok(());
    }

    let cells: Vec<String> = entries
        .iter()
        .map(|e| op_cell(&e.operation, &e.target))
        .collect();

    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);
    let op_w = cells.iter().map(|c| visible_width(c)).max().unwrap_or(10);

    println!("📜 Internal log:\n");

    for (entry, cell) in entries.iter().zip(&cells) {
        let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
            .map(|dt| dt.format("%FT%T%:z").to_string())
            .unwrap_or_else(|_| entry.date.clone());
        let padding = " ".repeat(op_w.saturating_sub(visible_width(cell)));

        println!(
            "{:>id_w$}: {} | {}{} => {}",
            entry.id, date, cell, padding, entry.message
        );
    }

    Ok(())
}
