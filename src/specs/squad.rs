// src/specs/squad.rs
//
// Squad table on a club overview page: one row per player, name in the
// second cell, market value in the right-aligned "hauptlink" cell.

use crate::config::consts::{
    CONTAINER_SELECTOR, MIN_ROW_CELLS, PLAYER_CELL, TABLE_SELECTOR, VALUE_CELL_SELECTOR,
};
use crate::core::html::{self, Compound, Element, Selector};
use crate::error::{Error, Result};

/// Extract `(player, market value text)` pairs in page row order.
///
/// Fails with `StructureNotFound` when the container or its table is
/// missing, which means the layout changed or the request was blocked.
pub fn extract(raw_html: &[u8]) -> Result<Vec<(String, String)>> {
    let doc = String::from_utf8_lossy(raw_html);

    let container = html::select(&doc, &Selector::parse(CONTAINER_SELECTOR))
        .ok_or(Error::StructureNotFound("container"))?;
    let table = container
        .find(&Compound::parse(TABLE_SELECTOR))
        .ok_or(Error::StructureNotFound("table"))?;

    let value_cell = Compound::parse(VALUE_CELL_SELECTOR);
    let rows = table.find_all("tr");

    let mut out = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    // First row is the header
    for row in rows.iter().skip(1) {
        match extract_row(row, &value_cell) {
            Some(pair) => out.push(pair),
            None => skipped += 1,
        }
    }

    logf!("Squad table: {} rows, {} players, {} skipped", rows.len(), out.len(), skipped);
    Ok(out)
}

fn extract_row(row: &Element<'_>, value_cell: &Compound) -> Option<(String, String)> {
    let cells = row.find_all("td");
    // Separators and nested inline rows
    if cells.len() < MIN_ROW_CELLS {
        return None;
    }

    let player = cells[PLAYER_CELL].find_all("a").first()?.text();
    let value = row.find(value_cell)?.text();

    if player.is_empty() || value.is_empty() {
        return None;
    }
    Some((player, value))
}
