// src/specs/rows.rs
//! Row Parser shared by every page on the dialogue site.
//!
//! Both the NPC listing and the per-NPC pages render one plain `<table>`: a
//! header row followed by data rows of `<td>` cells. This module reads the
//! *first* table of a document and returns the visible text of each data row.

use crate::core::html::{cell_text, data_cells, first_table, parse_document, table_rows};

/// Visible text of one data row, one entry per `<td>`.
pub type Row = Vec<String>;

/// Data rows of the first table in `doc`, header row dropped.
///
/// `None` means the document has no table at all. Callers decide whether
/// that is fatal (listing) or just "nothing here" (NPC page).
///
/// The first `<tr>` is always treated as the header, whatever its cells are.
/// Header cells are usually `<th>`, so only `<td>` cells are read.
pub fn parse_rows(doc: &str) -> Option<Vec<Row>> {
    let html = parse_document(doc);
    let table = first_table(&html)?;

    let rows = table_rows(table)
        .skip(1)
        .map(|tr| data_cells(tr).map(cell_text).collect())
        .collect();

    Some(rows)
}
