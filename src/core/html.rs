// src/core/html.rs
// Thin helpers over `scraper`. The HTML5 tree builder supplies omitted end tags
// and decodes the full named-entity set, so callers only walk elements.
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("invalid selector: table"));
static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("invalid selector: tr"));
static DATA_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("invalid selector: td"));

/// Parse a whole page. Never fails; malformed markup is repaired the way a browser would.
pub fn parse_document(doc: &str) -> Html {
    Html::parse_document(doc)
}

/// The first `<table>` of the document, in document order.
pub fn first_table(html: &Html) -> Option<ElementRef<'_>> {
    html.select(&TABLE).next()
}

/// Every `<tr>` under `table`, including those the parser moved into an implied `<tbody>`.
pub fn table_rows<'a>(table: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    table.select(&ROW)
}

/// The `<td>` cells of one row. `<th>` cells are skipped.
pub fn data_cells<'a>(row: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    row.select(&DATA_CELL)
}

/// Visible text of an element: nested tags dropped, entities decoded, trimmed.
pub fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Text of the first element matching `selector`, or `None`.
pub fn first_text(html: &Html, selector: &Selector) -> Option<String> {
    html.select(selector).next().map(cell_text)
}
