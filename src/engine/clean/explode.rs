use crate::engine::core::Table;
use crate::engine::types::Scalar;
use tracing::debug;

/// Splits a raw cell into its list items. Bracketed text like `[a,b]`
/// yields one item per comma-separated entry; any other text is a
/// single-item list. Items are kept verbatim, quotes included.
fn listify(cell: &Scalar) -> Vec<Scalar> {
    match cell {
        Scalar::Utf8(raw) => raw
            .trim_matches(|c| c == '[' || c == ']')
            .split(',')
            .map(|item| Scalar::Utf8(item.to_string()))
            .collect(),
        other => vec![other.clone()],
    }
}

/// Expands rows whose cells hold list-like text into one row per item.
///
/// All cells in a row must agree on item count: a row pairing a two-item
/// list with a three-item list has no positional alignment, so the whole
/// row is dropped. Plain rows are one-item lists everywhere and pass
/// through unchanged.
pub fn explode_list_cells(table: Table) -> Table {
    let mut exploded = Table::new(table.header.clone());
    let mut dropped = 0usize;

    for row in &table.rows {
        let lists: Vec<Vec<Scalar>> = row.iter().map(listify).collect();
        let width = lists.first().map_or(0, Vec::len);

        if lists.iter().any(|items| items.len() != width) {
            dropped += 1;
            continue;
        }

        for position in 0..width {
            exploded.push_row(lists.iter().map(|items| items[position].clone()).collect());
        }
    }

    if dropped > 0 {
        debug!(target: "rollup::clean", dropped, "dropped rows with unaligned list lengths");
    }

    exploded
}
