use crate::dom::DomElement;
use crate::results::TableRecord;

/// Extracts every table as row-major cell text.
///
/// Rows and cells are gathered from all descendants, so a nested table adds
/// its rows to the enclosing table and is also reported on its own.
pub fn extract<'a, E: DomElement<'a>>(root: E) -> Vec<TableRecord> {
    let tables: Vec<TableRecord> = root
        .find_all(&["table"])
        .into_iter()
        .map(|table| TableRecord {
            rows: table
                .find_all(&["tr"])
                .into_iter()
                .map(|row| {
                    row.find_all(&["th", "td"])
                        .into_iter()
                        .map(|cell| cell.text_content())
                        .collect::<Vec<String>>()
                })
                .collect(),
        })
        .collect();

    ::log::debug!("Table extraction found {} tables", tables.len());
    tables
}
