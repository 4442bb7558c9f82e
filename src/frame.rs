use std::collections::HashMap;

/// One CSV entry as read out of a source archive: the header row plus every
/// data row, in file order.
#[derive(Debug)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Unified record set: every row from every archive, aligned to the union of
/// all source headers. `None` marks a cell the source table did not carry
/// (column absent from that table, or a ragged row that ended early).
#[derive(Debug)]
pub struct Frame {
    /// Union of source headers, first-seen order.
    pub columns: Vec<String>,
    /// One entry per source row, same length as `columns`.
    pub rows: Vec<Vec<Option<String>>>,
}

impl Frame {
    /// Concatenate `tables` in order. No deduplication, no sorting: row order
    /// is table order, then row order within each table.
    pub fn from_tables(tables: Vec<RawTable>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<Vec<Option<String>>> = Vec::new();

        for table in tables {
            // Map each of this table's headers onto the union, extending it
            // with columns we have not seen before.
            let positions: Vec<usize> = table
                .headers
                .iter()
                .map(|header| {
                    *index.entry(header.clone()).or_insert_with(|| {
                        columns.push(header.clone());
                        columns.len() - 1
                    })
                })
                .collect();

            for row in table.rows {
                let mut unified = vec![None; columns.len()];
                for (i, value) in row.into_iter().enumerate() {
                    // Fields past the header width have no column; drop them.
                    if let Some(&pos) = positions.get(i) {
                        unified[pos] = Some(value);
                    }
                }
                rows.push(unified);
            }
        }

        // Rows pushed before the union reached its final width are short.
        let width = columns.len();
        for row in &mut rows {
            row.resize(width, None);
        }

        Frame { columns, rows }
    }

    /// Position of `name` in the unified column set, if any table carried it.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}
