// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Data table argument of a step.

use std::{collections::HashMap, fmt};

use itertools::Itertools as _;

use crate::{error::Result, event::Event, walker::Visitor};

use super::Accept;

/// Data table of a step, the first row being its header.
///
/// ```rust
/// # use cucumber_walker::ast::DataTable;
/// let table = DataTable::from(vec![
///     vec!["name", "age"],
///     vec!["Alice", "30"],
///     vec!["Bob", "25"],
/// ]);
///
/// let hashes = table.hashes();
/// assert_eq!(hashes[0].get("name"), Some(&"Alice".to_owned()));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DataTable {
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Creates a new [`DataTable`] out of its raw rows.
    #[must_use]
    pub const fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// All rows, header included.
    #[must_use]
    pub fn raw(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Header row, if any.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows without the header.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Number of columns of the header row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.header().map_or(0, <[_]>::len)
    }

    /// Whether this [`DataTable`] has no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Converts the rows into maps keyed by the header cells.
    #[must_use]
    pub fn hashes(&self) -> Vec<HashMap<String, String>> {
        let Some(header) = self.header() else {
            return Vec::new();
        };
        self.rows()
            .iter()
            .map(|row| header.iter().cloned().zip(row.iter().cloned()).collect())
            .collect()
    }

    /// Converts a two-column table into a map, the first column being keys.
    ///
    /// Returns [`None`] if any row doesn't have exactly two cells.
    #[must_use]
    pub fn rows_hash(&self) -> Option<HashMap<String, String>> {
        self.rows
            .iter()
            .map(|row| match row.as_slice() {
                [k, v] => Some((k.clone(), v.clone())),
                _ => None,
            })
            .collect()
    }

    /// Returns a transposed copy: rows become columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let width = self.width();
        let mut transposed = vec![Vec::with_capacity(self.rows.len()); width];
        for row in &self.rows {
            for (column, cell) in row.iter().take(width).enumerate() {
                transposed[column].push(cell.clone());
            }
        }
        Self::new(transposed)
    }
}

impl<S: Into<String>> From<Vec<Vec<S>>> for DataTable {
    fn from(rows: Vec<Vec<S>>) -> Self {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

impl fmt::Display for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "| {} |", row.iter().format(" | "))?;
        }
        Ok(())
    }
}

impl Accept for DataTable {
    /// Brackets the whole table, then each row, emitting every cell value as
    /// an atomic event.
    fn accept(&self, visitor: &mut dyn Visitor) -> Result<()> {
        visitor.broadcast(Event::Table(self), &mut |visitor| {
            for (index, cells) in self.rows.iter().enumerate() {
                visitor.broadcast(
                    Event::TableRow {
                        index,
                        cells: cells.as_slice(),
                    },
                    &mut |visitor| {
                        for (column, value) in cells.iter().enumerate() {
                            visitor.notify(Event::TableCellValue {
                                column,
                                value: value.as_str(),
                            })?;
                        }
                        Ok(())
                    },
                )?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DataTable {
        DataTable::from(vec![
            vec!["name", "age", "city"],
            vec!["Alice", "30", "NYC"],
            vec!["Bob", "25", "LA"],
        ])
    }

    #[test]
    fn header_and_rows() {
        let table = table();
        assert_eq!(table.header().map(<[_]>::len), Some(3));
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.raw().len(), 3);
        assert_eq!(table.width(), 3);

        let empty = DataTable::default();
        assert!(empty.is_empty());
        assert!(empty.header().is_none());
        assert!(empty.rows().is_empty());
        assert!(empty.hashes().is_empty());
    }

    #[test]
    fn hashes_use_header_as_keys() {
        let hashes = table().hashes();
        assert_eq!(hashes.len(), 2);
        assert_eq!(hashes[1].get("city").map(String::as_str), Some("LA"));
    }

    #[test]
    fn rows_hash_requires_two_columns() {
        let settings =
            DataTable::from(vec![vec!["timeout", "30"], vec!["retries", "3"]]);
        let hash = settings.rows_hash().expect("two columns");
        assert_eq!(hash.get("retries").map(String::as_str), Some("3"));

        assert!(table().rows_hash().is_none());
    }

    #[test]
    fn transposes() {
        let transposed = DataTable::from(vec![
            vec!["name", "Alice", "Bob"],
            vec!["age", "30", "25"],
        ])
        .transpose();
        assert_eq!(transposed.raw()[0], ["name", "age"]);
        assert_eq!(transposed.raw()[2], ["Bob", "25"]);
    }

    #[test]
    fn displays_as_gherkin() {
        let table = DataTable::from(vec![vec!["a", "b"], vec!["1", "2"]]);
        assert_eq!(table.to_string(), "| a | b |\n| 1 | 2 |\n");
    }
}
