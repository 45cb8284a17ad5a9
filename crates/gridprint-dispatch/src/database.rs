//! Table data sources.
//!
//! Commands read rows through the [`DatabaseManager`] trait. An unknown table
//! is not an error: it simply has no rows.
//!
//! [`MemoryDatabase`] is the bundled implementation. It can be filled in code
//! or loaded from a JSON document of the form:
//!
//! ```json
//! {
//!   "users": {
//!     "columns": ["id", "name"],
//!     "rows": [[1, "Bob"], [2, "Alice"]]
//!   },
//!   "empty": { "columns": ["id"], "rows": [] }
//! }
//! ```

use crate::error::LoadError;
use gridprint_render::{DataSet, Value};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

/// A source of table rows, looked up by table name.
pub trait DatabaseManager {
    /// Rows of the named table, in order. Empty when the table is unknown.
    fn table_data(&self, table: &str) -> Vec<DataSet>;

    /// Names of all known tables.
    fn table_names(&self) -> Vec<String>;
}

impl<T: DatabaseManager + ?Sized> DatabaseManager for &T {
    fn table_data(&self, table: &str) -> Vec<DataSet> {
        (**self).table_data(table)
    }

    fn table_names(&self) -> Vec<String> {
        (**self).table_names()
    }
}

impl<T: DatabaseManager + ?Sized> DatabaseManager for Rc<T> {
    fn table_data(&self, table: &str) -> Vec<DataSet> {
        (**self).table_data(table)
    }

    fn table_names(&self) -> Vec<String> {
        (**self).table_names()
    }
}

impl<T: DatabaseManager + ?Sized> DatabaseManager for Arc<T> {
    fn table_data(&self, table: &str) -> Vec<DataSet> {
        (**self).table_data(table)
    }

    fn table_names(&self) -> Vec<String> {
        (**self).table_names()
    }
}

/// In-memory tables keyed by name, listed in name order.
#[derive(Clone, Debug, Default)]
pub struct MemoryDatabase {
    tables: BTreeMap<String, Vec<DataSet>>,
}

#[derive(Deserialize)]
struct TableDocument {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a table.
    pub fn insert_table(&mut self, name: impl Into<String>, rows: Vec<DataSet>) {
        self.tables.insert(name.into(), rows);
    }

    /// Builder-style variant of [`insert_table`](Self::insert_table).
    pub fn with_table(mut self, name: impl Into<String>, rows: Vec<DataSet>) -> Self {
        self.insert_table(name, rows);
        self
    }

    /// Parse tables from a JSON document.
    ///
    /// Every row must have exactly one value per declared column.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let document: BTreeMap<String, TableDocument> = serde_json::from_str(json)?;

        let mut db = Self::new();
        for (name, table) in document {
            let mut rows = Vec::with_capacity(table.rows.len());
            for (index, values) in table.rows.into_iter().enumerate() {
                if values.len() != table.columns.len() {
                    return Err(LoadError::RowShape {
                        table: name,
                        row: index,
                        expected: table.columns.len(),
                        actual: values.len(),
                    });
                }
                rows.push(DataSet::new(table.columns.iter().cloned(), values));
            }
            tracing::trace!(table = %name, rows = rows.len(), "loaded table");
            db.insert_table(name, rows);
        }

        Ok(db)
    }

    /// Read and parse a JSON document from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "reading table document");
        Self::from_json_str(&json)
    }
}

impl DatabaseManager for MemoryDatabase {
    fn table_data(&self, table: &str) -> Vec<DataSet> {
        self.tables.get(table).cloned().unwrap_or_default()
    }

    fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }
}
