//! Row data handed to the renderer.
//!
//! A table is a sequence of [`DataSet`]s, one per row. Each row carries its own
//! ordered column names and the values aligned to them. Every row of a table is
//! expected to share the first row's column names and order; the renderer takes
//! its header from the first row and does not check the rest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value.
///
/// Values are opaque to the renderer: only their [`Display`](fmt::Display)
/// text is measured and printed. Text is printed as-is, without quotes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value, displayed as `null`.
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Unsigned(n) => write!(f, "{}", n),
            // keeps the fraction (`1.0`) and uses exponents for large values (`1e20`)
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n)
            .map(Value::Integer)
            .unwrap_or(Value::Unsigned(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

/// One row of a table: ordered column names and the values aligned to them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    column_names: Vec<String>,
    values: Vec<Value>,
}

impl DataSet {
    /// Create a row from column names and their aligned values.
    ///
    /// Both sequences are expected to have the same length.
    pub fn new<S, V>(
        column_names: impl IntoIterator<Item = S>,
        values: impl IntoIterator<Item = V>,
    ) -> Self
    where
        S: Into<String>,
        V: Into<Value>,
    {
        DataSet {
            column_names: column_names.into_iter().map(Into::into).collect(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Start building a row one named value at a time.
    pub fn builder() -> DataSetBuilder {
        DataSetBuilder::default()
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Look up a value by column name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.column_names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.values.get(i))
    }

    /// Number of columns in this row.
    pub fn len(&self) -> usize {
        self.column_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.column_names.is_empty()
    }
}

/// Builder for [`DataSet`].
#[derive(Clone, Debug, Default)]
pub struct DataSetBuilder {
    inner: DataSet,
}

impl DataSetBuilder {
    /// Append a column and its value.
    pub fn put(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inner.column_names.push(name.into());
        self.inner.values.push(value.into());
        self
    }

    pub fn build(self) -> DataSet {
        self.inner
    }
}
