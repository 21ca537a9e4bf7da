//! Raw lead records as delivered by a source reader.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Normalize a header cell: strip a leading byte-order mark and surrounding
/// whitespace, then lowercase.
pub fn normalize_column_name(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// A single non-null cell value.
///
/// CSV input only ever yields `Text`; the other variants exist for typed
/// sources such as JSON exports, where a spreadsheet column may have been
/// coerced to numbers or booleans.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// The cell as text, or `None` if it holds any other kind.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The cell read as a phone number.
    ///
    /// Text is returned trimmed. Integral numbers are rendered as plain
    /// digits, since spreadsheets routinely store phone columns as numbers.
    /// Anything else is not a phone.
    pub fn as_phone_text(&self) -> Option<Cow<'_, str>> {
        match self {
            CellValue::Text(s) => Some(Cow::Borrowed(s.trim())),
            CellValue::Integer(n) if *n >= 0 => Some(Cow::Owned(n.to_string())),
            CellValue::Float(f) if f.is_finite() && *f >= 0.0 && f.fract() == 0.0 => {
                Some(Cow::Owned(format!("{:.0}", f)))
            }
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{:.0}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// One input row, keyed by normalized column name.
///
/// Absent cells are simply not present in the map. When two header columns
/// normalize to the same name, the first one wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    cells: HashMap<String, CellValue>,
}

impl RawRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<CellValue>,
    {
        let mut record = Self::new();
        for (column, value) in pairs {
            record.insert(column, value);
        }
        record
    }

    /// Build a record from a JSON object. Nulls, arrays and nested objects
    /// are treated as absent.
    pub fn from_json(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let mut record = Self::new();
        for (column, value) in object {
            let cell = match value {
                serde_json::Value::String(s) => CellValue::Text(s.clone()),
                serde_json::Value::Bool(b) => CellValue::Bool(*b),
                serde_json::Value::Number(n) => match n.as_i64() {
                    Some(i) => CellValue::Integer(i),
                    None => match n.as_f64() {
                        Some(f) => CellValue::Float(f),
                        None => continue,
                    },
                },
                _ => continue,
            };
            record.insert(column, cell);
        }
        record
    }

    /// Insert a cell under the normalized column name. An existing cell for
    /// the same normalized name is kept.
    pub fn insert(&mut self, column: impl AsRef<str>, value: impl Into<CellValue>) {
        self.cells
            .entry(normalize_column_name(column.as_ref()))
            .or_insert_with(|| value.into());
    }

    /// Look up a cell by normalized column name.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Look up a text cell. Non-text cells are reported as absent.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(CellValue::as_text)
    }

    /// Number of present cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the record has no present cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
