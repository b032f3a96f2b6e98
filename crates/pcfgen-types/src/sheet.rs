use serde_json::Value;
use std::fmt;

/// Raw cell value as delivered by a row source.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    /// Missing cell (null, absent column)
    #[default]
    Empty,
    /// Typed number from the source (spreadsheet APIs report numbers as floats)
    Number(f64),
    Text(String),
}

impl RawValue {
    pub fn text(value: impl Into<String>) -> Self {
        RawValue::Text(value.into())
    }

    /// Blank cells: missing, whitespace-only, or the literal `nan` in any case.
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Empty => true,
            RawValue::Number(n) => n.is_nan(),
            RawValue::Text(s) => {
                let trimmed = s.trim();
                trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
            }
        }
    }

    /// Textual form of a non-blank value.
    pub fn as_text(&self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        match self {
            RawValue::Empty => None,
            RawValue::Number(n) => Some(n.to_string()),
            RawValue::Text(s) => Some(s.clone()),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Empty => Ok(()),
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&Value> for RawValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => RawValue::Empty,
            Value::String(s) => RawValue::Text(s.clone()),
            // Integers keep every digit; only true floats go through f64
            Value::Number(n) if n.is_i64() || n.is_u64() => RawValue::Text(n.to_string()),
            Value::Number(n) => n.as_f64().map(RawValue::Number).unwrap_or_default(),
            Value::Bool(b) => RawValue::Text(b.to_string()),
            other => RawValue::Text(other.to_string()),
        }
    }
}

/// One input record: column name → raw value, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, RawValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<RawValue>) {
        self.cells.push((column.into(), value.into()));
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.push(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&RawValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Textual value of a column, empty when missing or blank.
    pub fn text_of(&self, column: &str) -> String {
        self.get(column)
            .and_then(RawValue::as_text)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Tabular input: ordered column titles plus rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row of positional values. Missing trailing values become
    /// [`RawValue::Empty`]; extra values beyond the header are dropped.
    pub fn push_values(&mut self, values: Vec<RawValue>) {
        let mut values = values.into_iter();
        let row = self
            .columns
            .iter()
            .map(|column| (column.clone(), values.next().unwrap_or_default()))
            .collect();
        self.rows.push(row);
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_values() {
        assert!(RawValue::Empty.is_blank());
        assert!(RawValue::text("").is_blank());
        assert!(RawValue::text("   ").is_blank());
        assert!(RawValue::text("NaN").is_blank());
        assert!(RawValue::text(" nan ").is_blank());
        assert!(RawValue::Number(f64::NAN).is_blank());
        assert!(!RawValue::text("Nancy").is_blank());
        assert!(!RawValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_number_text_drops_trailing_zero_fraction() {
        assert_eq!(RawValue::Number(12345.0).as_text().as_deref(), Some("12345"));
        assert_eq!(RawValue::Number(2.5).as_text().as_deref(), Some("2.5"));
    }

    #[test]
    fn test_from_json_value() {
        assert_eq!(RawValue::from(&json!(null)), RawValue::Empty);
        assert_eq!(RawValue::from(&json!("x")), RawValue::text("x"));
        assert_eq!(RawValue::from(&json!(60601)), RawValue::text("60601"));
        assert_eq!(RawValue::from(&json!(60601.0)), RawValue::Number(60601.0));
        assert_eq!(RawValue::from(&json!(true)), RawValue::text("true"));
    }

    #[test]
    fn test_row_lookup() {
        let row = Row::new().with("First Name", "Jane").with("Zip Code", 2134.0);
        assert_eq!(row.text_of("First Name"), "Jane");
        assert_eq!(row.text_of("Zip Code"), "2134");
        assert_eq!(row.text_of("Missing"), "");
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_sheet_pads_short_rows() {
        let mut sheet = Sheet::new(vec!["A".into(), "B".into()]);
        sheet.push_values(vec![RawValue::text("1")]);
        sheet.push_values(vec![
            RawValue::text("1"),
            RawValue::text("2"),
            RawValue::text("3"),
        ]);

        assert_eq!(sheet.rows[0].get("B"), Some(&RawValue::Empty));
        assert_eq!(sheet.rows[1].len(), 2);
        assert!(sheet.has_column("A"));
        assert!(!sheet.has_column("C"));
    }
}
