//! Smartsheet sheet payload (`GET /sheets/{sheetId}`), trimmed to the fields
//! row loading needs.

use pcfgen_types::{RawValue, Sheet};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct SheetPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub columns: Vec<SheetColumn>,
    #[serde(default)]
    pub rows: Vec<SheetRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetColumn {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetRow {
    #[serde(default)]
    pub cells: Vec<SheetCell>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetCell {
    #[serde(default)]
    pub column_id: Option<u64>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl SheetPayload {
    /// Cells are matched to columns by `columnId`; cells without one (or with
    /// an id no column declares) fall back to their position.
    pub fn into_sheet(self) -> Sheet {
        let positions: HashMap<u64, usize> = self
            .columns
            .iter()
            .enumerate()
            .filter_map(|(i, column)| column.id.map(|id| (id, i)))
            .collect();

        let mut sheet = Sheet::new(self.columns.into_iter().map(|c| c.title).collect());
        let width = sheet.columns.len();

        for row in self.rows {
            let mut values = vec![RawValue::Empty; width];
            for (position, cell) in row.cells.into_iter().enumerate() {
                let slot = cell
                    .column_id
                    .and_then(|id| positions.get(&id).copied())
                    .unwrap_or(position);
                if slot < width {
                    values[slot] = cell
                        .value
                        .as_ref()
                        .map(RawValue::from)
                        .unwrap_or_default();
                }
            }
            sheet.push_values(values);
        }

        sheet
    }
}
