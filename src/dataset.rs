//! In-memory college cost dataset
//!
//! Built once at startup from the parsed file, then read-only for the life
//! of the process. Handlers share it behind an `Arc`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::parser::{self, Field};

/// Name token of the header row; never a real college.
pub const HEADER_NAME: &str = "College";

/// One row of the dataset.
///
/// JSON field names match the upstream wire format. `in_state == 0` means
/// the source cell was blank (no in-state tier), not a free tuition; cost
/// derivation falls back to the out-of-state figure in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeRecord {
    pub name: String,
    #[serde(rename = "in-state")]
    pub in_state: f64,
    #[serde(rename = "out-state")]
    pub out_state: f64,
    #[serde(rename = "room-and-board")]
    pub room_and_board: f64,
}

/// Read-only mapping from college name to its record.
#[derive(Debug, Default)]
pub struct Dataset {
    records: HashMap<String, CollegeRecord>,
}

impl Dataset {
    /// Parse raw dataset text and build the store.
    pub fn from_text(text: &str) -> Self {
        Self::from_rows(parser::parse(text))
    }

    /// Build the store from parsed rows.
    ///
    /// Malformed rows (wrong field count, non-numeric cost text, negative
    /// cost) are dropped. Duplicate names are last-write-wins. The header
    /// row and any empty-name entry are removed at the end.
    pub fn from_rows(rows: Vec<Vec<Field>>) -> Self {
        let mut records = HashMap::new();

        for row in rows {
            match build_record(row) {
                Some(record) => {
                    records.insert(record.name.clone(), record);
                }
                None => debug!("dropping malformed dataset row"),
            }
        }

        records.remove(HEADER_NAME);
        records.remove("");

        Self { records }
    }

    pub fn get(&self, name: &str) -> Option<&CollegeRecord> {
        self.records.get(name)
    }

    pub fn records(&self) -> &HashMap<String, CollegeRecord> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn build_record(row: Vec<Field>) -> Option<CollegeRecord> {
    if row.len() != 4 {
        return None;
    }

    let mut fields = row.into_iter();
    let name = match fields.next()? {
        Field::Text(s) => s,
        Field::Number(n) => n.to_string(),
    };
    let in_state = cost_field(fields.next()?)?;
    let out_state = cost_field(fields.next()?)?;
    let room_and_board = cost_field(fields.next()?)?;

    Some(CollegeRecord {
        name,
        in_state,
        out_state,
        room_and_board,
    })
}

/// A blank cell in a cost column means "no figure" and becomes 0. Any other
/// text, or a negative number, makes the row malformed.
fn cost_field(field: Field) -> Option<f64> {
    match field {
        Field::Number(n) if n >= 0.0 => Some(n),
        Field::Number(_) => None,
        Field::Text(s) if s.is_empty() => Some(0.0),
        Field::Text(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
College,In-state Tuition,Out-of-state Tuition,Room and Board
\"Springfield, State U\",1000,2000,500
Acme College,,15000,8000
";

    #[test]
    fn test_build_from_fixture() {
        let dataset = Dataset::from_text(FIXTURE);
        assert_eq!(dataset.len(), 2);

        let springfield = dataset.get("Springfield, State U").unwrap();
        assert_eq!(springfield.in_state, 1000.0);
        assert_eq!(springfield.out_state, 2000.0);
        assert_eq!(springfield.room_and_board, 500.0);
    }

    #[test]
    fn test_blank_tuition_becomes_zero() {
        let dataset = Dataset::from_text(FIXTURE);
        let acme = dataset.get("Acme College").unwrap();
        assert_eq!(acme.in_state, 0.0);
        assert_eq!(acme.out_state, 15000.0);
    }

    #[test]
    fn test_header_and_empty_keys_absent() {
        let dataset = Dataset::from_text(FIXTURE);
        assert!(dataset.get(HEADER_NAME).is_none());
        assert!(dataset.get("").is_none());
    }

    #[test]
    fn test_blank_lines_dropped() {
        let dataset = Dataset::from_text("College,a,b,c\n\nAcme College,1,2,3\n\n");
        assert_eq!(dataset.len(), 1);
        assert!(dataset.get("Acme College").is_some());
    }

    #[test]
    fn test_wrong_field_count_dropped() {
        let dataset = Dataset::from_text("Acme College,1,2\nOther College,1,2,3,4\n");
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_text_in_cost_column_dropped() {
        let dataset = Dataset::from_text("Acme College,n/a,2,3\n");
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_negative_cost_dropped() {
        let dataset = Dataset::from_text("Acme College,-5,2,3\n");
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        let dataset = Dataset::from_text("Acme College,1,2,3\nAcme College,9,8,7\n");
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.get("Acme College").unwrap().in_state, 9.0);
    }

    #[test]
    fn test_genuinely_zero_tuition_kept() {
        let dataset = Dataset::from_text("Free U,0,15000,8000\n");
        assert_eq!(dataset.get("Free U").unwrap().in_state, 0.0);
    }

    #[test]
    fn test_record_json_field_names() {
        let record = CollegeRecord {
            name: "Acme College".to_string(),
            in_state: 1.0,
            out_state: 2.0,
            room_and_board: 3.0,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("in-state").is_some());
        assert!(value.get("out-state").is_some());
        assert!(value.get("room-and-board").is_some());
    }
}
