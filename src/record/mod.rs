pub mod models;

use std::collections::HashSet;

use crate::error::AppError;
use models::{RawRecord, Record, RecordsPayload};

/// Ordered, read-only record sequence for a single review.
#[derive(Debug, Clone)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(records.len());
        for r in &records {
            if !seen.insert(r.id) {
                return Err(AppError::DuplicateRecordId(r.id));
            }
        }
        Ok(Self { records })
    }

    pub fn from_raw(raw: Vec<RawRecord>) -> Result<Self, AppError> {
        let records = raw
            .into_iter()
            .map(Record::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(records)
    }

    /// Parse a `{ "records": [...] }` document.
    pub fn from_json(body: &str) -> Result<Self, AppError> {
        let payload: RecordsPayload = serde_json::from_str(body)?;
        Self::from_raw(payload.records)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "records": [
            {"id": 2, "name": "Bob", "status": "pending", "errors": {}},
            {"id": 1, "name": "Ann", "status": "active", "errors": {}}
        ]
    }"#;

    #[test]
    fn test_from_json_keeps_input_order() {
        let set = RecordSet::from_json(SAMPLE).unwrap();
        let ids: Vec<i64> = set.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(set.get(1).unwrap().name, "Ann");
        assert!(set.get(3).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let body = r#"{"records": [{"id": 1}, {"id": 1}]}"#;
        assert!(matches!(
            RecordSet::from_json(body),
            Err(AppError::DuplicateRecordId(1))
        ));
    }

    #[test]
    fn test_malformed_body_is_json_error() {
        assert!(matches!(
            RecordSet::from_json("{\"rows\": []}"),
            Err(AppError::Json(_))
        ));
    }
}
