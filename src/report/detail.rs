//! Detail view content for a single record: the fields, the composed
//! address, the status badge and, when the record has any, its error summary.

use comfy_table::{Cell, Table};
use serde::Serialize;

use super::terminal::marked_cell;
use super::Badge;
use crate::record::models::{ErrorField, Record, Severity};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEntry {
    pub field: ErrorField,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub status: Badge,
    /// Ordered by field (name, email, street, zipcode, phone).
    pub errors: Vec<ErrorEntry>,
}

impl DetailView {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            email: or_dash(&record.email),
            address: compose_address(&record.street, &record.city, &record.zipcode),
            phone: or_dash(&record.phone),
            status: Badge::status(&record.status),
            errors: record
                .errors
                .iter()
                .map(|(field, err)| ErrorEntry {
                    field: *field,
                    severity: err.severity,
                    message: err.message.clone(),
                })
                .collect(),
        }
    }

    pub fn render_terminal(&self) -> String {
        let mut output = String::new();

        let title = if self.name.is_empty() { "-" } else { &self.name };
        output.push_str(&format!("=== Record Details: {title} ===\n"));
        output.push_str(&format!("ID:      {}\n", self.id));
        output.push_str(&format!("Email:   {}\n", self.email));
        output.push_str(&format!("Address: {}\n", self.address));
        output.push_str(&format!("Phone:   {}\n", self.phone));
        output.push_str(&format!("Status:  [{}]\n", self.status.label));

        if !self.errors.is_empty() {
            output.push_str("\n--- Error Summary ---\n");
            let mut table = Table::new();
            table.set_header(vec!["Field", "Severity", "Message"]);
            for entry in &self.errors {
                table.add_row(vec![
                    Cell::new(entry.field),
                    marked_cell(entry.severity.as_str(), entry.severity),
                    Cell::new(&entry.message),
                ]);
            }
            output.push_str(&table.to_string());
            output.push('\n');
        }

        output
    }
}

/// Street, then "city, zipcode", skipping whichever parts are empty.
pub fn compose_address(street: &str, city: &str, zipcode: &str) -> String {
    let locality = [city, zipcode]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    let parts: Vec<&str> = [street, locality.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordSet;
    use crate::report::BadgeStyle;
    use crate::report::tests::sample_set;

    #[test]
    fn test_compose_address() {
        assert_eq!(compose_address("1 Elm St", "Boston", "02108"), "1 Elm St, Boston, 02108");
        assert_eq!(compose_address("", "NYC", ""), "NYC");
        assert_eq!(compose_address("1 Elm St", "", "02108"), "1 Elm St, 02108");
        assert_eq!(compose_address("", "", ""), "-");
    }

    #[test]
    fn test_error_summary_lists_single_entry() {
        let set = RecordSet::from_json(
            r#"{"records": [{"id": 5, "name": "Eve", "email": "eve@", "status": "active",
                "errors": {"email": {"message": "invalid format", "severity": "critical"}}}]}"#,
        )
        .unwrap();
        let detail = DetailView::from_record(set.get(5).unwrap());
        assert_eq!(
            detail.errors,
            vec![ErrorEntry {
                field: ErrorField::Email,
                severity: Severity::Critical,
                message: "invalid format".into(),
            }]
        );

        let out = detail.render_terminal();
        assert!(out.contains("Error Summary"));
        assert!(out.contains("invalid format"));
    }

    #[test]
    fn test_no_summary_without_errors() {
        let set = sample_set();
        let detail = DetailView::from_record(set.get(1).unwrap());
        assert!(detail.errors.is_empty());
        assert_eq!(detail.address, "NYC");
        assert_eq!(detail.phone, "-");
        assert_eq!(detail.status.style, BadgeStyle::Positive);
        assert!(!detail.render_terminal().contains("Error Summary"));
    }

    #[test]
    fn test_errors_follow_field_order() {
        let set = sample_set();
        let detail = DetailView::from_record(set.get(2).unwrap());
        let fields: Vec<ErrorField> = detail.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![ErrorField::Email, ErrorField::Phone]);
        assert_eq!(detail.errors[1].severity, Severity::Warning);
    }
}
