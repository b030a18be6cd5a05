pub mod csv;
pub mod detail;
pub mod html;
pub mod json;
pub mod terminal;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::record::RecordSet;
use crate::record::models::{ErrorField, Record, Severity, Status};

pub const TITLE: &str = "Data Review";
pub const SUBTITLE: &str = "Review and manage your customer data records";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Terminal,
    Json,
    Html,
}

impl ReportFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => ReportFormat::Json,
            "html" => ReportFormat::Html,
            _ => ReportFormat::Terminal,
        }
    }
}

/// Table and export columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Column {
    Id,
    Name,
    Email,
    Street,
    City,
    Zipcode,
    Phone,
    Status,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Id,
        Column::Name,
        Column::Email,
        Column::Street,
        Column::City,
        Column::Zipcode,
        Column::Phone,
        Column::Status,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Name => "Name",
            Column::Email => "Email",
            Column::Street => "Street",
            Column::City => "City",
            Column::Zipcode => "Zipcode",
            Column::Phone => "Phone",
            Column::Status => "Status",
        }
    }

    /// `None` for columns that never carry a validation error.
    pub fn error_field(self) -> Option<ErrorField> {
        match self {
            Column::Name => Some(ErrorField::Name),
            Column::Email => Some(ErrorField::Email),
            Column::Street => Some(ErrorField::Street),
            Column::Zipcode => Some(ErrorField::Zipcode),
            Column::Phone => Some(ErrorField::Phone),
            Column::Id | Column::City | Column::Status => None,
        }
    }

    /// Raw value, as exported.
    pub fn value(self, record: &Record) -> String {
        match self {
            Column::Id => record.id.to_string(),
            Column::City => record.city.clone(),
            Column::Status => record.status.to_string(),
            other => match other.error_field() {
                Some(field) => record.value(field).to_string(),
                None => String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Positive,
    Cautionary,
    Neutral,
}

impl BadgeStyle {
    pub fn for_status(status: &Status) -> Self {
        match status {
            Status::Active => BadgeStyle::Positive,
            Status::Pending => BadgeStyle::Cautionary,
            _ => BadgeStyle::Neutral,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            BadgeStyle::Positive => "badge badge-positive",
            BadgeStyle::Cautionary => "badge badge-cautionary",
            BadgeStyle::Neutral => "badge badge-neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub label: String,
    pub style: BadgeStyle,
}

impl Badge {
    pub fn status(status: &Status) -> Self {
        Self {
            label: status.to_string(),
            style: BadgeStyle::for_status(status),
        }
    }
}

/// Visual marker for an error-bearing cell.
pub fn marker_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "✖",
        Severity::Warning => "⚠",
    }
}

pub fn marker_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "marker-critical",
        Severity::Warning => "marker-warning",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Cell {
    fn plain(text: String) -> Self {
        Self {
            text,
            marker: None,
            message: None,
        }
    }

    fn field(record: &Record, field: ErrorField) -> Self {
        let value = record.value(field);
        let text = if value.is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        };
        match record.error(field) {
            Some(err) => Self {
                text,
                marker: Some(err.severity),
                message: Some(err.message.clone()),
            },
            None => Self::plain(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub id: i64,
    /// One cell per column before `Status`.
    pub cells: Vec<Cell>,
    pub status: Badge,
}

impl Row {
    pub fn build(record: &Record) -> Self {
        let cells = Column::ALL
            .iter()
            .filter(|c| **c != Column::Status)
            .map(|c| match c.error_field() {
                Some(field) => Cell::field(record, field),
                None => Cell::plain(c.value(record)),
            })
            .collect();

        Self {
            id: record.id,
            cells,
            status: Badge::status(&record.status),
        }
    }

    pub fn has_markers(&self) -> bool {
        self.cells.iter().any(|c| c.marker.is_some())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewHeader {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub last_updated: String,
    pub record_count: usize,
}

impl ReviewHeader {
    pub fn new(record_count: usize, last_updated: DateTime<Local>) -> Self {
        Self {
            title: TITLE,
            subtitle: SUBTITLE,
            last_updated: last_updated.format("%b %-d, %Y, %I:%M %p").to_string(),
            record_count,
        }
    }
}

/// Error-annotated table over a record sequence. Holds no selection state.
#[derive(Debug, Serialize)]
pub struct TableView<'a> {
    pub header: ReviewHeader,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Row>,
    #[serde(skip)]
    records: &'a [Record],
}

impl<'a> TableView<'a> {
    pub fn build(records: &'a RecordSet) -> Self {
        Self::build_at(records, Local::now())
    }

    pub fn build_at(records: &'a RecordSet, last_updated: DateTime<Local>) -> Self {
        Self {
            header: ReviewHeader::new(records.len(), last_updated),
            columns: Column::ALL.iter().map(|c| c.label()).collect(),
            rows: records.records().iter().map(Row::build).collect(),
            records: records.records(),
        }
    }

    /// Row activation: hand the record to `on_activate`. Returns false for an unknown id.
    pub fn activate<F>(&self, id: i64, on_activate: F) -> bool
    where
        F: FnOnce(&'a Record),
    {
        match self.records.iter().find(|r| r.id == id) {
            Some(record) => {
                on_activate(record);
                true
            }
            None => false,
        }
    }

    pub fn render(&self, format: ReportFormat) -> anyhow::Result<String> {
        match format {
            ReportFormat::Terminal => terminal::render(self),
            ReportFormat::Json => json::render(self),
            ReportFormat::Html => html::render(self),
        }
    }
}
