use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Fields that may carry a validation error. `id`, `city` and `status` never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorField {
    Name,
    Email,
    Street,
    Zipcode,
    Phone,
}

impl ErrorField {
    pub const ALL: [ErrorField; 5] = [
        ErrorField::Name,
        ErrorField::Email,
        ErrorField::Street,
        ErrorField::Zipcode,
        ErrorField::Phone,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorField::Name => "name",
            ErrorField::Email => "email",
            ErrorField::Street => "street",
            ErrorField::Zipcode => "zipcode",
            ErrorField::Phone => "phone",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == key)
    }
}

impl fmt::Display for ErrorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

// Anything that is not "critical" gets the lighter marker.
impl From<String> for Severity {
    fn from(raw: String) -> Self {
        if raw == "critical" {
            Severity::Critical
        } else {
            Severity::Warning
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Severity::from(String::deserialize(deserializer)?))
    }
}

/// Record status. Unrecognized strings are kept verbatim so they round-trip
/// through export, and render with the neutral badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Pending,
    Active,
    Inactive,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Pending => "pending",
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Other(raw) => raw,
        }
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Status::Pending,
            "active" => Status::Active,
            "inactive" => Status::Inactive,
            _ => Status::Other(raw),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub zipcode: String,
    pub phone: String,
    pub status: Status,
    pub errors: BTreeMap<ErrorField, ValidationError>,
}

impl Record {
    pub fn value(&self, field: ErrorField) -> &str {
        match field {
            ErrorField::Name => &self.name,
            ErrorField::Email => &self.email,
            ErrorField::Street => &self.street,
            ErrorField::Zipcode => &self.zipcode,
            ErrorField::Phone => &self.phone,
        }
    }

    pub fn error(&self, field: ErrorField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }
}

/// Record as it arrives on the wire, before the error keys are checked.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub street: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub zipcode: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default)]
    pub errors: Option<HashMap<String, ValidationError>>,
}

impl TryFrom<RawRecord> for Record {
    type Error = AppError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let mut errors = BTreeMap::new();
        for (key, error) in raw.errors.unwrap_or_default() {
            let field = ErrorField::parse(&key).ok_or_else(|| AppError::UnknownErrorField {
                record_id: raw.id,
                field: key.clone(),
            })?;
            errors.insert(field, error);
        }

        Ok(Record {
            id: raw.id,
            name: raw.name,
            email: raw.email,
            street: raw.street,
            city: raw.city,
            zipcode: raw.zipcode,
            phone: raw.phone,
            status: Status::from(raw.status),
            errors,
        })
    }
}

// Text fields may arrive as `null`; treat them like missing ones.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body returned by the data endpoint.
#[derive(Debug, Deserialize)]
pub struct RecordsPayload {
    pub records: Vec<RawRecord>,
}
