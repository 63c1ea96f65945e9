use serde_json::Value;
use std::fmt::{self, Display};
use thiserror::Error;

/// Column name each raw row source must expose for country-of-origin.
pub const COUNTRY_COLUMN: &str = "country_origin";

/// Placeholder for rows whose country value is explicitly null. These rows
/// stay in the store and aggregate like any other country value.
pub const MISSING_COUNTRY: &str = "nan";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Mentor,
    Mentee,
}

impl Role {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Mentor" => Some(Self::Mentor),
            "Mentee" => Some(Self::Mentee),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mentor => "Mentor",
            Self::Mentee => "Mentee",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{role} row {index} is not an object exposing a '{COUNTRY_COLUMN}' column")]
    MissingCountryColumn { role: Role, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub role: Role,
    pub country: String,
}

/// The unified mentor-plus-mentee record set. Built once at startup and
/// read-only afterwards.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<PersonRecord>,
}

impl RecordStore {
    /// Tags every row of the first source Mentor and every row of the second
    /// Mentee, concatenates Mentors-then-Mentees, and trims each country
    /// string. A row with no country-of-origin column at all fails the whole
    /// build; no partial store is returned.
    pub fn build(mentor_rows: &[Value], mentee_rows: &[Value]) -> Result<Self, BuildError> {
        let mut records = Vec::with_capacity(mentor_rows.len() + mentee_rows.len());
        for (role, rows) in [(Role::Mentor, mentor_rows), (Role::Mentee, mentee_rows)] {
            for (index, row) in rows.iter().enumerate() {
                let value = row
                    .as_object()
                    .and_then(|row| row.get(COUNTRY_COLUMN))
                    .ok_or(BuildError::MissingCountryColumn { role, index })?;
                records.push(PersonRecord {
                    role,
                    country: coerce_country(value),
                });
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn coerce_country(value: &Value) -> String {
    match value {
        Value::Null => MISSING_COUNTRY.to_string(),
        Value::String(country) => country.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}
