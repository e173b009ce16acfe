//! Member data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Placeholder rendered for absent list fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Member role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "USER")]
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Case-sensitive: only `ADMIN` and `USER` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// Validated member record, the body of an update request.
///
/// There is no password field: edits through the admin table never
/// touch credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub name: String,
    pub email: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: String,
    #[serde(default)]
    pub role: Role,
}

/// Member as returned by the list endpoint; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl MemberSummary {
    /// Display cells in column order, absent or blank fields as `N/A`.
    pub fn cells(&self) -> [&str; 4] {
        fn cell(value: &Option<String>) -> &str {
            match value.as_deref() {
                Some(v) if !v.trim().is_empty() => v,
                _ => NOT_AVAILABLE,
            }
        }
        [
            cell(&self.name),
            cell(&self.email),
            cell(&self.phone_number),
            cell(&self.role),
        ]
    }

    /// Resource URL of this member inside `collection`, if it carries an id.
    pub fn resource_url(&self, collection: &str) -> Option<String> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("{}/{}", collection.trim_end_matches('/'), id))
    }

    /// Raw row values; absent fields become empty strings.
    pub fn to_row_values(&self) -> RowValues {
        RowValues {
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            phone_number: self.phone_number.clone().unwrap_or_default(),
            role: self.role.clone().unwrap_or_default(),
        }
    }
}

/// Editable fields of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    Name,
    Email,
    PhoneNumber,
    Role,
}

impl RowField {
    pub const ALL: [RowField; 4] = [
        RowField::Name,
        RowField::Email,
        RowField::PhoneNumber,
        RowField::Role,
    ];
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RowField::Name => "name",
            RowField::Email => "email",
            RowField::PhoneNumber => "phoneNumber",
            RowField::Role => "role",
        })
    }
}

/// The four text fields of a table row, as typed by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowValues {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub role: String,
}

impl RowValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            role: role.into(),
        }
    }

    pub fn get(&self, field: RowField) -> &str {
        match field {
            RowField::Name => &self.name,
            RowField::Email => &self.email,
            RowField::PhoneNumber => &self.phone_number,
            RowField::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: RowField, value: impl Into<String>) {
        let slot = match field {
            RowField::Name => &mut self.name,
            RowField::Email => &mut self.email,
            RowField::PhoneNumber => &mut self.phone_number,
            RowField::Role => &mut self.role,
        };
        *slot = value.into();
    }

    /// Copy with every field trimmed.
    pub fn trimmed(&self) -> RowValues {
        RowValues {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            role: self.role.trim().to_string(),
        }
    }
}

impl From<&MemberRecord> for RowValues {
    fn from(record: &MemberRecord) -> Self {
        RowValues {
            name: record.name.clone(),
            email: record.email.clone(),
            phone_number: record.phone_number.clone(),
            role: record.role.to_string(),
        }
    }
}
