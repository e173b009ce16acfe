//! Field validation for edited member rows.
//!
//! Each check takes already trimmed input and returns the operator-facing
//! message on failure.

use std::fmt;

use crate::model::{MemberRecord, Role, RowValues};

/// Maximum name length in characters.
pub const NAME_MAX_LENGTH: usize = 25;
/// Minimum phone number length in digits.
pub const PHONE_MIN_DIGITS: usize = 10;
/// Maximum phone number length in digits.
pub const PHONE_MAX_DIGITS: usize = 12;

/// Switches between validator variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Treat an empty phone number as an error
    pub require_phone: bool,
}

/// Ordered, non-empty list of field errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Please fix the following errors:")?;
        for message in &self.0 {
            write!(f, "\n• {}", message)?;
        }
        Ok(())
    }
}

/// Checks a member name.
pub fn validate_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("Name is required.".to_string());
    }
    if name.chars().any(|c| c.is_ascii_digit()) {
        return Some("Name must not contain numbers.".to_string());
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        return Some(format!(
            "Name must be at most {} characters.",
            NAME_MAX_LENGTH
        ));
    }
    None
}

/// Checks an email address has the `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some("Email is required.".to_string());
    }
    if !is_email_shaped(email) {
        return Some("Please enter a valid email address.".to_string());
    }
    None
}

/// Checks a phone number. Empty passes unless `required` is set.
pub fn validate_phone(phone: &str, required: bool) -> Option<String> {
    if phone.is_empty() {
        return required.then(|| "Phone number is required.".to_string());
    }
    let digits_only = phone.chars().all(|c| c.is_ascii_digit());
    let len = phone.len();
    if !digits_only || !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&len) {
        return Some(format!(
            "Phone number must be {}-{} digits.",
            PHONE_MIN_DIGITS, PHONE_MAX_DIGITS
        ));
    }
    None
}

/// Checks a role is exactly `ADMIN` or `USER`.
pub fn validate_role(role: &str) -> Option<String> {
    if role.is_empty() {
        return Some("Role is required.".to_string());
    }
    if role.parse::<Role>().is_err() {
        return Some("Role must be either ADMIN or USER.".to_string());
    }
    None
}

/// Validates all four fields of a row.
///
/// Fields are trimmed first. Errors are collected in name, email, phone,
/// role order; on success the trimmed record is returned.
pub fn validate_row(
    values: &RowValues,
    policy: &ValidationPolicy,
) -> Result<MemberRecord, ValidationErrors> {
    let values = values.trimmed();

    let errors: Vec<String> = [
        validate_name(&values.name),
        validate_email(&values.email),
        validate_phone(&values.phone_number, policy.require_phone),
        validate_role(&values.role),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    let role = values
        .role
        .parse::<Role>()
        .map_err(|e| ValidationErrors(vec![e]))?;

    Ok(MemberRecord {
        name: values.name,
        email: values.email,
        phone_number: values.phone_number,
        role,
    })
}

fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
