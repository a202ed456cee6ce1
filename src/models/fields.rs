//! Field parsing and normalization shared by the record types

use chrono::NaiveDate;

use crate::error::{DomainError, DomainResult};

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> DomainResult<NaiveDate> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(trimmed.to_string()))
}

/// Trim a record name, rejecting blank input
pub fn normalize_name(entity_type: &'static str, name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyName { entity_type });
    }
    Ok(trimmed.to_string())
}

/// Names are unique within a table, compared case-insensitively
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
