//! Error types for finance-manager
//!
//! `DomainError` covers everything the aggregation engine and the session can
//! reject. `FinanceError` wraps it together with the configuration and I/O
//! failures that only the outer layers can hit.

use thiserror::Error;

/// Errors raised by the engine, the models and the session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Negative, non-finite or unparseable amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Label outside the fixed category set
    #[error("Unknown category: {0} (expected one of Food, Entertainment, Bills, Shopping, Miscellaneous)")]
    UnknownCategory(String),

    /// A percentage was requested against a zero denominator
    #[error("Cannot compute {what}: denominator is zero")]
    DivisionByZero { what: &'static str },

    /// Goal or investment name collision
    #[error("{entity_type} already exists: {name}")]
    DuplicateName {
        entity_type: &'static str,
        name: String,
    },

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("{entity_type} name cannot be empty")]
    EmptyName { entity_type: &'static str },

    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl DomainError {
    pub fn negative_amount(field: &str, amount: impl std::fmt::Display) -> Self {
        Self::InvalidAmount(format!("{} must not be negative (got {})", field, amount))
    }

    pub fn amount_overflow(a: impl std::fmt::Display, b: impl std::fmt::Display) -> Self {
        Self::InvalidAmount(format!("{} + {} is too large to represent", a, b))
    }

    pub fn duplicate_investment(name: impl Into<String>) -> Self {
        Self::DuplicateName {
            entity_type: "Investment",
            name: name.into(),
        }
    }

    pub fn goal_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: name.into(),
        }
    }

    pub fn investment_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Investment",
            identifier: name.into(),
        }
    }

    pub fn budget_not_found(category: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: category.into(),
        }
    }

    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }

    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Crate-level error type
#[derive(Error, Debug)]
pub enum FinanceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl FinanceError {
    /// The underlying domain error, if this is one
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type alias for everything else
pub type FinanceResult<T> = Result<T, FinanceError>;
