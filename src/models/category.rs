//! Expense categories
//!
//! The category set is closed: every expense and budget limit is classified
//! with one of five labels, and anything else is rejected at parse time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A spending category
///
/// Ordering follows declaration order, which is also the display order used
/// by the reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Entertainment,
    Bills,
    Shopping,
    Miscellaneous,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Food,
        Self::Entertainment,
        Self::Bills,
        Self::Shopping,
        Self::Miscellaneous,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Shopping => "Shopping",
            Self::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    /// Case-insensitive match on the category name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownCategory(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" BILLS ".parse::<Category>().unwrap(), Category::Bills);
        assert_eq!(
            "Miscellaneous".parse::<Category>().unwrap(),
            Category::Miscellaneous
        );
    }

    #[test]
    fn test_unknown_category() {
        let err = "Rent".parse::<Category>().unwrap_err();
        assert_eq!(err, DomainError::UnknownCategory("Rent".into()));
    }

    #[test]
    fn test_display_round_trips() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_ordering_matches_declaration() {
        let mut shuffled = vec![Category::Shopping, Category::Food, Category::Bills];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Category::Food, Category::Bills, Category::Shopping]
        );
    }
}
