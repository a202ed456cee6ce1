//! Portfolio valuation and allocation

use std::collections::BTreeMap;

use super::percentage;
use crate::error::{DomainError, DomainResult};
use crate::models::{Investment, Money};

/// Sum of current values
pub fn portfolio_total(investments: &[Investment]) -> DomainResult<Money> {
    Money::try_sum(investments.iter().map(|i| i.current_value))
}

/// Each holding's share of the portfolio value, keyed by name
///
/// An empty portfolio or one worth nothing has no allocation and yields
/// `DivisionByZero`. A total too large to represent yields `InvalidAmount`.
pub fn portfolio_allocation(investments: &[Investment]) -> DomainResult<BTreeMap<String, f64>> {
    const WHAT: &str = "portfolio allocation";

    let total = portfolio_total(investments)?;
    if total.is_zero() {
        return Err(DomainError::DivisionByZero { what: WHAT });
    }
    investments
        .iter()
        .map(|i| percentage(i.current_value, total, WHAT).map(|pct| (i.name.clone(), pct)))
        .collect()
}

pub fn investment_gain(investment: &Investment) -> Money {
    investment.current_value - investment.principal_amount
}

/// Gain relative to the principal, as a percentage
pub fn investment_return(investment: &Investment) -> DomainResult<f64> {
    percentage(
        investment_gain(investment),
        investment.principal_amount,
        "investment return",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn holding(name: &str, principal: i64, value: i64) -> Investment {
        Investment::with_value(
            name,
            Money::from_units(principal),
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            Money::from_units(value),
        )
        .unwrap()
    }

    fn scenario() -> Vec<Investment> {
        vec![
            holding("Stocks", 10000, 15000),
            holding("Bonds", 5000, 5500),
            holding("RealEstate", 20000, 21000),
        ]
    }

    #[test]
    fn test_portfolio_total() {
        assert_eq!(portfolio_total(&scenario()).unwrap(), Money::from_units(41500));
        assert!(portfolio_total(&[]).unwrap().is_zero());

        let huge = Money::parse("90000000000000000").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let whales = vec![
            Investment::new("A", huge, date).unwrap(),
            Investment::new("B", huge, date).unwrap(),
        ];
        assert!(portfolio_total(&whales).unwrap_err().is_invalid_amount());
        assert!(portfolio_allocation(&whales).unwrap_err().is_invalid_amount());
    }

    #[test]
    fn test_portfolio_allocation() {
        let allocation = portfolio_allocation(&scenario()).unwrap();
        assert_eq!(allocation.len(), 3);
        assert!((allocation["Stocks"] - 36.14).abs() < 0.01);
        assert!((allocation["Bonds"] - 13.25).abs() < 0.01);
        assert!((allocation["RealEstate"] - 50.60).abs() < 0.01);

        let sum: f64 = allocation.values().sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_allocation_needs_a_positive_total() {
        assert!(portfolio_allocation(&[]).unwrap_err().is_division_by_zero());
        let worthless = vec![holding("Startup", 1000, 0)];
        assert!(portfolio_allocation(&worthless)
            .unwrap_err()
            .is_division_by_zero());
    }

    #[test]
    fn test_gain_and_return() {
        let stocks = holding("Stocks", 10000, 15000);
        assert_eq!(investment_gain(&stocks), Money::from_units(5000));
        assert_eq!(investment_return(&stocks).unwrap(), 50.0);

        let loss = holding("Crypto", 1000, 750);
        assert_eq!(investment_return(&loss).unwrap(), -25.0);

        let gift = holding("Gift", 0, 100);
        assert!(investment_return(&gift).unwrap_err().is_division_by_zero());
    }

    fn portfolio_strategy() -> impl Strategy<Value = Vec<Investment>> {
        prop::collection::vec((0i64..10_000_000, 0i64..10_000_000), 1..25).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (principal, value))| {
                    Investment::with_value(
                        &format!("Holding {}", i),
                        Money::from_cents(principal),
                        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                        Money::from_cents(value),
                    )
                    .unwrap()
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Shares of a portfolio with positive value add up to 100
        #[test]
        fn prop_allocation_sums_to_one_hundred(investments in portfolio_strategy()) {
            let total = portfolio_total(&investments).unwrap();
            prop_assume!(total.is_positive());

            let allocation = portfolio_allocation(&investments).unwrap();
            prop_assert_eq!(allocation.len(), investments.len());
            for share in allocation.values() {
                prop_assert!((0.0..=100.0 + 1e-9).contains(share));
            }
            let sum: f64 = allocation.values().sum();
            prop_assert!((sum - 100.0).abs() < 1e-6, "sum was {}", sum);
        }

        /// The total is the sum of current values, never of principals
        #[test]
        fn prop_total_sums_current_values(investments in portfolio_strategy()) {
            let expected: i64 = investments.iter().map(|i| i.current_value.cents()).sum();
            prop_assert_eq!(portfolio_total(&investments).unwrap().cents(), expected);
        }
    }
}
