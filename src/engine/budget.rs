//! Budget alerting

use std::collections::BTreeSet;

use crate::models::{BudgetLimit, Category, Money};

/// Categories whose spending is strictly above their limit
pub fn budget_alerts(budgets: &[BudgetLimit]) -> BTreeSet<Category> {
    budgets
        .iter()
        .filter(|b| b.is_exceeded())
        .map(|b| b.category)
        .collect()
}

pub fn budget_remaining(budget: &BudgetLimit) -> Money {
    budget.remaining()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn budget(category: Category, limit: i64, spent: i64) -> BudgetLimit {
        BudgetLimit::with_spent(category, Money::from_units(limit), Money::from_units(spent))
            .unwrap()
    }

    #[test]
    fn test_no_alerts_when_under_limit() {
        let budgets = vec![
            budget(Category::Food, 200, 180),
            budget(Category::Bills, 300, 290),
            budget(Category::Shopping, 250, 240),
        ];
        assert!(budget_alerts(&budgets).is_empty());
    }

    #[test]
    fn test_alert_when_over_limit() {
        let budgets = vec![budget(Category::Food, 200, 210)];
        assert_eq!(budget_alerts(&budgets), BTreeSet::from([Category::Food]));
    }

    #[test]
    fn test_spending_exactly_the_limit_does_not_alert() {
        let budgets = vec![budget(Category::Entertainment, 150, 150)];
        assert!(budget_alerts(&budgets).is_empty());
    }

    /// One budget row per category, limits and spending in whole units
    fn budgets_strategy() -> impl Strategy<Value = Vec<BudgetLimit>> {
        prop::collection::vec((0i64..1_000, 0i64..1_000), Category::ALL.len()).prop_map(
            |rows| {
                Category::ALL
                    .iter()
                    .zip(rows)
                    .map(|(category, (limit, spent))| budget(*category, limit, spent))
                    .collect()
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Raising `spent` never clears an alert
        #[test]
        fn prop_alerts_are_monotonic_in_spent(
            budgets in budgets_strategy(),
            steps in prop::collection::vec((0usize..5, 0i64..200), 1..40),
        ) {
            let mut budgets = budgets;
            let mut previous = budget_alerts(&budgets);
            for (idx, units) in steps {
                let row = &mut budgets[idx];
                row.spent = row.spent.checked_add(Money::from_units(units)).unwrap();
                let current = budget_alerts(&budgets);
                prop_assert!(previous.is_subset(&current));
                previous = current;
            }
        }

        /// A category alerts exactly when spending is strictly over its limit
        #[test]
        fn prop_alert_iff_over_limit(budgets in budgets_strategy()) {
            let alerts = budget_alerts(&budgets);
            for b in &budgets {
                prop_assert_eq!(alerts.contains(&b.category), b.spent > b.limit);
            }
        }
    }

    #[test]
    fn test_budget_remaining() {
        assert_eq!(
            budget_remaining(&budget(Category::Food, 200, 210)),
            Money::from_units(-10)
        );
    }
}
