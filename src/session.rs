//! Per-session state
//!
//! A `Session` owns the four record tables for one user and is the only way
//! the presentation layer changes them. Every mutation validates first, so a
//! rejected call leaves the tables exactly as they were.

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{DomainError, DomainResult};
use crate::models::{
    names_match, BudgetLimit, Category, Expense, FinancialGoal, Investment, Money,
};
use crate::reports::{Report, View};
use crate::sample;

#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    /// Reference date for deadline-based figures
    as_of: NaiveDate,
    expenses: Vec<Expense>,
    budgets: Vec<BudgetLimit>,
    goals: Vec<FinancialGoal>,
    investments: Vec<Investment>,
}

impl Session {
    /// An empty session
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            as_of: Local::now().date_naive(),
            expenses: Vec::new(),
            budgets: Vec::new(),
            goals: Vec::new(),
            investments: Vec::new(),
        }
    }

    /// A session pre-filled with the demo tables
    ///
    /// The expense generator is seeded from `settings.sample.seed` when set.
    pub fn with_sample_data(settings: Settings) -> DomainResult<Self> {
        let mut rng = match settings.sample.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut session = Self::new(settings);
        session.expenses = sample::expenses(
            &mut rng,
            session.settings.sample.expense_count,
            session.settings.sample.start_date,
        )?;
        session.budgets = sample::budgets()?;
        session.goals = sample::goals()?;
        session.investments = sample::investments()?;

        info!(
            expenses = session.expenses.len(),
            seed = ?session.settings.sample.seed,
            "session started with sample data"
        );
        Ok(session)
    }

    /// Pin the reference date used for monthly contributions
    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = as_of;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn budgets(&self) -> &[BudgetLimit] {
        &self.budgets
    }

    pub fn goals(&self) -> &[FinancialGoal] {
        &self.goals
    }

    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    /// Append an expense
    pub fn add_expense(
        &mut self,
        date: NaiveDate,
        amount: Money,
        category: Category,
    ) -> DomainResult<Expense> {
        let expense = Expense::new(date, amount, category)?;
        self.expenses.push(expense.clone());
        debug!(%date, %amount, %category, "expense added");
        Ok(expense)
    }

    /// Set a category's limit, keeping whatever has been spent against it
    pub fn set_budget(&mut self, category: Category, limit: Money) -> DomainResult<BudgetLimit> {
        let budget = match self.budget_index(category) {
            Some(idx) => {
                let updated =
                    BudgetLimit::with_spent(category, limit, self.budgets[idx].spent)?;
                self.budgets[idx] = updated.clone();
                updated
            }
            None => {
                let created = BudgetLimit::new(category, limit)?;
                self.budgets.push(created.clone());
                created
            }
        };
        debug!(%category, %limit, "budget set");
        Ok(budget)
    }

    /// Report the amount spent in a category that already has a limit
    pub fn record_spending(
        &mut self,
        category: Category,
        spent: Money,
    ) -> DomainResult<BudgetLimit> {
        let idx = self
            .budget_index(category)
            .ok_or_else(|| DomainError::budget_not_found(category.name()))?;
        let updated = BudgetLimit::with_spent(category, self.budgets[idx].limit, spent)?;
        self.budgets[idx] = updated.clone();
        debug!(%category, %spent, "spending recorded");
        Ok(updated)
    }

    /// Create a goal or retarget an existing one with the same name
    ///
    /// Savings already recorded against the goal are kept.
    pub fn set_goal(
        &mut self,
        name: &str,
        amount: Money,
        target_date: NaiveDate,
    ) -> DomainResult<FinancialGoal> {
        let goal = match self.goal_index(name) {
            Some(idx) => {
                let existing = &self.goals[idx];
                let updated = FinancialGoal::with_saved(
                    &existing.name,
                    amount,
                    target_date,
                    existing.saved_amount,
                )?;
                self.goals[idx] = updated.clone();
                updated
            }
            None => {
                let created = FinancialGoal::new(name, amount, target_date)?;
                self.goals.push(created.clone());
                created
            }
        };
        debug!(goal = %goal.name, amount = %goal.target_amount, %target_date, "goal set");
        Ok(goal)
    }

    /// Put money aside for a goal
    pub fn record_saving(&mut self, name: &str, amount: Money) -> DomainResult<FinancialGoal> {
        amount.ensure_non_negative("Saving")?;
        let idx = self
            .goal_index(name)
            .ok_or_else(|| DomainError::goal_not_found(name.trim()))?;

        let mut updated = self.goals[idx].clone();
        updated.saved_amount = updated.saved_amount.checked_add(amount)?;
        updated.validate()?;
        self.goals[idx] = updated.clone();
        debug!(goal = %updated.name, %amount, saved = %updated.saved_amount, "saving recorded");
        Ok(updated)
    }

    /// Append a new holding; names must be unique
    pub fn add_investment(
        &mut self,
        name: &str,
        amount: Money,
        date: NaiveDate,
    ) -> DomainResult<Investment> {
        let investment = Investment::new(name, amount, date)?;
        if self.investment_index(&investment.name).is_some() {
            return Err(DomainError::duplicate_investment(investment.name));
        }
        self.investments.push(investment.clone());
        debug!(investment = %investment.name, %amount, %date, "investment added");
        Ok(investment)
    }

    /// Mark a holding to its current market value
    pub fn update_value(&mut self, name: &str, value: Money) -> DomainResult<Investment> {
        let idx = self
            .investment_index(name)
            .ok_or_else(|| DomainError::investment_not_found(name.trim()))?;

        let mut updated = self.investments[idx].clone();
        updated.current_value = value;
        updated.validate()?;
        self.investments[idx] = updated.clone();
        debug!(investment = %updated.name, %value, "investment revalued");
        Ok(updated)
    }

    /// Recompute one view from the current tables
    pub fn render(&self, view: View) -> DomainResult<Report> {
        Report::generate(self, view)
    }

    fn budget_index(&self, category: Category) -> Option<usize> {
        self.budgets.iter().position(|b| b.category == category)
    }

    fn goal_index(&self, name: &str) -> Option<usize> {
        self.goals.iter().position(|g| names_match(&g.name, name))
    }

    fn investment_index(&self, name: &str) -> Option<usize> {
        self.investments
            .iter()
            .position(|i| names_match(&i.name, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded() -> Session {
        let mut settings = Settings::default();
        settings.sample.seed = Some(1);
        Session::with_sample_data(settings).unwrap()
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new(Settings::default());
        assert!(session.expenses().is_empty());
        assert!(session.budgets().is_empty());
        assert!(session.goals().is_empty());
        assert!(session.investments().is_empty());
    }

    #[test]
    fn test_sample_session() {
        let session = seeded();
        assert_eq!(session.expenses().len(), 100);
        assert_eq!(session.budgets().len(), 5);
        assert_eq!(session.goals().len(), 3);
        assert_eq!(session.investments().len(), 3);
        assert_eq!(session.expenses(), seeded().expenses());
    }

    #[test]
    fn test_sample_start_date_out_of_range() {
        let settings: Settings =
            serde_json::from_str(r#"{"sample":{"start_date":"+262142-12-01","seed":1}}"#)
                .unwrap();
        let err = Session::with_sample_data(settings).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDate(_)));
    }

    #[test]
    fn test_add_expense_appends() {
        let mut session = seeded();
        session
            .add_expense(day(2024, 5, 1), Money::from_cents(1234), Category::Shopping)
            .unwrap();
        assert_eq!(session.expenses().len(), 101);
        assert_eq!(session.expenses()[100].amount.cents(), 1234);
    }

    #[test]
    fn test_rejected_expense_leaves_table_unchanged() {
        let mut session = seeded();
        let before = session.expenses().to_vec();
        let err = session
            .add_expense(day(2024, 5, 1), Money::from_cents(-1), Category::Food)
            .unwrap_err();
        assert!(err.is_invalid_amount());
        assert_eq!(session.expenses(), before.as_slice());
    }

    #[test]
    fn test_set_budget_upserts_and_keeps_spent() {
        let mut session = seeded();
        let updated = session
            .set_budget(Category::Entertainment, Money::from_units(200))
            .unwrap();
        assert_eq!(updated.spent, Money::from_units(160));
        assert_eq!(session.budgets().len(), 5);
        assert!(!updated.is_exceeded());

        let mut empty = Session::new(Settings::default());
        let created = empty.set_budget(Category::Food, Money::from_units(50)).unwrap();
        assert!(created.spent.is_zero());
        assert_eq!(empty.budgets().len(), 1);
    }

    #[test]
    fn test_record_spending() {
        let mut session = Session::new(Settings::default());
        assert!(session
            .record_spending(Category::Food, Money::from_units(10))
            .unwrap_err()
            .is_not_found());

        session.set_budget(Category::Food, Money::from_units(200)).unwrap();
        let budget = session
            .record_spending(Category::Food, Money::from_units(210))
            .unwrap();
        assert!(budget.is_exceeded());
        assert!(session
            .record_spending(Category::Food, Money::from_cents(-1))
            .is_err());
        assert_eq!(session.budgets()[0].spent, Money::from_units(210));
    }

    #[test]
    fn test_set_goal_upserts_by_name() {
        let mut session = seeded();
        let goal = session
            .set_goal("vacation ", Money::from_units(3000), day(2025, 6, 30))
            .unwrap();
        assert_eq!(goal.name, "Vacation");
        assert_eq!(goal.saved_amount, Money::from_units(500));
        assert_eq!(session.goals().len(), 3);

        session
            .set_goal("Car", Money::from_units(8000), day(2026, 1, 1))
            .unwrap();
        assert_eq!(session.goals().len(), 4);
    }

    #[test]
    fn test_failed_goal_update_keeps_old_goal() {
        let mut session = seeded();
        let before = session.goals().to_vec();
        assert!(session
            .set_goal("Vacation", Money::from_units(-5), day(2025, 1, 1))
            .is_err());
        assert!(session.set_goal("  ", Money::from_units(5), day(2025, 1, 1)).is_err());
        assert_eq!(session.goals(), before.as_slice());
    }

    #[test]
    fn test_record_saving() {
        let mut session = seeded();
        let goal = session
            .record_saving("New Laptop", Money::from_units(700))
            .unwrap();
        assert!(goal.is_reached());
        assert!(session
            .record_saving("Yacht", Money::from_units(1))
            .unwrap_err()
            .is_not_found());
        assert!(session
            .record_saving("New Laptop", Money::from_units(-1))
            .unwrap_err()
            .is_invalid_amount());
    }

    #[test]
    fn test_overflowing_saving_keeps_old_goal() {
        let mut session = seeded();
        let huge = Money::parse("90000000000000000").unwrap();
        session.record_saving("Vacation", huge).unwrap();
        let err = session.record_saving("Vacation", huge).unwrap_err();
        assert!(err.is_invalid_amount());
        assert_eq!(
            session.goals()[0].saved_amount,
            huge.checked_add(Money::from_units(500)).unwrap()
        );
    }

    #[test]
    fn test_render_reports_overflowing_totals() {
        let mut session = Session::new(Settings::default());
        let huge = Money::parse("90000000000000000").unwrap();
        session.add_expense(day(2024, 1, 1), huge, Category::Food).unwrap();
        session.add_expense(day(2024, 1, 2), huge, Category::Bills).unwrap();
        assert!(session
            .render(View::Expenses)
            .unwrap_err()
            .is_invalid_amount());
        assert!(session.render(View::Budget).is_ok());
    }

    #[test]
    fn test_duplicate_investment_rejected() {
        let mut session = seeded();
        let err = session
            .add_investment("stocks", Money::from_units(100), day(2024, 2, 1))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateName {
                entity_type: "Investment",
                name: "stocks".into()
            }
        );
        assert_eq!(session.investments().len(), 3);

        let added = session
            .add_investment("Gold", Money::from_units(1000), day(2024, 2, 1))
            .unwrap();
        assert_eq!(added.current_value, Money::from_units(1000));
        assert_eq!(session.investments().len(), 4);
    }

    #[test]
    fn test_update_value() {
        let mut session = seeded();
        let bonds = session.update_value("Bonds", Money::from_units(4800)).unwrap();
        assert_eq!(bonds.current_value, Money::from_units(4800));
        assert!(session
            .update_value("Bonds", Money::from_cents(-1))
            .is_err());
        assert_eq!(session.investments()[1].current_value, Money::from_units(4800));
        assert!(session
            .update_value("Bitcoin", Money::zero())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_render_reflects_changes() {
        let mut session = seeded();
        session
            .record_spending(Category::Food, Money::from_units(250))
            .unwrap();
        match session.render(View::Budget).unwrap() {
            Report::Budget(report) => {
                assert!(report.alerts.contains(&Category::Food));
                assert!(report.alerts.contains(&Category::Entertainment));
            }
            other => panic!("unexpected report: {:?}", other.view()),
        }
    }
}
