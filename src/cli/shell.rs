//! Interactive session shell
//!
//! Reads one command per line, applies it to the session and prints the
//! outcome. A rejected command prints its error and the session carries on
//! with its previous state.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::error::{DomainResult, FinanceResult};
use crate::models::{parse_date, Category, Money};
use crate::reports::View;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "Commands:\n{subcommands}"
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// Commands accepted at the shell prompt
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Log a new expense
    #[command(name = "add-expense")]
    AddExpense {
        /// Amount (e.g. "42.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Food, Entertainment, Bills, Shopping or Miscellaneous
        category: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Set the spending limit for a category
    #[command(name = "set-budget")]
    SetBudget {
        category: String,
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// Record how much has been spent in a budgeted category
    #[command(name = "set-spent")]
    SetSpent {
        category: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Create or update a savings goal
    #[command(name = "set-goal")]
    SetGoal {
        /// Goal name (quote names with spaces)
        name: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Target date (YYYY-MM-DD)
        date: String,
    },

    /// Put money aside for a goal
    Save {
        goal: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Add a new investment
    #[command(name = "add-investment")]
    AddInvestment {
        name: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Investment date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Current value if different from the amount invested
        #[arg(long, allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Update the current value of an investment
    Revalue {
        name: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Render a view
    Show {
        #[arg(value_enum)]
        view: View,
    },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Split a line into arguments, keeping double-quoted runs together
pub fn split_args(line: &str) -> Result<Vec<String>, String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if has_token {
        args.push(current);
    }
    Ok(args)
}

/// Parse one shell line; `Ok(None)` for a blank line
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let args = split_args(line)?;
    if args.is_empty() {
        return Ok(None);
    }
    ShellLine::try_parse_from(args)
        .map(|parsed| Some(parsed.command))
        .map_err(|e| e.to_string().trim_end().to_string())
}

/// Apply a command to the session and describe the result
///
/// Returns `None` for `quit`.
pub fn execute(session: &mut Session, command: ShellCommand) -> DomainResult<Option<String>> {
    let settings = session.settings().clone();
    let message = match command {
        ShellCommand::AddExpense {
            amount,
            category,
            date,
        } => {
            let amount = Money::parse(&amount)?;
            let category: Category = category.parse()?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => session.as_of(),
            };
            session.add_expense(date, amount, category)?;
            "Expense added successfully!".to_string()
        }
        ShellCommand::SetBudget { category, limit } => {
            let category: Category = category.parse()?;
            let budget = session.set_budget(category, Money::parse(&limit)?)?;
            format!(
                "Budget for {} set to {}",
                budget.category,
                settings.money(budget.limit)
            )
        }
        ShellCommand::SetSpent { category, amount } => {
            let category: Category = category.parse()?;
            let budget = session.record_spending(category, Money::parse(&amount)?)?;
            let mut message = format!(
                "Spent in {} is now {} of {}",
                budget.category,
                settings.money(budget.spent),
                settings.money(budget.limit)
            );
            if budget.is_exceeded() {
                message.push_str(" (over budget)");
            }
            message
        }
        ShellCommand::SetGoal { name, amount, date } => {
            let goal = session.set_goal(&name, Money::parse(&amount)?, parse_date(&date)?)?;
            format!(
                "Goal '{}' set for {} by {}",
                goal.name,
                settings.money(goal.target_amount),
                settings.date(goal.target_date)
            )
        }
        ShellCommand::Save { goal, amount } => {
            let goal = session.record_saving(&goal, Money::parse(&amount)?)?;
            format!(
                "Saved {} of {} for '{}'",
                settings.money(goal.saved_amount),
                settings.money(goal.target_amount),
                goal.name
            )
        }
        ShellCommand::AddInvestment {
            name,
            amount,
            date,
            value,
        } => {
            let amount = Money::parse(&amount)?;
            let value = value.as_deref().map(Money::parse).transpose()?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => session.as_of(),
            };
            // Validate the value before the holding is added
            if let Some(v) = value {
                v.ensure_non_negative("Current value")?;
            }
            let mut investment = session.add_investment(&name, amount, date)?;
            if let Some(v) = value {
                investment = session.update_value(&investment.name, v)?;
            }
            format!(
                "Investment '{}' of {} added on {}",
                investment.name,
                settings.money(investment.principal_amount),
                settings.date(investment.date)
            )
        }
        ShellCommand::Revalue { name, value } => {
            let investment = session.update_value(&name, Money::parse(&value)?)?;
            format!(
                "'{}' is now worth {}",
                investment.name,
                settings.money(investment.current_value)
            )
        }
        ShellCommand::Show { view } => session.render(view)?.format_terminal(&settings),
        ShellCommand::Quit => return Ok(None),
    };
    Ok(Some(message))
}

/// Drive the shell until `quit` or end of input
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> FinanceResult<()> {
    writeln!(
        output,
        "Personal Finance Manager. Type 'help' for commands, 'quit' to leave."
    )?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };

        debug!(?command, "shell command");
        match execute(session, command) {
            Ok(Some(message)) => writeln!(output, "{}", message)?,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "command rejected");
                writeln!(output, "Error: {}", e)?;
            }
        }
    }

    output.flush()?;
    Ok(())
}
