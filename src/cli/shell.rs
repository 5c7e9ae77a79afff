use std::{io, ops::ControlFlow};

use crate::{
    core::{
        errors::{BudgetError, CliError},
        services::{BudgetService, TransactionService},
    },
    currency::format_currency_value,
    ledger::{parse_amount, TransactionType, MAX_AMOUNT},
    report::{self, ReportOutcome},
};

use super::{
    io::{EditorInput, InputEvent, LineSource, ScriptInput},
    output,
    shell_context::{CliMode, ShellContext},
    state::{MenuState, MENU_ITEMS},
};

const MENU_TITLE: &str = "Budget Planner";
const CHOICE_PROMPT: &str = "Enter your choice (1-5): ";

pub fn run_cli() -> Result<(), CliError> {
    let mode = CliMode::from_env();
    let context = ShellContext::new()?;

    match mode {
        CliMode::Interactive => Shell::new(context, EditorInput::new()?).run(),
        CliMode::Script => {
            colored::control::set_override(false);
            Shell::new(context, ScriptInput::new(io::stdin().lock())).run()
        }
    }
}

/// The menu loop: menu -> action -> menu until exit.
pub struct Shell<I> {
    context: ShellContext,
    input: I,
}

impl<I: LineSource> Shell<I> {
    pub fn new(context: ShellContext, input: I) -> Self {
        Self { context, input }
    }

    pub fn into_context(self) -> ShellContext {
        self.context
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        let mut state = MenuState::Menu;
        while !state.is_terminal() {
            tracing::trace!(?state, "menu transition");
            state = match state {
                MenuState::Menu => self.menu()?,
                MenuState::AddTransaction => self.add_transaction()?,
                MenuState::SetBudget => self.set_budget()?,
                MenuState::Summary => self.summary(),
                MenuState::Report => self.report(),
                MenuState::Exit => MenuState::Exit,
            };
        }
        output::info("Exiting budget planner. Goodbye!");
        Ok(())
    }

    fn menu(&mut self) -> Result<MenuState, CliError> {
        output::section(MENU_TITLE);
        for (key, label) in MENU_ITEMS {
            println!("{}. {}", key, label);
        }

        match self.input.read_line(CHOICE_PROMPT)? {
            InputEvent::Line(choice) => Ok(MenuState::from_choice(&choice).unwrap_or_else(|| {
                output::error("Invalid choice. Please try again.");
                MenuState::Menu
            })),
            InputEvent::Interrupted | InputEvent::Eof => Ok(MenuState::Exit),
        }
    }

    /// Prompts once. `Break` carries the state to leave to when the user
    /// cancels (Ctrl-C, back to the menu) or closes the input (exit).
    fn ask(&mut self, prompt: &str) -> Result<ControlFlow<MenuState, String>, CliError> {
        Ok(match self.input.read_line(prompt)? {
            InputEvent::Line(line) => ControlFlow::Continue(line),
            InputEvent::Interrupted => {
                output::info("Cancelled.");
                ControlFlow::Break(MenuState::Menu)
            }
            InputEvent::Eof => ControlFlow::Break(MenuState::Exit),
        })
    }

    fn add_transaction(&mut self) -> Result<MenuState, CliError> {
        let raw_kind = match self.ask("Enter transaction type (income/expense): ")? {
            ControlFlow::Continue(line) => line,
            ControlFlow::Break(next) => return Ok(next),
        };
        let kind = match raw_kind.parse::<TransactionType>() {
            Ok(kind) => kind,
            Err(err) => return Ok(report_failure(err)),
        };

        let raw_amount = match self.ask("Enter amount: ")? {
            ControlFlow::Continue(line) => line,
            ControlFlow::Break(next) => return Ok(next),
        };
        let amount = match parse_amount(&raw_amount) {
            Ok(amount) if amount <= 0.0 => {
                return Ok(report_failure(BudgetError::NonPositiveAmount(amount)))
            }
            Ok(amount) if amount > MAX_AMOUNT => {
                return Ok(report_failure(BudgetError::AmountTooLarge(amount)))
            }
            Ok(amount) => amount,
            Err(err) => return Ok(report_failure(err)),
        };

        let category_prompt = format!("Enter {} category (e.g., Food, Salary, Books): ", kind);
        let category = match self.ask(&category_prompt)? {
            ControlFlow::Continue(line) => line,
            ControlFlow::Break(next) => return Ok(next),
        };

        let ShellContext {
            state,
            store,
            config,
            ..
        } = &mut self.context;
        match TransactionService::add(state, &*store, kind, amount, &category) {
            Ok(outcome) => {
                let txn = &outcome.transaction;
                output::success(format!(
                    "Successfully added {} of {} in '{}'.",
                    txn.kind(),
                    format_currency_value(txn.amount(), &config.currency_symbol),
                    txn.category()
                ));
                if outcome.over_budget {
                    output::warning(format!(
                        "WARNING: You have exceeded your monthly budget of {}!",
                        format_currency_value(state.budget_limit(), &config.currency_symbol)
                    ));
                }
                Ok(MenuState::Menu)
            }
            Err(err) => Ok(report_failure(err)),
        }
    }

    fn set_budget(&mut self) -> Result<MenuState, CliError> {
        let raw_limit = match self.ask("Enter your monthly budget limit: ")? {
            ControlFlow::Continue(line) => line,
            ControlFlow::Break(next) => return Ok(next),
        };
        let limit = match parse_amount(&raw_limit) {
            Ok(limit) => limit,
            Err(err) => return Ok(report_failure(err)),
        };

        let ShellContext {
            state,
            store,
            config,
            ..
        } = &mut self.context;
        match BudgetService::set_limit(state, &*store, limit) {
            Ok(()) => {
                output::success(format!(
                    "Monthly budget has been set to {}.",
                    format_currency_value(limit, &config.currency_symbol)
                ));
                Ok(MenuState::Menu)
            }
            Err(err) => Ok(report_failure(err)),
        }
    }

    fn summary(&self) -> MenuState {
        report::display_summary(&self.context.state, self.context.currency_symbol());
        MenuState::Menu
    }

    fn report(&self) -> MenuState {
        match report::generate_report(&self.context.state, &self.context.renderer) {
            Ok(ReportOutcome::NothingToReport) => {
                output::info("No transactions yet, nothing to report.");
            }
            Ok(ReportOutcome::Generated {
                category_chart,
                totals_chart,
            }) => {
                match category_chart {
                    Some(path) => output::success(format!(
                        "Saved expense pie chart as '{}'",
                        path.display()
                    )),
                    None => output::info("No expenses to create a pie chart."),
                }
                match totals_chart {
                    Some(path) => output::success(format!(
                        "Saved income, expense, and savings bar chart as '{}'",
                        path.display()
                    )),
                    None => output::info("Not enough data for income vs. expense chart."),
                }
            }
            Err(err) => {
                report_failure(err);
            }
        }
        MenuState::Menu
    }
}

fn report_failure(err: BudgetError) -> MenuState {
    if !err.is_validation() {
        tracing::error!(error = %err, "action failed");
    }
    output::error(err);
    MenuState::Menu
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionType;
    use crate::storage::StateStore;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_session(base: &std::path::Path, script: &str) -> ShellContext {
        let context = ShellContext::with_base_dir(base.to_path_buf()).unwrap();
        let mut shell = Shell::new(context, ScriptInput::new(Cursor::new(script.to_string())));
        shell.run().unwrap();
        shell.into_context()
    }

    #[test]
    fn add_flow_records_and_persists() {
        let temp = tempdir().unwrap();
        let context = run_session(temp.path(), "1\nincome\n1000\nSalary\n1\nexpense\n300\nFood\n5\n");

        assert_eq!(context.state.transaction_count(), 2);
        assert_eq!(context.state.transactions()[1].kind(), TransactionType::Expense);
        assert_eq!(context.store.load(), context.state);
    }

    #[test]
    fn invalid_inputs_leave_state_unchanged() {
        let temp = tempdir().unwrap();
        let script = "9\n1\nloan\n1\nexpense\nabc\n1\nexpense\n-5\n2\n-100\n2\nlots\n5\n";
        let context = run_session(temp.path(), script);

        assert!(context.state.is_empty());
        assert_eq!(context.state.budget_limit(), 0.0);
        assert!(!context.store.path().exists());
    }

    #[test]
    fn budget_flow_sets_limit() {
        let temp = tempdir().unwrap();
        let context = run_session(temp.path(), "2\n500\n3\n5\n");

        assert_eq!(context.state.budget_limit(), 500.0);
        assert_eq!(context.store.load().budget_limit(), 500.0);
    }

    #[test]
    fn end_of_input_exits_mid_action() {
        let temp = tempdir().unwrap();
        let context = run_session(temp.path(), "1\nexpense\n");

        assert!(context.state.is_empty());
    }

    #[test]
    fn report_flow_writes_both_charts() {
        let temp = tempdir().unwrap();
        let context = run_session(temp.path(), "1\nincome\n800\nJob\n1\nexpense\n200\nRent\n4\n5\n");

        assert!(context.renderer.category_chart_path().exists());
        assert!(context.renderer.totals_chart_path().exists());
    }

    #[test]
    fn oversized_amount_is_rejected_before_category_prompt() {
        let temp = tempdir().unwrap();
        let context = run_session(temp.path(), "1\nexpense\n1.7e308\n4\n5\n");

        assert!(context.state.is_empty());
        assert!(!context.store.path().exists());
        assert!(!context.renderer.totals_chart_path().exists());
    }

    #[test]
    fn first_session_writes_default_config() {
        let temp = tempdir().unwrap();
        run_session(temp.path(), "5\n");

        let raw = std::fs::read_to_string(temp.path().join("config.json")).unwrap();
        assert!(raw.contains("\"currency_symbol\""));
    }

    #[test]
    fn state_survives_between_sessions() {
        let temp = tempdir().unwrap();
        run_session(temp.path(), "2\n250\n1\nexpense\n40\nBooks\n5\n");
        let context = run_session(temp.path(), "5\n");

        assert_eq!(context.state.budget_limit(), 250.0);
        assert_eq!(context.state.transactions()[0].category(), "Books");
    }
}
