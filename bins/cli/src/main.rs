//! Rupiah command-line tool.
//!
//! Usage:
//!   rupiah display <AMOUNT>...   - Render amounts as display strings
//!   rupiah typed <INPUT>         - Render input the way a focused field shows it
//!   rupiah budget --limit --spent
//!   rupiah goal --target --current --deadline

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rupiah_core::budget::BudgetUsage;
use rupiah_core::currency::RupiahFormatter;
use rupiah_core::goal::{GoalProgress, GoalState, apply_contribution};
use rupiah_shared::{AppConfig, MonetaryAmount};

mod report;

#[derive(Parser)]
#[command(name = "rupiah", about = "Format Rupiah amounts and track budgets and goals")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render amounts as display strings, e.g. "Rp. 1.000.000"
    Display {
        /// Amounts; anything that is not a digit is ignored
        #[arg(required = true)]
        amounts: Vec<String>,
    },

    /// Render input the way a focused amount field shows it
    Typed {
        /// Raw field input
        input: String,
    },

    /// Report how much of a budget has been used
    Budget {
        /// Budgeted amount
        #[arg(long, value_parser = parse_amount)]
        limit: MonetaryAmount,

        /// Amount spent so far
        #[arg(long, value_parser = parse_amount)]
        spent: MonetaryAmount,
    },

    /// Report progress towards a savings goal
    Goal {
        /// Target amount
        #[arg(long, value_parser = parse_amount)]
        target: MonetaryAmount,

        /// Amount saved so far
        #[arg(long, value_parser = parse_amount, default_value = "0")]
        current: MonetaryAmount,

        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: NaiveDate,

        /// Reference date, defaults to the local date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Stored goal state
        #[arg(long, value_enum, default_value_t = StateArg::Active)]
        state: StateArg,

        /// Contribution to add before reporting
        #[arg(long, value_parser = parse_amount)]
        add: Option<MonetaryAmount>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StateArg {
    Active,
    Completed,
    Paused,
    Cancelled,
}

impl From<StateArg> for GoalState {
    fn from(state: StateArg) -> Self {
        match state {
            StateArg::Active => Self::Active,
            StateArg::Completed => Self::Completed,
            StateArg::Paused => Self::Paused,
            StateArg::Cancelled => Self::Cancelled,
        }
    }
}

#[allow(clippy::unnecessary_wraps)]
fn parse_amount(s: &str) -> Result<MonetaryAmount, String> {
    Ok(rupiah_core::parse_digits(s))
}

fn run(command: Command, config: &AppConfig) -> anyhow::Result<String> {
    let formatter = RupiahFormatter::from_config(&config.formatter)
        .context("invalid formatter configuration")?;

    match command {
        Command::Display { amounts } => Ok(amounts
            .iter()
            .map(|amount| formatter.display(amount.as_str()))
            .collect::<Vec<_>>()
            .join("\n")),
        Command::Typed { input } => Ok(formatter.typed(&input)),
        Command::Budget { limit, spent } => {
            let usage =
                BudgetUsage::with_warning_percent(limit, spent, config.budget.warning_percent);
            debug!(level = %usage.level, "budget usage calculated");
            Ok(report::budget(&formatter, &usage))
        }
        Command::Goal {
            target,
            current,
            deadline,
            today,
            state,
            add,
        } => {
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let (current, state) = match add {
                Some(amount) => {
                    let contribution = apply_contribution(state.into(), current, target, amount)?;
                    info!(added = %amount, "contribution applied");
                    (contribution.current, contribution.state)
                }
                None => (current, state.into()),
            };

            let progress = GoalProgress::calculate(target, current, deadline, today, state);
            Ok(report::goal(
                &formatter,
                &progress,
                state,
                config.goal.near_deadline_days,
            ))
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rupiah=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;

    let output = run(cli.command, &config)?;
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(args)?;
        run(cli.command, &AppConfig::default())
    }

    #[test]
    fn test_display_command() {
        let output = run_args(&["rupiah", "display", "1000000", "abc", "Rp. 25.000"]).unwrap();
        assert_eq!(output, "Rp. 1.000.000\nRp. 0\nRp. 25.000");
    }

    #[test]
    fn test_display_requires_amount() {
        assert!(Cli::try_parse_from(["rupiah", "display"]).is_err());
    }

    #[rstest]
    #[case("Rp1.000", "1000")]
    #[case("Rp. 12.500", "12500")]
    fn test_typed_command(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(run_args(&["rupiah", "typed", input]).unwrap(), expected);
    }

    #[test]
    fn test_budget_command_accepts_formatted_amounts() {
        let output = run_args(&[
            "rupiah", "budget", "--limit", "Rp. 1.000.000", "--spent", "850000",
        ])
        .unwrap();
        assert!(output.contains("Remaining: Rp. 150.000"));
        assert!(output.contains("Usage:     85% (warning)"));
    }

    #[test]
    fn test_goal_command() {
        let output = run_args(&[
            "rupiah",
            "goal",
            "--target",
            "10000000",
            "--current",
            "2500000",
            "--deadline",
            "2026-02-14",
            "--today",
            "2026-01-15",
        ])
        .unwrap();
        assert!(output.contains("Progress:  25% (started)"));
        assert!(output.contains("Deadline:  2026-02-14 (30 hari lagi)"));
        assert!(output.contains("Status:    Aktif"));
    }

    #[test]
    fn test_goal_command_with_contribution() {
        let output = run_args(&[
            "rupiah",
            "goal",
            "--target",
            "1000",
            "--current",
            "900",
            "--add",
            "500",
            "--deadline",
            "2026-02-14",
            "--today",
            "2026-01-15",
        ])
        .unwrap();
        assert!(output.contains("Saved:     Rp. 1.000"));
        assert!(output.contains("Status:    Selesai"));
    }

    #[test]
    fn test_goal_contribution_to_inactive_goal_fails() {
        let result = run_args(&[
            "rupiah",
            "goal",
            "--target",
            "1000",
            "--state",
            "paused",
            "--add",
            "500",
            "--deadline",
            "2026-02-14",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_goal_rejects_bad_date() {
        assert!(
            Cli::try_parse_from(["rupiah", "goal", "--target", "1", "--deadline", "tomorrow"])
                .is_err()
        );
    }
}
