//! Plain-text reports.

use std::fmt::Write;

use rupiah_core::budget::BudgetUsage;
use rupiah_core::currency::RupiahFormatter;
use rupiah_core::goal::{GoalProgress, GoalState};

pub fn budget(formatter: &RupiahFormatter, usage: &BudgetUsage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Limit:     {}", formatter.display_amount(usage.limit));
    let _ = writeln!(out, "Spent:     {}", formatter.display_amount(usage.spent));
    let _ = writeln!(out, "Remaining: {}", formatter.display_amount(usage.remaining));
    if usage.is_over_budget() {
        let _ = writeln!(out, "Over by:   {}", formatter.display_amount(usage.overspent()));
    }
    let _ = write!(out, "Usage:     {}% ({})", usage.usage_percentage, usage.level);
    out
}

pub fn goal(
    formatter: &RupiahFormatter,
    progress: &GoalProgress,
    state: GoalState,
    near_deadline_days: i64,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Target:    {}", formatter.display_amount(progress.target));
    let _ = writeln!(out, "Saved:     {}", formatter.display_amount(progress.current));
    let _ = writeln!(out, "Remaining: {}", formatter.display_amount(progress.remaining));
    let _ = writeln!(
        out,
        "Progress:  {}% ({})",
        progress.progress_percentage,
        progress.tier().as_str()
    );
    let _ = writeln!(
        out,
        "Deadline:  {} ({})",
        progress.deadline,
        progress.deadline_label()
    );
    let _ = write!(out, "Status:    {}", progress.badge(near_deadline_days).label());
    if progress.can_mark_completed(state) {
        out.push_str("\nTarget reached; the goal can be marked completed.");
    }
    out
}
