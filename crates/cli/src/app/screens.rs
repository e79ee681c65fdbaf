//! Text renderings of each screen.
//!
//! Every function returns the whole screen as a `String`; the shell decides
//! where it goes.

use investment_tracker_core::format::{
    format_br_date, format_compact_currency, format_currency, format_profitability,
};
use investment_tracker_core::models::dashboard::DistributionSlice;
use investment_tracker_core::models::investment::Investment;
use investment_tracker_core::InvestmentTracker;

const LABEL_WIDTH: usize = 18;

fn title(text: &str) -> Vec<String> {
    vec![text.to_string(), "=".repeat(text.chars().count())]
}

fn row(label: &str, value: impl std::fmt::Display) -> String {
    format!("{label:<LABEL_WIDTH$}{value}")
}

fn days_label(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

fn slice_lines(slices: &[DistributionSlice]) -> Vec<String> {
    let width = slices.iter().map(|s| s.label.len()).max().unwrap_or(0);
    slices
        .iter()
        .map(|s| {
            format!(
                "  {:<width$}  {:>16}  {:>4.0}%  {}",
                s.label,
                format_currency(s.value),
                s.share_pct.round(),
                s.color,
            )
        })
        .collect()
}

/// Summary cards, both distributions and the monthly evolution.
#[must_use]
pub fn render_dashboard(tracker: &InvestmentTracker) -> String {
    let summary = tracker.dashboard_summary();
    let mut lines = title("Dashboard");
    lines.push(String::new());
    lines.push(row("Total invested", format_currency(summary.total_invested)));
    lines.push(row("Current value", format_currency(summary.total_current)));
    lines.push(row(
        "Profit",
        format!(
            "{} ({})",
            format_currency(summary.total_profit),
            format_profitability(summary.total_profitability)
        ),
    ));
    lines.push(row("Investments", summary.investment_count));

    if tracker.is_empty() {
        lines.push(String::new());
        lines.push("No investments yet. Use `add` to register one.".to_string());
        return lines.join("\n");
    }

    lines.push(String::new());
    lines.push("By type".to_string());
    lines.extend(slice_lines(&tracker.type_distribution()));

    lines.push(String::new());
    lines.push("By bank".to_string());
    lines.extend(slice_lines(&tracker.bank_distribution()));

    lines.push(String::new());
    lines.push("Monthly evolution".to_string());
    for point in tracker.monthly_evolution() {
        lines.push(format!(
            "  {:<9} invested {:>9}  current {:>9}",
            point.label,
            format_compact_currency(point.invested),
            format_compact_currency(point.current),
        ));
    }

    lines.join("\n")
}

/// One list card. `position` is the 1-based number the shell accepts as a
/// reference.
#[must_use]
pub fn render_card(position: usize, investment: &Investment) -> String {
    let mut tags = vec![
        investment.bank().label().to_string(),
        investment.investment_type().label().to_string(),
    ];
    if let Some(yield_label) = investment.yield_label() {
        tags.push(yield_label.to_string());
    }

    [
        format!("[{position}] {}", investment.name()),
        format!("    {}", tags.join(" · ")),
        format!(
            "    Invested {}   Current {}",
            format_currency(investment.invested_value()),
            format_currency(investment.current_value())
        ),
        format!(
            "    {}   {}",
            days_label(investment.days()),
            format_profitability(investment.profitability())
        ),
        format!(
            "    Applied {}   Matures {}",
            format_br_date(investment.application_date()),
            format_br_date(investment.maturity_date())
        ),
    ]
    .join("\n")
}

/// Every investment as a card, or the empty state.
#[must_use]
pub fn render_list(tracker: &InvestmentTracker) -> String {
    let mut lines = title(&format!("Investments ({})", tracker.investment_count()));
    lines.push(String::new());

    if tracker.is_empty() {
        lines.push("No investments registered yet.".to_string());
        lines.push("Use `add` to register your first investment.".to_string());
        return lines.join("\n");
    }

    let cards: Vec<String> = tracker
        .investments()
        .iter()
        .enumerate()
        .map(|(idx, inv)| render_card(idx + 1, inv))
        .collect();
    lines.push(cards.join("\n\n"));
    lines.join("\n")
}

/// Full detail screen for one investment.
#[must_use]
pub fn render_details(investment: &Investment) -> String {
    let mut lines = title("Investment details");
    lines.push(String::new());
    lines.push(investment.name().to_string());
    lines.push(format!(
        "{} · {}",
        investment.bank(),
        investment.investment_type()
    ));
    if let Some(yield_label) = investment.yield_label() {
        lines.push(format!("Yield: {yield_label}"));
    }

    lines.push(String::new());
    lines.push(row("Invested value", format_currency(investment.invested_value())));
    lines.push(row("Current value", format_currency(investment.current_value())));
    lines.push(row("Profit/Loss", format_currency(investment.profit())));
    lines.push(row("Profitability", format_profitability(investment.profitability())));

    lines.push(String::new());
    lines.push(row("Application date", format_br_date(investment.application_date())));
    lines.push(row("Maturity date", format_br_date(investment.maturity_date())));
    lines.push(row("Days elapsed", days_label(investment.days())));
    lines.push(row("Investment type", investment.investment_type()));
    lines.push(row("Bank", investment.bank()));
    lines.push(row("Id", investment.id()));

    lines.join("\n")
}

/// Shown when a reference resolves to nothing.
#[must_use]
pub fn render_investment_not_found(reference: &str) -> String {
    let mut lines = title("Investment not found");
    lines.push(String::new());
    lines.push(format!("No investment matches '{reference}'."));
    lines.join("\n")
}

/// Shown for any path outside the route table.
#[must_use]
pub fn render_not_found(path: &str) -> String {
    let mut lines = title("Page not found");
    lines.push(String::new());
    lines.push(format!("Nothing lives at '{path}'."));
    lines.push("Try `go /` for the dashboard or `help` for commands.".to_string());
    lines.join("\n")
}

/// Command reference.
#[must_use]
pub fn render_help() -> String {
    [
        "Commands",
        "  dashboard          summary and charts            (/)",
        "  list               all investments               (/investments)",
        "  add                register an investment        (/investments/add)",
        "  show <ref>         one investment in detail      (/investments/<ref>)",
        "  edit <ref>         change an investment          (/investments/<ref>/edit)",
        "  delete <ref>       remove an investment",
        "  search <text>      match names and yields",
        "  refresh            recompute elapsed days",
        "  go <path>          open a path",
        "  help               this list",
        "  quit               leave the shell",
        "",
        "<ref> is a list number, a full id, or at least four characters of one.",
        "In forms, type :cancel to abandon the form.",
    ]
    .join("\n")
}
