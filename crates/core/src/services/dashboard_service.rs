use chrono::{Datelike, NaiveDate};

use crate::format::calculate_profitability;
use crate::models::book::InvestmentBook;
use crate::models::dashboard::{DashboardSummary, DistributionSlice, MonthlyEvolutionPoint};

/// Fill colours for the type distribution chart, assigned by slice index.
pub const TYPE_PALETTE: [&str; 5] = ["#8B5CF6", "#06B6D4", "#10B981", "#F59E0B", "#EF4444"];

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Derives the dashboard figures from the book.
///
/// Nothing is cached: every call is a linear pass over the investments.
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    pub fn summary(&self, book: &InvestmentBook) -> DashboardSummary {
        let total_invested: f64 = book.investments.iter().map(|inv| inv.invested_value()).sum();
        let total_current: f64 = book.investments.iter().map(|inv| inv.current_value()).sum();
        let total_profitability = if total_invested > 0.0 {
            calculate_profitability(total_invested, total_current)
        } else {
            0.0
        };

        DashboardSummary {
            investment_count: book.investments.len(),
            total_invested,
            total_current,
            total_profit: total_current - total_invested,
            total_profitability,
        }
    }

    /// Current value per investment type, in order of first appearance.
    pub fn type_distribution(&self, book: &InvestmentBook) -> Vec<DistributionSlice> {
        let groups = group_by_first_appearance(
            book.investments
                .iter()
                .map(|inv| (inv.investment_type(), inv.current_value())),
        );
        to_slices(groups, |idx, kind| {
            (kind.label(), TYPE_PALETTE[idx % TYPE_PALETTE.len()])
        })
    }

    /// Current value per bank, in order of first appearance, in bank colours.
    pub fn bank_distribution(&self, book: &InvestmentBook) -> Vec<DistributionSlice> {
        let groups = group_by_first_appearance(
            book.investments
                .iter()
                .map(|inv| (inv.bank(), inv.current_value())),
        );
        to_slices(groups, |_, bank| (bank.label(), bank.color()))
    }

    /// Cumulative invested/current totals per month, from the earliest to the
    /// latest application month. Empty when the book is empty.
    pub fn monthly_evolution(&self, book: &InvestmentBook) -> Vec<MonthlyEvolutionPoint> {
        let dates = book.investments.iter().map(|inv| inv.application_date());
        let (Some(first), Some(last)) = (dates.clone().min(), dates.max()) else {
            return Vec::new();
        };

        expand_month_range((first.year(), first.month()), (last.year(), last.month()))
            .into_iter()
            .map(|(year, month)| {
                let month_end = last_day_of_month(year, month);
                let (invested, current) = book
                    .investments
                    .iter()
                    .filter(|inv| inv.application_date() <= month_end)
                    .fold((0.0, 0.0), |(invested, current), inv| {
                        (invested + inv.invested_value(), current + inv.current_value())
                    });
                MonthlyEvolutionPoint {
                    year,
                    month,
                    label: format!("{}/{year}", MONTH_LABELS[(month - 1) as usize]),
                    invested,
                    current,
                }
            })
            .collect()
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}

/// Sum values per key, keeping keys in order of first appearance.
fn group_by_first_appearance<K: PartialEq>(pairs: impl Iterator<Item = (K, f64)>) -> Vec<(K, f64)> {
    let mut groups: Vec<(K, f64)> = Vec::new();
    for (key, value) in pairs {
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total += value,
            None => groups.push((key, value)),
        }
    }
    groups
}

/// Build pie slices with each group's share of the total.
/// `style` maps (index, key) to (label, colour).
fn to_slices<K>(
    groups: Vec<(K, f64)>,
    style: impl Fn(usize, &K) -> (&'static str, &'static str),
) -> Vec<DistributionSlice> {
    let total: f64 = groups.iter().map(|(_, value)| value).sum();
    groups
        .iter()
        .enumerate()
        .map(|(idx, (key, value))| {
            let (label, color) = style(idx, key);
            DistributionSlice {
                label: label.to_string(),
                value: *value,
                share_pct: if total > 0.0 { value / total * 100.0 } else { 0.0 },
                color: color.to_string(),
            }
        })
        .collect()
}

fn expand_month_range(start: (i32, u32), end: (i32, u32)) -> Vec<(i32, u32)> {
    let (mut year, mut month) = start;
    let mut months = Vec::new();
    while (year, month) <= end {
        months.push((year, month));
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    months
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}
