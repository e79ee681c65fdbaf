use serde::{Deserialize, Serialize};

/// Headline totals shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Number of investments in the book
    pub investment_count: usize,

    /// Sum of invested values
    pub total_invested: f64,

    /// Sum of current values
    pub total_current: f64,

    /// total_current - total_invested
    pub total_profit: f64,

    /// (total_profit / total_invested) * 100, or 0 when nothing is invested
    pub total_profitability: f64,
}

/// One slice of a distribution pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    /// Type or bank label (e.g., "CDB", "Nubank")
    pub label: String,

    /// Sum of current values in this slice
    pub value: f64,

    /// This slice's value / sum of all slices × 100
    pub share_pct: f64,

    /// Fill colour (`#RRGGBB` or `rgb(r, g, b)`)
    pub color: String,
}

impl DistributionSlice {
    /// Pie label text: `CDB 33%`.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} {:.0}%", self.label, self.share_pct.round())
    }
}

/// One bar pair of the monthly evolution chart.
///
/// Totals are cumulative: they cover every investment applied on or
/// before the last day of the month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyEvolutionPoint {
    pub year: i32,

    /// 1-based month number
    pub month: u32,

    /// Short month label in Portuguese, e.g. "Fev/2024"
    pub label: String,

    pub invested: f64,

    pub current: f64,
}
