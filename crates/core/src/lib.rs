pub mod clock;
pub mod demo;
pub mod errors;
pub mod form;
pub mod format;
pub mod models;
pub mod services;

use chrono::{DateTime, Utc};
use clock::{Clock, SystemClock};
use form::InvestmentForm;
use models::{
    book::InvestmentBook,
    dashboard::{DashboardSummary, DistributionSlice, MonthlyEvolutionPoint},
    investment::{Investment, InvestmentId, InvestmentInput},
};
use services::{dashboard_service::DashboardService, investment_service::InvestmentService};
use tracing::info;

use errors::CoreError;

/// Main entry point for the Investment Tracker core library.
/// Holds the in-memory investment book and the services that operate on it.
///
/// There is no global state: whoever owns the tracker owns the data.
#[must_use]
pub struct InvestmentTracker {
    book: InvestmentBook,
    investment_service: InvestmentService,
    dashboard_service: DashboardService,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for InvestmentTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvestmentTracker")
            .field("investments", &self.book.len())
            .field("now", &self.clock.now())
            .finish()
    }
}

impl Default for InvestmentTracker {
    fn default() -> Self {
        Self::create_new()
    }
}

impl InvestmentTracker {
    /// Create an empty tracker on the wall clock.
    pub fn create_new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an empty tracker whose day-counts use `clock`.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            book: InvestmentBook::new(),
            investment_service: InvestmentService::new(),
            dashboard_service: DashboardService::new(),
            clock: Box::new(clock),
        }
    }

    /// Create a tracker on the wall clock, pre-loaded with the sample holdings.
    pub fn with_demo_data() -> Self {
        let mut tracker = Self::create_new();
        tracker.seed_demo_data();
        tracker
    }

    /// Append the sample holdings. Returns their new ids.
    pub fn seed_demo_data(&mut self) -> Vec<InvestmentId> {
        let ids: Vec<InvestmentId> = demo::sample_investments()
            .into_iter()
            .map(|input| self.add_investment(input))
            .collect();
        info!(count = ids.len(), "seeded demo investments");
        ids
    }

    /// The instant day-counts are computed against.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // ── CRUD ────────────────────────────────────────────────────────

    /// Add an investment. Its `days` is computed from the application date.
    pub fn add_investment(&mut self, input: InvestmentInput) -> InvestmentId {
        let now = self.clock.now();
        self.investment_service.add(&mut self.book, input, now)
    }

    /// Replace an investment's details, keeping its id. Recomputes `days`.
    pub fn update_investment(
        &mut self,
        id: InvestmentId,
        input: InvestmentInput,
    ) -> Result<(), CoreError> {
        let now = self.clock.now();
        self.investment_service.update(&mut self.book, id, input, now)
    }

    /// Remove an investment. Unknown ids are a no-op (returns `false`).
    pub fn delete_investment(&mut self, id: InvestmentId) -> bool {
        self.investment_service.delete(&mut self.book, id)
    }

    #[must_use]
    pub fn get_investment(&self, id: InvestmentId) -> Option<&Investment> {
        self.investment_service.get(&self.book, id)
    }

    /// All investments, in insertion order.
    #[must_use]
    pub fn investments(&self) -> &[Investment] {
        self.book.investments()
    }

    #[must_use]
    pub fn investment_count(&self) -> usize {
        self.book.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }

    // ── Forms ───────────────────────────────────────────────────────

    /// Validate an add-form and create the investment.
    /// Nothing changes when validation fails.
    pub fn submit_new(&mut self, form: &InvestmentForm) -> Result<InvestmentId, CoreError> {
        let input = form.validate()?;
        Ok(self.add_investment(input))
    }

    /// Validate an edit-form and apply it to `id`.
    /// Nothing changes when validation fails or the id is unknown.
    pub fn submit_edit(&mut self, id: InvestmentId, form: &InvestmentForm) -> Result<(), CoreError> {
        let input = form.validate()?;
        self.update_investment(id, input)
    }

    /// A form prefilled with the current values of `id`.
    #[must_use]
    pub fn edit_form(&self, id: InvestmentId) -> Option<InvestmentForm> {
        self.get_investment(id).map(InvestmentForm::from_investment)
    }

    // ── Lookup ──────────────────────────────────────────────────────

    /// Resolve a list position, full id, or unique id fragment.
    pub fn resolve_id(&self, reference: &str) -> Result<InvestmentId, CoreError> {
        self.investment_service.resolve(&self.book, reference)
    }

    /// Search names and yield labels (case-insensitive).
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Investment> {
        self.investment_service.search(&self.book, query)
    }

    /// Recompute every `days` value against the clock.
    /// Returns how many changed.
    pub fn refresh_days(&mut self) -> usize {
        let now = self.clock.now();
        self.investment_service.refresh_days(&mut self.book, now)
    }

    // ── Dashboard ───────────────────────────────────────────────────

    #[must_use]
    pub fn dashboard_summary(&self) -> DashboardSummary {
        self.dashboard_service.summary(&self.book)
    }

    #[must_use]
    pub fn type_distribution(&self) -> Vec<DistributionSlice> {
        self.dashboard_service.type_distribution(&self.book)
    }

    #[must_use]
    pub fn bank_distribution(&self) -> Vec<DistributionSlice> {
        self.dashboard_service.bank_distribution(&self.book)
    }

    #[must_use]
    pub fn monthly_evolution(&self) -> Vec<MonthlyEvolutionPoint> {
        self.dashboard_service.monthly_evolution(&self.book)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export all investments as a JSON array (dates as dd/mm/yyyy).
    pub fn export_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self.book.investments())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize investments to JSON: {e}")))
    }

    /// Export all investments as CSV.
    /// Columns: id, bank, type, name, yield, invested_value, current_value,
    /// application_date, maturity_date, days
    #[must_use]
    pub fn export_to_csv(&self) -> String {
        let mut csv = String::from(
            "id,bank,type,name,yield,invested_value,current_value,application_date,maturity_date,days\n",
        );
        for inv in self.book.investments() {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{},{}\n",
                inv.id(),
                inv.bank(),
                csv_field(inv.investment_type().label()),
                csv_field(inv.name()),
                csv_field(inv.yield_label().unwrap_or("")),
                inv.invested_value(),
                inv.current_value(),
                format::format_br_date(inv.application_date()),
                format::format_br_date(inv.maturity_date()),
                inv.days(),
            ));
        }
        csv
    }
}

/// Quote a CSV field if it contains a comma, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
