use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::bank::Bank;
use super::investment_type::InvestmentType;
use crate::errors::CoreError;
use crate::format::calculate_profitability;

/// Identifier of an investment. UUID v7, so ids sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvestmentId(Uuid);

impl InvestmentId {
    /// Generate a fresh timestamp-based id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for InvestmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for InvestmentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InvestmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for InvestmentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

/// Everything the user supplies for an investment: the record minus
/// `id` and `days`. Produced by the form, consumed by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    pub bank: Bank,

    #[serde(rename = "type")]
    pub investment_type: InvestmentType,

    /// Display name (e.g., "CDB Nubank 100% CDI")
    pub name: String,

    /// Free-text yield label (e.g., "100% CDI", "IPCA + 5,5%")
    #[serde(default, rename = "yield", skip_serializing_if = "Option::is_none")]
    pub yield_label: Option<String>,

    pub invested_value: f64,

    pub current_value: f64,

    #[serde(with = "br_date")]
    pub application_date: NaiveDate,

    #[serde(with = "br_date")]
    pub maturity_date: NaiveDate,
}

/// A tracked investment.
///
/// Fields are read-only outside the crate: `days` is derived from the
/// application date by the store on every create or update and cannot be
/// set on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Investment {
    id: InvestmentId,

    #[serde(flatten)]
    details: InvestmentInput,

    days: u32,
}

impl Investment {
    pub(crate) fn new(id: InvestmentId, details: InvestmentInput, days: u32) -> Self {
        Self { id, details, days }
    }

    /// Swap in new details and the day-count derived from them. The id stays.
    pub(crate) fn replace(&mut self, details: InvestmentInput, days: u32) {
        self.details = details;
        self.days = days;
    }

    pub(crate) fn set_days(&mut self, days: u32) {
        self.days = days;
    }

    #[must_use]
    pub fn id(&self) -> InvestmentId {
        self.id
    }

    /// The user-supplied part of the record.
    #[must_use]
    pub fn details(&self) -> &InvestmentInput {
        &self.details
    }

    /// Whole days elapsed since the application date, as of the last create,
    /// update or refresh.
    #[must_use]
    pub fn days(&self) -> u32 {
        self.days
    }

    #[must_use]
    pub fn bank(&self) -> Bank {
        self.details.bank
    }

    #[must_use]
    pub fn investment_type(&self) -> InvestmentType {
        self.details.investment_type
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.details.name
    }

    #[must_use]
    pub fn yield_label(&self) -> Option<&str> {
        self.details.yield_label.as_deref()
    }

    #[must_use]
    pub fn invested_value(&self) -> f64 {
        self.details.invested_value
    }

    #[must_use]
    pub fn current_value(&self) -> f64 {
        self.details.current_value
    }

    #[must_use]
    pub fn application_date(&self) -> NaiveDate {
        self.details.application_date
    }

    #[must_use]
    pub fn maturity_date(&self) -> NaiveDate {
        self.details.maturity_date
    }

    /// Absolute gain (negative for a loss).
    #[must_use]
    pub fn profit(&self) -> f64 {
        self.details.current_value - self.details.invested_value
    }

    /// Percentage change from invested to current value.
    #[must_use]
    pub fn profitability(&self) -> f64 {
        calculate_profitability(self.details.invested_value, self.details.current_value)
    }

    #[must_use]
    pub fn is_profit(&self) -> bool {
        self.profitability() > 0.0
    }
}

/// Serde adapter writing dates as `dd/mm/yyyy`.
pub mod br_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::format::{format_br_date, parse_br_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_br_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_br_date(&text).map_err(serde::de::Error::custom)
    }
}
