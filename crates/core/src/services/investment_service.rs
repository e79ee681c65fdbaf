use chrono::{DateTime, Utc};
use tracing::debug;

use crate::errors::CoreError;
use crate::format::calculate_days;
use crate::models::book::InvestmentBook;
use crate::models::investment::{Investment, InvestmentId, InvestmentInput};

/// Minimum length of an id fragment accepted by [`InvestmentService::resolve`].
const MIN_ID_FRAGMENT_LEN: usize = 4;

/// Create/read/update/delete over an [`InvestmentBook`].
///
/// Pure business logic: no I/O and no wall clock. Callers pass `now`,
/// which is what every `days` value is computed against.
pub struct InvestmentService;

impl InvestmentService {
    pub fn new() -> Self {
        Self
    }

    /// Append a new investment and return its fresh id.
    pub fn add(
        &self,
        book: &mut InvestmentBook,
        input: InvestmentInput,
        now: DateTime<Utc>,
    ) -> InvestmentId {
        let id = InvestmentId::new();
        let days = calculate_days(input.application_date, now);
        debug!(%id, bank = %input.bank, kind = %input.investment_type, days, "adding investment");
        book.investments.push(Investment::new(id, input, days));
        id
    }

    /// Replace every user-supplied field of an investment, keeping its id and
    /// its position in the book. `days` is recomputed from the new
    /// application date.
    pub fn update(
        &self,
        book: &mut InvestmentBook,
        id: InvestmentId,
        input: InvestmentInput,
        now: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        let investment = book
            .investments
            .iter_mut()
            .find(|inv| inv.id() == id)
            .ok_or_else(|| CoreError::InvestmentNotFound(id.to_string()))?;

        let days = calculate_days(input.application_date, now);
        debug!(%id, days, "updating investment");
        investment.replace(input, days);
        Ok(())
    }

    /// Remove an investment. Unknown ids are a no-op.
    /// Returns `true` if something was removed.
    pub fn delete(&self, book: &mut InvestmentBook, id: InvestmentId) -> bool {
        let before = book.investments.len();
        book.investments.retain(|inv| inv.id() != id);
        let removed = book.investments.len() != before;
        debug!(%id, removed, "deleting investment");
        removed
    }

    pub fn get<'a>(&self, book: &'a InvestmentBook, id: InvestmentId) -> Option<&'a Investment> {
        book.investments.iter().find(|inv| inv.id() == id)
    }

    /// Recompute `days` for every investment against `now`.
    /// Returns how many values changed.
    pub fn refresh_days(&self, book: &mut InvestmentBook, now: DateTime<Utc>) -> usize {
        let mut changed = 0;
        for investment in &mut book.investments {
            let days = calculate_days(investment.application_date(), now);
            if days != investment.days() {
                investment.set_days(days);
                changed += 1;
            }
        }
        changed
    }

    /// Case-insensitive substring search over name and yield label.
    pub fn search<'a>(&self, book: &'a InvestmentBook, query: &str) -> Vec<&'a Investment> {
        let q = query.trim().to_lowercase();
        book.investments
            .iter()
            .filter(|inv| {
                inv.name().to_lowercase().contains(&q)
                    || inv.yield_label().unwrap_or("").to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Turn a user-typed reference into an id.
    ///
    /// Accepts, in order: a 1-based position in the book (`"2"`), a full id,
    /// or a fragment of at least four characters found in exactly one id.
    /// A short number past the end of the book is not found.
    pub fn resolve(&self, book: &InvestmentBook, reference: &str) -> Result<InvestmentId, CoreError> {
        let reference = reference.trim();

        if let Ok(position) = reference.parse::<usize>() {
            if let Some(inv) = position.checked_sub(1).and_then(|i| book.investments.get(i)) {
                return Ok(inv.id());
            }
            // Too short to be a fragment, so it was meant as a position.
            if reference.len() < MIN_ID_FRAGMENT_LEN {
                return Err(CoreError::InvestmentNotFound(reference.to_string()));
            }
        }

        if let Ok(id) = reference.parse::<InvestmentId>() {
            return Ok(id);
        }

        if reference.len() < MIN_ID_FRAGMENT_LEN {
            return Err(CoreError::InvalidId(format!(
                "'{reference}' is neither a list position nor an id fragment of at least {MIN_ID_FRAGMENT_LEN} characters"
            )));
        }

        let fragment = reference.to_lowercase();
        let mut matches = book
            .investments
            .iter()
            .filter(|inv| inv.id().to_string().contains(&fragment));

        match (matches.next(), matches.next()) {
            (Some(inv), None) => Ok(inv.id()),
            (Some(_), Some(_)) => Err(CoreError::InvalidId(format!(
                "'{reference}' matches more than one investment"
            ))),
            (None, _) => Err(CoreError::InvestmentNotFound(reference.to_string())),
        }
    }
}

impl Default for InvestmentService {
    fn default() -> Self {
        Self::new()
    }
}
