use serde::Serialize;

use super::investment::Investment;

/// The in-memory collection of investments, in insertion order.
///
/// Lives only as long as the process. Mutated exclusively through
/// `InvestmentService` so the day-count invariant holds.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvestmentBook {
    pub(crate) investments: Vec<Investment>,
}

impl InvestmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.investments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.investments.is_empty()
    }
}
