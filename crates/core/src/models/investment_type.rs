use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// The fixed-income product category of an investment.
///
/// Serialized with the same labels the user sees ("LCI/LCA", "IPCA+").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestmentType {
    /// Certificado de Depósito Bancário
    #[serde(rename = "CDB")]
    Cdb,
    /// Real-estate / agribusiness credit letters (tax exempt)
    #[serde(rename = "LCI/LCA")]
    LciLca,
    /// Treasury bond indexed to the SELIC rate
    #[serde(rename = "SELIC")]
    Selic,
    /// Inflation-indexed treasury bond
    #[serde(rename = "IPCA+")]
    IpcaPlus,
    /// Fixed-rate (prefixado) bond
    #[serde(rename = "PREFIX")]
    Prefix,
    /// Investment fund
    #[serde(rename = "FI")]
    Fund,
    /// Recibo de Depósito Bancário
    #[serde(rename = "RDB")]
    Rdb,
    /// Private pension plan
    #[serde(rename = "PREV")]
    Pension,
}

impl InvestmentType {
    /// Every type, in the order the investment form offers them.
    pub const ALL: [InvestmentType; 8] = [
        InvestmentType::Cdb,
        InvestmentType::LciLca,
        InvestmentType::Selic,
        InvestmentType::IpcaPlus,
        InvestmentType::Prefix,
        InvestmentType::Fund,
        InvestmentType::Rdb,
        InvestmentType::Pension,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            InvestmentType::Cdb => "CDB",
            InvestmentType::LciLca => "LCI/LCA",
            InvestmentType::Selic => "SELIC",
            InvestmentType::IpcaPlus => "IPCA+",
            InvestmentType::Prefix => "PREFIX",
            InvestmentType::Fund => "FI",
            InvestmentType::Rdb => "RDB",
            InvestmentType::Pension => "PREV",
        }
    }
}

impl std::fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InvestmentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        InvestmentType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownInvestmentType(needle.to_string()))
    }
}
