use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// The institution holding an investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bank {
    Nubank,
    Inter,
    Sofisa,
    XP,
    Icatu,
}

impl Bank {
    /// Every bank, in the order the investment form offers them.
    pub const ALL: [Bank; 5] = [Bank::Nubank, Bank::Inter, Bank::Sofisa, Bank::XP, Bank::Icatu];

    /// Display label (e.g., "Nubank", "XP").
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Bank::Nubank => "Nubank",
            Bank::Inter => "Inter",
            Bank::Sofisa => "Sofisa",
            Bank::XP => "XP",
            Bank::Icatu => "Icatu",
        }
    }

    /// Brand colour used for card strips and the bank distribution chart.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Bank::Nubank => "rgb(123, 33, 203)",
            Bank::Inter => "rgb(220, 124, 52)",
            Bank::XP => "rgb(25, 25, 25)",
            Bank::Sofisa => "rgb(81, 169, 148)",
            Bank::Icatu => "rgb(23, 48, 89)",
        }
    }

    /// Lowercase style slug (e.g., "nubank").
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            Bank::Nubank => "nubank",
            Bank::Inter => "inter",
            Bank::XP => "xp",
            Bank::Sofisa => "sofisa",
            Bank::Icatu => "icatu",
        }
    }
}

impl std::fmt::Display for Bank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Bank {
    type Err = CoreError;

    /// Case-insensitive, so the slug parses too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Bank::ALL
            .into_iter()
            .find(|b| b.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownBank(needle.to_string()))
    }
}
