use chrono::NaiveDate;

use crate::models::bank::Bank;
use crate::models::investment::InvestmentInput;
use crate::models::investment_type::InvestmentType;

/// The three sample holdings a fresh shell starts with.
pub fn sample_investments() -> Vec<InvestmentInput> {
    vec![
        InvestmentInput {
            bank: Bank::Nubank,
            investment_type: InvestmentType::Cdb,
            name: "CDB Nubank 100% CDI".into(),
            yield_label: Some("100% CDI".into()),
            invested_value: 10_000.0,
            current_value: 10_500.0,
            application_date: date(2024, 1, 15),
            maturity_date: date(2025, 1, 15),
        },
        InvestmentInput {
            bank: Bank::XP,
            investment_type: InvestmentType::IpcaPlus,
            name: "Tesouro IPCA+ 2029".into(),
            yield_label: Some("IPCA + 5,5%".into()),
            invested_value: 5_000.0,
            current_value: 5_250.0,
            application_date: date(2024, 3, 10),
            maturity_date: date(2029, 5, 15),
        },
        InvestmentInput {
            bank: Bank::Inter,
            investment_type: InvestmentType::LciLca,
            name: "LCI Inter".into(),
            yield_label: Some("95% CDI".into()),
            invested_value: 15_000.0,
            current_value: 15_300.0,
            application_date: date(2024, 2, 20),
            maturity_date: date(2026, 2, 20),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
