//! The add/edit investment form: raw text per field, input filters, and
//! validation into an `InvestmentInput`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::format::{
    format_br_date, is_br_date_format, mask_date_input, parse_br_date, sanitize_amount_input,
};
use crate::models::bank::Bank;
use crate::models::investment::{Investment, InvestmentInput};
use crate::models::investment_type::InvestmentType;

/// Form fields, in the order they are shown and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormField {
    Bank,
    InvestmentType,
    Name,
    Yield,
    InvestedValue,
    CurrentValue,
    ApplicationDate,
    MaturityDate,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Bank,
        FormField::InvestmentType,
        FormField::Name,
        FormField::Yield,
        FormField::InvestedValue,
        FormField::CurrentValue,
        FormField::ApplicationDate,
        FormField::MaturityDate,
    ];

    /// Human label, with `*` on required fields.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Bank => "Bank *",
            FormField::InvestmentType => "Investment type *",
            FormField::Name => "Investment name *",
            FormField::Yield => "Yield",
            FormField::InvestedValue => "Invested value (R$) *",
            FormField::CurrentValue => "Current value (R$) *",
            FormField::ApplicationDate => "Application date *",
            FormField::MaturityDate => "Maturity date *",
        }
    }

    /// Input hint shown next to the prompt.
    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Bank => "Nubank, Inter, Sofisa, XP, Icatu",
            FormField::InvestmentType => "CDB, LCI/LCA, SELIC, IPCA+, PREFIX, FI, RDB, PREV",
            FormField::Name => "e.g. CDB Banco XYZ 120% CDI",
            FormField::Yield => "e.g. 120% CDI, IPCA + 5%, 12% a.a.",
            FormField::InvestedValue | FormField::CurrentValue => "0.00",
            FormField::ApplicationDate | FormField::MaturityDate => "dd/mm/yyyy",
        }
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Yield)
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormField::Bank => "bank",
            FormField::InvestmentType => "type",
            FormField::Name => "name",
            FormField::Yield => "yield",
            FormField::InvestedValue => "invested value",
            FormField::CurrentValue => "current value",
            FormField::ApplicationDate => "application date",
            FormField::MaturityDate => "maturity date",
        };
        f.write_str(name)
    }
}

/// Inline validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: FormField, message: &str) {
        self.0.entry(field).or_insert_with(|| message.to_string());
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Raw text of the investment form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentForm {
    pub bank: String,
    pub investment_type: String,
    pub name: String,
    pub yield_label: String,
    pub invested_value: String,
    pub current_value: String,
    pub application_date: String,
    pub maturity_date: String,
}

impl InvestmentForm {
    /// Empty form for the add flow.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Form prefilled from an existing record, for the edit flow.
    pub fn from_investment(investment: &Investment) -> Self {
        let details = investment.details();
        Self {
            bank: details.bank.to_string(),
            investment_type: details.investment_type.to_string(),
            name: details.name.clone(),
            yield_label: details.yield_label.clone().unwrap_or_default(),
            invested_value: details.invested_value.to_string(),
            current_value: details.current_value.to_string(),
            application_date: format_br_date(details.application_date),
            maturity_date: format_br_date(details.maturity_date),
        }
    }

    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Bank => &self.bank,
            FormField::InvestmentType => &self.investment_type,
            FormField::Name => &self.name,
            FormField::Yield => &self.yield_label,
            FormField::InvestedValue => &self.invested_value,
            FormField::CurrentValue => &self.current_value,
            FormField::ApplicationDate => &self.application_date,
            FormField::MaturityDate => &self.maturity_date,
        }
    }

    /// Store what the user typed, through the same filters the inputs apply
    /// on every keystroke: amounts keep digits, `.` and `,`; dates get masked.
    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Bank => self.bank = value.to_string(),
            FormField::InvestmentType => self.investment_type = value.to_string(),
            FormField::Name => self.name = value.to_string(),
            FormField::Yield => self.yield_label = value.to_string(),
            FormField::InvestedValue => self.invested_value = sanitize_amount_input(value),
            FormField::CurrentValue => self.current_value = sanitize_amount_input(value),
            FormField::ApplicationDate => self.application_date = mask_date_input(value),
            FormField::MaturityDate => self.maturity_date = mask_date_input(value),
        }
    }

    /// Check every field and build the input on success.
    ///
    /// All failing fields are reported at once; per field, the first failing
    /// rule wins (missing, then malformed).
    pub fn validate(&self) -> Result<InvestmentInput, FormErrors> {
        let mut errors = FormErrors::default();

        let bank = match self.bank.trim() {
            "" => {
                errors.insert(FormField::Bank, "Select a bank");
                None
            }
            text => match text.parse::<Bank>() {
                Ok(bank) => Some(bank),
                Err(_) => {
                    errors.insert(FormField::Bank, "Unknown bank");
                    None
                }
            },
        };

        let investment_type = match self.investment_type.trim() {
            "" => {
                errors.insert(FormField::InvestmentType, "Select the investment type");
                None
            }
            text => match text.parse::<InvestmentType>() {
                Ok(investment_type) => Some(investment_type),
                Err(_) => {
                    errors.insert(FormField::InvestmentType, "Unknown investment type");
                    None
                }
            },
        };

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(FormField::Name, "Name is required");
        }

        let invested_value = validate_amount(
            &self.invested_value,
            FormField::InvestedValue,
            "Invested value is required",
            &mut errors,
        );
        let current_value = validate_amount(
            &self.current_value,
            FormField::CurrentValue,
            "Current value is required",
            &mut errors,
        );
        let application_date = validate_date(
            &self.application_date,
            FormField::ApplicationDate,
            "Application date is required",
            &mut errors,
        );
        let maturity_date = validate_date(
            &self.maturity_date,
            FormField::MaturityDate,
            "Maturity date is required",
            &mut errors,
        );

        match (bank, investment_type, invested_value, current_value, application_date, maturity_date) {
            (
                Some(bank),
                Some(investment_type),
                Some(invested_value),
                Some(current_value),
                Some(application_date),
                Some(maturity_date),
            ) if errors.is_empty() => {
                let yield_label = self.yield_label.trim();
                Ok(InvestmentInput {
                    bank,
                    investment_type,
                    name: name.to_string(),
                    yield_label: (!yield_label.is_empty()).then(|| yield_label.to_string()),
                    invested_value,
                    current_value,
                    application_date,
                    maturity_date,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Largest amount a form accepts. Cents stay exact in an `f64` below this.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

fn validate_amount(
    raw: &str,
    field: FormField,
    required_message: &str,
    errors: &mut FormErrors,
) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        errors.insert(field, required_message);
        return None;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value.abs() > MAX_AMOUNT => {
            errors.insert(field, "Value must not exceed R$ 1 trillion");
            None
        }
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            errors.insert(field, "Value must be a valid number");
            None
        }
    }
}

fn validate_date(
    raw: &str,
    field: FormField,
    required_message: &str,
    errors: &mut FormErrors,
) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        errors.insert(field, required_message);
        return None;
    }
    if !is_br_date_format(text) {
        errors.insert(field, "Use the format dd/mm/yyyy");
        return None;
    }
    match parse_br_date(text) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(field, "Not a valid calendar date");
            None
        }
    }
}
