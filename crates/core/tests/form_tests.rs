use chrono::{NaiveDate, TimeZone, Utc};
use investment_tracker_core::clock::FixedClock;
use investment_tracker_core::form::{FormField, InvestmentForm, MAX_AMOUNT};
use investment_tracker_core::models::bank::Bank;
use investment_tracker_core::models::investment_type::InvestmentType;
use investment_tracker_core::InvestmentTracker;

fn filled_form() -> InvestmentForm {
    InvestmentForm {
        bank: "Nubank".into(),
        investment_type: "CDB".into(),
        name: "  CDB Nubank 100% CDI  ".into(),
        yield_label: "100% CDI".into(),
        invested_value: "10000".into(),
        current_value: "10500.50".into(),
        application_date: "15/01/2024".into(),
        maturity_date: "15/01/2025".into(),
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Happy path
// ═══════════════════════════════════════════════════════════════════

mod valid {
    use super::*;

    #[test]
    fn builds_input() {
        let input = filled_form().validate().unwrap();
        assert_eq!(input.bank, Bank::Nubank);
        assert_eq!(input.investment_type, InvestmentType::Cdb);
        assert_eq!(input.name, "CDB Nubank 100% CDI");
        assert_eq!(input.yield_label.as_deref(), Some("100% CDI"));
        assert_eq!(input.invested_value, 10_000.0);
        assert_eq!(input.current_value, 10_500.5);
        assert_eq!(input.application_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(input.maturity_date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn blank_yield_becomes_none() {
        let mut form = filled_form();
        form.yield_label = "   ".into();
        assert_eq!(form.validate().unwrap().yield_label, None);
    }

    #[test]
    fn choices_are_case_insensitive() {
        let mut form = filled_form();
        form.bank = "xp".into();
        form.investment_type = "lci/lca".into();
        let input = form.validate().unwrap();
        assert_eq!(input.bank, Bank::XP);
        assert_eq!(input.investment_type, InvestmentType::LciLca);
    }

    #[test]
    fn numbers_may_use_exponent_or_padding() {
        let mut form = filled_form();
        form.invested_value = " 1e3 ".into();
        form.current_value = ".5".into();
        let input = form.validate().unwrap();
        assert_eq!(input.invested_value, 1_000.0);
        assert_eq!(input.current_value, 0.5);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Required fields
// ═══════════════════════════════════════════════════════════════════

mod required {
    use super::*;

    #[test]
    fn blank_form_reports_every_required_field() {
        let errors = InvestmentForm::blank().validate().unwrap_err();
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.get(FormField::Bank), Some("Select a bank"));
        assert_eq!(errors.get(FormField::InvestmentType), Some("Select the investment type"));
        assert_eq!(errors.get(FormField::Name), Some("Name is required"));
        assert_eq!(errors.get(FormField::InvestedValue), Some("Invested value is required"));
        assert_eq!(errors.get(FormField::CurrentValue), Some("Current value is required"));
        assert_eq!(errors.get(FormField::ApplicationDate), Some("Application date is required"));
        assert_eq!(errors.get(FormField::MaturityDate), Some("Maturity date is required"));
        assert_eq!(errors.get(FormField::Yield), None);
    }

    #[test]
    fn whitespace_name_is_missing() {
        let mut form = filled_form();
        form.name = "   ".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Name), Some("Name is required"));
    }

    #[test]
    fn only_yield_is_optional() {
        for field in FormField::ALL {
            assert_eq!(field.is_required(), field != FormField::Yield);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Format rules
// ═══════════════════════════════════════════════════════════════════

mod format_rules {
    use super::*;

    #[test]
    fn rejects_non_numeric_invested_value() {
        let mut form = filled_form();
        form.invested_value = "abc".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::InvestedValue), Some("Value must be a valid number"));
    }

    #[test]
    fn rejects_non_numeric_current_value() {
        let mut form = filled_form();
        form.current_value = "1.000,50".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::CurrentValue), Some("Value must be a valid number"));
    }

    #[test]
    fn rejects_decimal_comma_and_infinity() {
        let mut form = filled_form();
        form.invested_value = "1,5".into();
        form.current_value = "inf".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn rejects_amounts_above_the_maximum() {
        let mut form = filled_form();
        form.invested_value = "1000000000000000000".into();
        form.current_value = "1e20".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(FormField::InvestedValue),
            Some("Value must not exceed R$ 1 trillion")
        );
        assert_eq!(
            errors.get(FormField::CurrentValue),
            Some("Value must not exceed R$ 1 trillion")
        );
    }

    #[test]
    fn accepts_the_maximum_amount() {
        let mut form = filled_form();
        form.invested_value = "1000000000000".into();
        let input = form.validate().unwrap();
        assert_eq!(input.invested_value, MAX_AMOUNT);
    }

    #[test]
    fn rejects_date_not_matching_dd_mm_yyyy() {
        for bad in ["2024-01-15", "1/1/2024", "15/01/24", "15.01.2024"] {
            let mut form = filled_form();
            form.application_date = bad.into();
            let errors = form.validate().unwrap_err();
            assert_eq!(
                errors.get(FormField::ApplicationDate),
                Some("Use the format dd/mm/yyyy"),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn rejects_impossible_maturity_date() {
        let mut form = filled_form();
        form.maturity_date = "31/02/2025".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::MaturityDate), Some("Not a valid calendar date"));
    }

    #[test]
    fn unknown_choices() {
        let mut form = filled_form();
        form.bank = "Itaú".into();
        form.investment_type = "Stocks".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Bank), Some("Unknown bank"));
        assert_eq!(errors.get(FormField::InvestmentType), Some("Unknown investment type"));
    }

    #[test]
    fn errors_display_in_field_order() {
        let mut form = filled_form();
        form.maturity_date.clear();
        form.bank.clear();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "bank: Select a bank; maturity date: Maturity date is required"
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Input filters via set()
// ═══════════════════════════════════════════════════════════════════

mod set {
    use super::*;

    #[test]
    fn date_fields_are_masked() {
        let mut form = InvestmentForm::blank();
        form.set(FormField::ApplicationDate, "15012024");
        assert_eq!(form.get(FormField::ApplicationDate), "15/01/2024");
    }

    #[test]
    fn amount_fields_are_sanitized() {
        let mut form = InvestmentForm::blank();
        form.set(FormField::InvestedValue, "R$ 10500");
        assert_eq!(form.get(FormField::InvestedValue), "10500");
    }

    #[test]
    fn text_fields_are_kept_verbatim() {
        let mut form = InvestmentForm::blank();
        form.set(FormField::Name, " My CDB ");
        form.set(FormField::Yield, "120% CDI");
        assert_eq!(form.get(FormField::Name), " My CDB ");
        assert_eq!(form.get(FormField::Yield), "120% CDI");
    }

    #[test]
    fn letters_in_amount_become_missing_value() {
        let mut form = filled_form();
        form.set(FormField::InvestedValue, "abc");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::InvestedValue), Some("Invested value is required"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Prefill for editing
// ═══════════════════════════════════════════════════════════════════

mod prefill {
    use super::*;

    #[test]
    fn from_investment_round_trips_through_validate() {
        let mut tracker =
            InvestmentTracker::with_clock(FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()));
        let id = tracker.submit_new(&filled_form()).unwrap();
        let inv = tracker.get_investment(id).unwrap();

        let form = InvestmentForm::from_investment(inv);
        assert_eq!(form.bank, "Nubank");
        assert_eq!(form.investment_type, "CDB");
        assert_eq!(form.invested_value, "10000");
        assert_eq!(form.current_value, "10500.5");
        assert_eq!(form.application_date, "15/01/2024");

        assert_eq!(&form.validate().unwrap(), inv.details());
    }

    #[test]
    fn missing_yield_prefills_empty() {
        let mut form = filled_form();
        form.yield_label.clear();
        let mut tracker = InvestmentTracker::create_new();
        let id = tracker.submit_new(&form).unwrap();

        let prefilled = tracker.edit_form(id).unwrap();
        assert_eq!(prefilled.yield_label, "");
    }
}
