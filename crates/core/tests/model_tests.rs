use chrono::{NaiveDate, TimeZone, Utc};
use investment_tracker_core::clock::FixedClock;
use investment_tracker_core::errors::CoreError;
use investment_tracker_core::models::bank::Bank;
use investment_tracker_core::models::investment::{InvestmentId, InvestmentInput};
use investment_tracker_core::models::investment_type::InvestmentType;
use investment_tracker_core::InvestmentTracker;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn tracker() -> InvestmentTracker {
    InvestmentTracker::with_clock(FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()))
}

fn sample_input() -> InvestmentInput {
    InvestmentInput {
        bank: Bank::Sofisa,
        investment_type: InvestmentType::Rdb,
        name: "RDB Sofisa Direto".into(),
        yield_label: None,
        invested_value: 2_000.0,
        current_value: 1_900.0,
        application_date: d(2025, 5, 1),
        maturity_date: d(2027, 5, 1),
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Bank
// ═══════════════════════════════════════════════════════════════════

mod bank {
    use super::*;

    #[test]
    fn all_lists_five_banks_in_form_order() {
        assert_eq!(
            Bank::ALL,
            [Bank::Nubank, Bank::Inter, Bank::Sofisa, Bank::XP, Bank::Icatu]
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Bank::Nubank.to_string(), "Nubank");
        assert_eq!(Bank::XP.to_string(), "XP");
    }

    #[test]
    fn brand_colors() {
        assert_eq!(Bank::Nubank.color(), "rgb(123, 33, 203)");
        assert_eq!(Bank::Inter.color(), "rgb(220, 124, 52)");
        assert_eq!(Bank::XP.color(), "rgb(25, 25, 25)");
        assert_eq!(Bank::Sofisa.color(), "rgb(81, 169, 148)");
        assert_eq!(Bank::Icatu.color(), "rgb(23, 48, 89)");
    }

    #[test]
    fn slugs_are_lowercase_labels() {
        for bank in Bank::ALL {
            assert_eq!(bank.slug(), bank.label().to_lowercase());
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("nubank".parse::<Bank>().unwrap(), Bank::Nubank);
        assert_eq!("  xp ".parse::<Bank>().unwrap(), Bank::XP);
        assert_eq!("ICATU".parse::<Bank>().unwrap(), Bank::Icatu);
    }

    #[test]
    fn unknown_bank_is_an_error() {
        let err = "Itaú".parse::<Bank>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownBank(ref s) if s == "Itaú"));
    }

    #[test]
    fn serde_uses_label() {
        assert_eq!(serde_json::to_string(&Bank::XP).unwrap(), "\"XP\"");
        let back: Bank = serde_json::from_str("\"Sofisa\"").unwrap();
        assert_eq!(back, Bank::Sofisa);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  InvestmentType
// ═══════════════════════════════════════════════════════════════════

mod investment_type {
    use super::*;

    #[test]
    fn all_lists_eight_types_in_form_order() {
        let labels: Vec<&str> = InvestmentType::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            vec!["CDB", "LCI/LCA", "SELIC", "IPCA+", "PREFIX", "FI", "RDB", "PREV"]
        );
    }

    #[test]
    fn parses_labels_with_symbols() {
        assert_eq!("LCI/LCA".parse::<InvestmentType>().unwrap(), InvestmentType::LciLca);
        assert_eq!("ipca+".parse::<InvestmentType>().unwrap(), InvestmentType::IpcaPlus);
        assert_eq!("prev".parse::<InvestmentType>().unwrap(), InvestmentType::Pension);
    }

    #[test]
    fn unknown_type_is_an_error() {
        assert!(matches!(
            "Stocks".parse::<InvestmentType>(),
            Err(CoreError::UnknownInvestmentType(_))
        ));
    }

    #[test]
    fn serde_uses_display_label() {
        assert_eq!(serde_json::to_string(&InvestmentType::LciLca).unwrap(), "\"LCI/LCA\"");
        let back: InvestmentType = serde_json::from_str("\"IPCA+\"").unwrap();
        assert_eq!(back, InvestmentType::IpcaPlus);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  InvestmentId
// ═══════════════════════════════════════════════════════════════════

mod investment_id {
    use super::*;

    #[test]
    fn fresh_ids_are_unique() {
        let a = InvestmentId::new();
        let b = InvestmentId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_are_timestamp_based() {
        let id = InvestmentId::new();
        assert_eq!(id.as_uuid().get_version_num(), 7);
    }

    #[test]
    fn parses_its_own_display() {
        let id = InvestmentId::new();
        let back: InvestmentId = id.to_string().parse().unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn garbage_is_invalid() {
        assert!(matches!("not-an-id".parse::<InvestmentId>(), Err(CoreError::InvalidId(_))));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  InvestmentInput serde
// ═══════════════════════════════════════════════════════════════════

mod input_serde {
    use super::*;

    #[test]
    fn dates_serialize_as_dd_mm_yyyy() {
        let json = serde_json::to_value(sample_input()).unwrap();
        assert_eq!(json["application_date"], "01/05/2025");
        assert_eq!(json["maturity_date"], "01/05/2027");
        assert_eq!(json["type"], "RDB");
    }

    #[test]
    fn missing_yield_is_omitted_and_defaults_to_none() {
        let json = serde_json::to_value(sample_input()).unwrap();
        assert!(json.get("yield").is_none());

        let back: InvestmentInput = serde_json::from_value(json).unwrap();
        assert_eq!(back.yield_label, None);
    }

    #[test]
    fn rejects_iso_dates() {
        let mut json = serde_json::to_value(sample_input()).unwrap();
        json["application_date"] = "2025-05-01".into();
        assert!(serde_json::from_value::<InvestmentInput>(json).is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Investment
// ═══════════════════════════════════════════════════════════════════

mod investment {
    use super::*;

    #[test]
    fn accessors_mirror_details() {
        let mut t = tracker();
        let id = t.add_investment(sample_input());
        let inv = t.get_investment(id).unwrap();

        assert_eq!(inv.id(), id);
        assert_eq!(inv.bank(), Bank::Sofisa);
        assert_eq!(inv.investment_type(), InvestmentType::Rdb);
        assert_eq!(inv.name(), "RDB Sofisa Direto");
        assert_eq!(inv.yield_label(), None);
        assert_eq!(inv.application_date(), d(2025, 5, 1));
        assert_eq!(inv.maturity_date(), d(2027, 5, 1));
    }

    #[test]
    fn loss_has_negative_profit() {
        let mut t = tracker();
        let id = t.add_investment(sample_input());
        let inv = t.get_investment(id).unwrap();

        assert!((inv.profit() - -100.0).abs() < 1e-9);
        assert!((inv.profitability() - -5.0).abs() < 1e-9);
        assert!(!inv.is_profit());
    }

    #[test]
    fn serializes_flat_with_id_and_days() {
        let mut t = tracker();
        let id = t.add_investment(sample_input());
        let json = serde_json::to_value(t.get_investment(id).unwrap()).unwrap();

        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["bank"], "Sofisa");
        assert_eq!(json["days"], 32);
    }
}
