//! Display helpers shared by every screen: Brazilian dates, BRL amounts,
//! profitability percentages, and the keystroke filters the form inputs use.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

use crate::errors::CoreError;

/// Date layout used everywhere a date is shown or typed.
pub const BR_DATE_FORMAT: &str = "%d/%m/%Y";

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

fn br_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("static date regex is valid"))
}

// ── Dates ───────────────────────────────────────────────────────────

/// `true` if the text has the `dd/mm/yyyy` shape (digits only, no calendar check).
#[must_use]
pub fn is_br_date_format(text: &str) -> bool {
    br_date_regex().is_match(text)
}

/// Parse a `dd/mm/yyyy` date. The text must have the exact shape and name a
/// real calendar day (31/02/2024 is rejected).
pub fn parse_br_date(text: &str) -> Result<NaiveDate, CoreError> {
    if !is_br_date_format(text) {
        return Err(CoreError::InvalidDate(text.to_string()));
    }
    NaiveDate::parse_from_str(text, BR_DATE_FORMAT)
        .map_err(|_| CoreError::InvalidDate(text.to_string()))
}

#[must_use]
pub fn format_br_date(date: NaiveDate) -> String {
    date.format(BR_DATE_FORMAT).to_string()
}

/// Whole days between the application date (taken as midnight UTC) and `now`,
/// rounded up. Dates in the future count the same way, so the result is never
/// negative.
#[must_use]
pub fn calculate_days(application_date: NaiveDate, now: DateTime<Utc>) -> u32 {
    let start = application_date.and_time(NaiveTime::MIN).and_utc();
    let millis = (now - start).num_milliseconds().unsigned_abs();
    u32::try_from(millis.div_ceil(MILLIS_PER_DAY)).unwrap_or(u32::MAX)
}

/// Keystroke filter for date inputs: keeps up to 8 digits and inserts the
/// slashes as the user types (`"1501"` → `"15/01"`).
#[must_use]
pub fn mask_date_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(8).collect();
    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

// ── Money ───────────────────────────────────────────────────────────

/// Percentage change from `invested` to `current`.
///
/// Returns 0.0 when nothing was invested instead of an infinite percentage.
#[must_use]
pub fn calculate_profitability(invested: f64, current: f64) -> f64 {
    if invested == 0.0 {
        return 0.0;
    }
    ((current - invested) / invested) * 100.0
}

/// Format an amount as Brazilian reais: `R$ 10.500,00`.
///
/// The space after the symbol is a non-breaking space (U+00A0), matching
/// the pt-BR locale output. Rounds half away from zero to the cent.
#[must_use]
pub fn format_currency(value: f64) -> String {
    // `as` saturates, so NaN renders as zero.
    let cents = (value.abs() * 100.0).round() as u128;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$\u{a0}{},{:02}", group_thousands(cents / 100), cents % 100)
}

/// Short form used on chart axes: `R$ 15k`.
#[must_use]
pub fn format_compact_currency(value: f64) -> String {
    let thousands = (value / 1000.0).round() + 0.0;
    format!("R$ {thousands:.0}k")
}

/// Signed profitability label: `+5.00%`, `-1.25%`, `0.00%`.
#[must_use]
pub fn format_profitability(pct: f64) -> String {
    let rounded = (pct * 100.0).round() / 100.0 + 0.0;
    if rounded > 0.0 {
        format!("+{rounded:.2}%")
    } else {
        format!("{rounded:.2}%")
    }
}

/// Keystroke filter for amount inputs: keeps digits, `.` and `,`.
#[must_use]
pub fn sanitize_amount_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect()
}

fn group_thousands(whole: u128) -> String {
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
