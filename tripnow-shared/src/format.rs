//! Display formatting for reservation data, following es-ES conventions.

use chrono::{DateTime, Datelike, Utc};

/// Trip destinations the booking form offers, keyed by ISO country code.
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("ES", "España"),
    ("US", "Estados Unidos"),
    ("FR", "Francia"),
    ("DE", "Alemania"),
    ("IT", "Italia"),
    ("PT", "Portugal"),
    ("MX", "México"),
    ("AR", "Argentina"),
    ("BR", "Brasil"),
    ("CO", "Colombia"),
];

const MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `15/12/24`
    #[default]
    Short,
    /// `15 de diciembre de 2024`
    Long,
}

/// Readable country name for a code; unknown codes come back unchanged.
pub fn country_name(code: &str) -> String {
    let upper = code.to_ascii_uppercase();
    COUNTRY_CODES
        .iter()
        .find(|(known, _)| *known == upper)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Format an amount as currency, e.g. `12.345,50 €`.
///
/// Four-digit integer parts are not grouped, as in es-ES.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let grouped = if whole.len() > 4 {
        group_thousands(&whole)
    } else {
        whole
    };
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let symbol = match currency.to_ascii_uppercase().as_str() {
        "EUR" => "€".to_string(),
        "USD" => "US$".to_string(),
        other => other.to_string(),
    };

    format!("{sign}{grouped},{fraction:02} {symbol}")
}

pub fn format_date(date: &DateTime<Utc>, format: DateFormat) -> String {
    match format {
        DateFormat::Short => date.format("%d/%m/%y").to_string(),
        DateFormat::Long => format!(
            "{} de {} de {}",
            date.day(),
            MONTHS[date.month0() as usize],
            date.year()
        ),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
