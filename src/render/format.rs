//! Value formatting shared by the views

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::api::Sale;

/// Two-decimal money amount; a missing or non-finite value renders as `0.00`
pub fn money(value: Option<f64>) -> String {
    let value = value.filter(|v| v.is_finite()).unwrap_or(0.0);
    format!("{:.2}", value)
}

/// Calendar date as `dd/mm/yyyy`, the pt-BR short date
///
/// Accepts RFC 2822 (the backend's default datetime encoding), RFC 3339 and
/// plain `YYYY-MM-DD[ HH:MM:SS]`. The date is taken in the offset the string
/// carries.
pub fn date_pt_br(raw: &str) -> Option<String> {
    parse_date(raw).map(|date| date.format("%d/%m/%Y").to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Date line for a dashboard sale
///
/// Falls back to the server's preformatted text, then to the raw value.
pub fn sale_date(sale: &Sale) -> String {
    sale.data_venda
        .as_deref()
        .and_then(date_pt_br)
        .or_else(|| sale.data_formatada.clone())
        .or_else(|| sale.data_venda.clone())
        .unwrap_or_else(|| "N/A".to_string())
}
