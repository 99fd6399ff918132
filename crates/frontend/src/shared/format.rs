//! Number and date formatting shared by tiles, tables and charts.

use chrono::NaiveDate;
use contracts::display::ValueFormat;

/// Formats a number with a thousands separator (space) and the given number
/// of decimals.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let mut parts = formatted.splitn(2, '.');
    let integer_part = parts.next().unwrap_or("0");
    let decimal_part = parts.next();

    // Insert a space every 3 digits from the end of the integer part.
    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(' ');
        }
        grouped.push(*c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", grouped, d),
        None => grouped,
    }
}

/// Integer with a thousands separator.
pub fn format_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Money in major units, 2 decimals, thousands separated.
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Renders a value according to its `ValueFormat` contract.
pub fn format_value(value: f64, format: &ValueFormat) -> String {
    match format {
        ValueFormat::Money { currency } => format!("{} {}", currency, format_int(value)),
        ValueFormat::Number { decimals } => format_number_with_decimals(value, *decimals),
        ValueFormat::Percent { decimals } => {
            format!("{}%", format_number_with_decimals(value, *decimals))
        }
        ValueFormat::Integer => format_int(value),
    }
}

/// Signed percent with a direction arrow, e.g. `▲ 13.3% vs prev`.
pub fn format_change_percent(value: f64) -> String {
    let arrow = if value >= 0.0 { "▲" } else { "▼" };
    format!("{} {:.1}% vs prev", arrow, value.abs())
}

/// `"2025-01"` → `"Jan 2025"`. Falls back to the raw label on parse failure.
pub fn format_cohort_label(label: &str) -> String {
    NaiveDate::parse_from_str(&format!("{}-01", label), "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| label.to_string())
}

/// `"2025-01-08"` → `"Jan 8"`. Chart axis labels.
pub fn format_month_day(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%b %-d").to_string())
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(5_000_000.0), "5 000 000");
        assert_eq!(format_int(340.0), "340");
        assert_eq!(format_int(-1234.0), "-1 234");
    }

    #[test]
    fn test_format_value_by_contract() {
        assert_eq!(
            format_value(17_000.0, &ValueFormat::Money { currency: "USD".to_string() }),
            "USD 17 000"
        );
        assert_eq!(format_value(4.216, &ValueFormat::Percent { decimals: 1 }), "4.2%");
        assert_eq!(format_value(10.26, &ValueFormat::Number { decimals: 1 }), "10.3");
        assert_eq!(format_value(340.0, &ValueFormat::Integer), "340");
    }

    #[test]
    fn test_format_change_percent() {
        assert_eq!(format_change_percent(13.3), "▲ 13.3% vs prev");
        assert_eq!(format_change_percent(-2.05), "▼ 2.1% vs prev");
    }

    #[test]
    fn test_format_cohort_label() {
        assert_eq!(format_cohort_label("2025-01"), "Jan 2025");
        assert_eq!(format_cohort_label("not-a-month"), "not-a-month");
    }

    #[test]
    fn test_format_month_day() {
        assert_eq!(format_month_day("2025-01-08"), "Jan 8");
        assert_eq!(format_month_day("invalid"), "invalid");
    }
}
