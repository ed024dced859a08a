//! Replacement-cost estimate: 1.5× annual salary.

use serde::Serialize;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Industry rule of thumb for the cost of replacing an employee,
/// as a multiple of annual salary.
pub const REPLACEMENT_MULTIPLIER: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplacementCost {
    pub monthly_income: u32,
    pub annual_salary: f64,
    pub multiplier: f64,
    pub amount: f64,
    /// `amount` as currency, e.g. `$90,000.00`.
    pub display: String,
}

impl ReplacementCost {
    /// Always computed, whatever the predicted label.
    pub fn estimate(monthly_income: u32, currency_symbol: &str) -> Self {
        let annual_salary = f64::from(monthly_income) * MONTHS_PER_YEAR;
        let amount = annual_salary * REPLACEMENT_MULTIPLIER;
        Self {
            monthly_income,
            annual_salary,
            multiplier: REPLACEMENT_MULTIPLIER,
            amount,
            display: format_currency(amount, currency_symbol),
        }
    }
}

/// Two decimals, comma thousands separators.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_thousand_a_month() {
        let cost = ReplacementCost::estimate(5000, "$");
        assert_eq!(cost.annual_salary, 60000.0);
        assert_eq!(cost.amount, 90000.0);
        assert_eq!(cost.display, "$90,000.00");
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(999.5, "$"), "$999.50");
        assert_eq!(format_currency(1000.0, "$"), "$1,000.00");
        assert_eq!(format_currency(360000.0, "$"), "$360,000.00");
        assert_eq!(format_currency(1234567.891, "EUR "), "EUR 1,234,567.89");
        assert_eq!(format_currency(-2500.0, "$"), "-$2,500.00");
    }
}
