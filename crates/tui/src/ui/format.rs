//! Turns raw engine values into display strings.
//!
//! Amounts use Indian digit grouping (`₹1,23,456.78`), timestamps the
//! `dd/mm/yyyy, h:mm:ss am` layout, both in the configured symbol/timezone.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use engine::Money;

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

#[derive(Debug, Clone)]
pub struct Formatter {
    symbol: String,
    timezone: Tz,
}

impl Formatter {
    pub fn new(symbol: impl Into<String>, timezone: Tz) -> Self {
        Self {
            symbol: symbol.into(),
            timezone,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let timezone = config
            .timezone
            .parse::<Tz>()
            .map_err(|_| AppError::Timezone(config.timezone.clone()))?;
        Ok(Self::new(config.currency_symbol.clone(), timezone))
    }

    /// `-₹1,23,456.78` style string, sign first.
    pub fn money(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let abs = amount.minor().unsigned_abs();
        let major = group_indian(&(abs / 100).to_string());
        let minor = abs % 100;
        format!("{sign}{}{major}.{minor:02}", self.symbol)
    }

    pub fn timestamp(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.timezone)
            .format("%d/%m/%Y, %-I:%M:%S %P")
            .to_string()
    }
}

/// Groups the last three digits, then every two: `1234567` -> `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn rupees() -> Formatter {
        Formatter::new("₹", chrono_tz::Asia::Kolkata)
    }

    #[test]
    fn groups_digits_the_indian_way() {
        assert_eq!(group_indian("0"), "0");
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("123456"), "1,23,456");
        assert_eq!(group_indian("1234567"), "12,34,567");
        assert_eq!(group_indian("12345678"), "1,23,45,678");
    }

    #[test]
    fn money_has_symbol_and_two_decimals() {
        let fmt = rupees();
        assert_eq!(fmt.money(Money::ZERO), "₹0.00");
        assert_eq!(fmt.money(Money::new(10_000)), "₹100.00");
        assert_eq!(fmt.money(Money::new(12_345_678)), "₹1,23,456.78");
        assert_eq!(fmt.money(Money::new(-3_050)), "-₹30.50");
    }

    #[test]
    fn timestamp_uses_configured_timezone() {
        let fmt = rupees();
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 5).unwrap();
        assert_eq!(fmt.timestamp(at), "15/01/2024, 3:00:05 pm");
    }

    #[test]
    fn from_config_rejects_unknown_timezone() {
        let config = AppConfig {
            timezone: "Mars/Olympus".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            Formatter::from_config(&config),
            Err(AppError::Timezone(_))
        ));
    }
}
