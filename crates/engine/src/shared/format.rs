use contracts::dashboards::d400_operations_overview::CategoryShare;
use contracts::shared::indicators::{ChangeDirection, PercentChange};

/// Padding added to category bar widths. Not clamped at 100.
pub const SHARE_BAR_PADDING: u32 = 15;

const CURRENCY_SYMBOL: &str = "$";

/// Форматирует число с разделителями тысяч (запятыми)
///
/// # Примеры
/// ```
/// use engine::shared::format::format_thousands;
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// assert_eq!(format_thousands(42), "42");
/// ```
pub fn format_thousands(n: u64) -> String {
    group_digits(&n.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Arrow and absolute magnitude for a tile's change line.
///
/// Zero is shown as growth. The magnitude keeps the shortest
/// representation of the number, so `15.0` becomes `"15"`.
pub fn format_percent_change(percent: f64) -> PercentChange {
    let direction = if percent >= 0.0 {
        ChangeDirection::Up
    } else {
        ChangeDirection::Down
    };
    PercentChange {
        direction,
        magnitude: percent.abs().to_string(),
    }
}

/// Category revenue as a currency string, e.g. "$158,000"
pub fn format_currency_share(share: &CategoryShare) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_thousands(share.revenue))
}

/// Groups the integer part of a revenue total and keeps its cents as-is.
///
/// `185005.24` becomes `"185,005.24"`.
pub fn format_revenue_total(value: f64) -> String {
    let raw = value.abs().to_string();
    let (integer, fraction) = match raw.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (raw.as_str(), None),
    };
    let sign = if value < 0.0 { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, group_digits(integer), fraction),
        None => format!("{}{}", sign, group_digits(integer)),
    }
}

/// Width of a category bar in percent of the track
pub fn share_bar_width(share_percent: u32) -> u32 {
    share_percent + SHARE_BAR_PADDING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(42), "42");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1284), "1,284");
        assert_eq!(format_thousands(1000000), "1,000,000");
        assert_eq!(format_thousands(1234567890), "1,234,567,890");
    }

    #[test]
    fn test_format_percent_change() {
        let down = format_percent_change(-2.4);
        assert_eq!(down.direction, ChangeDirection::Down);
        assert_eq!(down.arrow(), '↓');
        assert_eq!(down.magnitude, "2.4");

        let flat = format_percent_change(0.0);
        assert_eq!(flat.arrow(), '↑');
        assert_eq!(flat.magnitude, "0");

        let up = format_percent_change(15.0);
        assert_eq!(up.direction, ChangeDirection::Up);
        assert_eq!(up.magnitude, "15");
        assert_eq!(format_percent_change(12.5).magnitude, "12.5");
    }

    #[test]
    fn test_format_currency_share() {
        let share = CategoryShare {
            category: "Electronics".to_string(),
            share_percent: 35,
            revenue: 158000,
        };
        assert_eq!(format_currency_share(&share), "$158,000");
    }

    #[test]
    fn test_format_revenue_total() {
        assert_eq!(format_revenue_total(185005.24), "185,005.24");
        assert_eq!(format_revenue_total(403192.13), "403,192.13");
        assert_eq!(format_revenue_total(1500.0), "1,500");
        assert_eq!(format_revenue_total(999.5), "999.5");
    }

    #[test]
    fn test_share_bar_width_is_unclamped() {
        assert_eq!(share_bar_width(35), 50);
        assert_eq!(share_bar_width(90), 105);
    }
}
