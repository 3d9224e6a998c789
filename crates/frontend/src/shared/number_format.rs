//! Утилиты форматирования чисел для карточек и таблиц

/// Groups the integer part by thousands with commas: 1234567 -> "1,234,567"
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if value < 0 {
        format!("-{}", result)
    } else {
        result
    }
}

/// Dollar amount with cents: 48295.5 -> "$48,295.50"
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, format_thousands(cents / 100), cents % 100)
}

/// Compact dollar amount: 48295.0 -> "$48.3K", 1250000.0 -> "$1.3M"
pub fn format_currency_short(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-45230), "-45,230");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(48295.5), "$48,295.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-12.5), "-$12.50");
        assert_eq!(format_currency_short(48295.0), "$48.3K");
        assert_eq!(format_currency_short(1_250_000.0), "$1.3M");
        assert_eq!(format_currency_short(99.0), "$99");
    }
}
