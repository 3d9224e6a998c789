//! Форматирование относительного времени и подписей для моковых данных.

const HOUR: u32 = 60;
const DAY: u32 = 24 * HOUR;
const WEEK: u32 = 7 * DAY;

/// Compact form used in tables: `2m ago`, `3h ago`, `2d ago`, `1w ago`.
pub fn relative_short(minutes: u32) -> String {
    match minutes {
        0 => "just now".to_string(),
        m if m < HOUR => format!("{m}m ago"),
        m if m < DAY => format!("{}h ago", m / HOUR),
        m if m < WEEK => format!("{}d ago", m / DAY),
        m => format!("{}w ago", m / WEEK),
    }
}

/// Long form used in feeds: `2 minutes ago`, `1 hour ago`, `3 days ago`.
pub fn relative_long(minutes: u32) -> String {
    let (value, unit) = match minutes {
        0 => return "just now".to_string(),
        m if m < HOUR => (m, "minute"),
        m if m < DAY => (m / HOUR, "hour"),
        m if m < WEEK => (m / DAY, "day"),
        m => (m / WEEK, "week"),
    };
    if value == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{value} {unit}s ago")
    }
}

/// `Jane Cooper` → `JC`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// `"Quarterly Report: 2024"` → `quarterly_report__2024`, for download names.
pub fn file_stem(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_short() {
        assert_eq!(relative_short(2), "2m ago");
        assert_eq!(relative_short(180), "3h ago");
        assert_eq!(relative_short(2 * DAY), "2d ago");
        assert_eq!(relative_short(WEEK), "1w ago");
    }

    #[test]
    fn test_relative_long() {
        assert_eq!(relative_long(15), "15 minutes ago");
        assert_eq!(relative_long(60), "1 hour ago");
        assert_eq!(relative_long(3 * DAY), "3 days ago");
        assert_eq!(relative_long(0), "just now");
    }

    #[test]
    fn test_initials_and_stem() {
        assert_eq!(initials("Jane Cooper"), "JC");
        assert_eq!(initials("leslie"), "L");
        assert_eq!(file_stem("Q1 Plan!"), "q1_plan_");
    }
}
