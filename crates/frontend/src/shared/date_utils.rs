/// Utilities for date and time formatting
///
/// The current moment comes from the browser clock (`js_sys::Date`).

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Current moment as ISO 8601, e.g. "2024-03-15T14:02:26.123Z"
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// Today as "YYYY-MM-DD" (UTC)
pub fn today_iso() -> String {
    date_part(&now_iso()).to_string()
}

/// Local wall-clock time "HH:MM:SS"
pub fn time_of_day() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds()
    )
}

fn date_part(iso: &str) -> &str {
    iso.split('T').next().unwrap_or(iso)
}

/// Format ISO date string to "Mon D, YYYY"
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "Mar 15, 2024"
pub fn format_date(date_str: &str) -> String {
    let mut parts = date_part(date_str).splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return date_str.to_string();
    };
    let month_name = month
        .parse::<usize>()
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|i| MONTHS.get(i));
    match (month_name, day.parse::<u32>()) {
        (Some(name), Ok(day)) => format!("{} {}, {}", name, day, year),
        _ => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_date("2024-01-05T14:02:26.123Z"), "Jan 5, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date("2024-13-01"), "2024-13-01");
    }
}
