use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Truncates text to `max_chars` characters, appending `...` when anything
/// was cut. Counts characters, not bytes: the announcement fields are Korean
/// and a byte cut would split a code point.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

/// Formats a backend timestamp string the way the ko-KR locale renders dates
/// (`2024. 1. 15.`). Returns `-` for missing, empty, or unparseable input.
///
/// The backend is not consistent about timestamp shapes: JSON-serialized
/// datetimes arrive as RFC 2822, raw SQL columns as `YYYY-MM-DD HH:MM:SS`,
/// and some upstream fields as RFC 3339 or a bare date.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "-".to_string();
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return "-".to_string();
    }

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| DateTime::parse_from_rfc2822(raw).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => format!("{}. {}. {}.", date.year(), date.month(), date.day()),
        Err(_) => "-".to_string(),
    }
}

/// Formats a count with thousands separators: `1234567` -> `1,234,567`.
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}
