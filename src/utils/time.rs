use chrono::DateTime;

/// Render an API timestamp as a short human date. The backend emits RFC 3339
/// with or without a timezone suffix; anything unparseable is shown as-is.
pub fn format_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%b %-d, %Y").to_string();
    }
    // Naive timestamps (no offset) come from the backend's utcnow()
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(format_date("2024-11-02T09:30:00Z"), "Nov 2, 2024");
    }

    #[test]
    fn formats_naive_backend_timestamps() {
        assert_eq!(format_date("2024-11-01T08:00:00.123456"), "Nov 1, 2024");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
