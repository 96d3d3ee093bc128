//! Formatting helpers shared across output surfaces.

use chrono::NaiveDate;

/// Round to the 2-decimal policy used at storage boundaries.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an hour count for display (e.g., "2.5h", "12h").
pub fn format_hours(hours: f64) -> String {
    if (hours - hours.round()).abs() < f64::EPSILON {
        format!("{}h", hours as i64)
    } else {
        format!("{:.1}h", hours)
    }
}

/// Format a date for display (e.g., "Mar 04").
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.239), 1.24);
        assert_eq!(round2(2.0), 2.0);
        assert_eq!(round2(0.333333), 0.33);
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(2.0), "2h");
        assert_eq!(format_hours(2.5), "2.5h");
        assert_eq!(format_hours(0.25), "0.2h");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert_eq!(format_date(date), "Mar 04");
    }
}
