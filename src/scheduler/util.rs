use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday().num_days_from_sunday(), 0 | 6)
}

/// Veille et lendemain ; `None` aux bornes du calendrier.
pub(crate) fn adjacent_days(date: NaiveDate) -> (Option<NaiveDate>, Option<NaiveDate>) {
    (date.pred_opt(), date.succ_opt())
}

/// Durée en heures entre deux heures murales, en passant minuit si `end <= start`.
pub(crate) fn span_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let start_secs = start.num_seconds_from_midnight();
    let mut end_secs = end.num_seconds_from_midnight();
    if end <= start {
        end_secs += SECONDS_PER_DAY;
    }
    f64::from(end_secs - start_secs) / 3600.0
}

/// Arrondi à une décimale.
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn span_hours_handles_midnight() {
        assert_eq!(span_hours(t(8, 0), t(16, 30)), 8.5);
        assert_eq!(span_hours(t(22, 0), t(6, 0)), 8.0);
        assert_eq!(span_hours(t(9, 0), t(9, 0)), 24.0);
    }

    #[test]
    fn adjacent_days_cross_month_and_year() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let (prev, next) = adjacent_days(d);
        assert_eq!(prev, NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(next, NaiveDate::from_ymd_opt(2025, 1, 2));
    }

    #[test]
    fn weekend_detection() {
        // 2025-10-04 samedi, 2025-10-05 dimanche, 2025-10-06 lundi
        assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 10, 4).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 10, 5).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2025, 10, 6).unwrap()));
    }

    #[test]
    fn round_tenth_keeps_one_decimal() {
        assert_eq!(round_tenth(33.333), 33.3);
        assert_eq!(round_tenth(2.25), 2.3);
        assert_eq!(round_tenth(0.0), 0.0);
    }
}
