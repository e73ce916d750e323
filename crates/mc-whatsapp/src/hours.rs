//! Store opening hours: Monday to Friday 7h-18h, Saturday 7h-12h.

use chrono::{Datelike, Timelike, Weekday};

pub const AFTER_HOURS_TITLE: &str = "Fora do horário comercial";
pub const OPENING_HOURS_LABEL: &str = "Seg-Sex: 7h-18h | Sáb: 7h-12h";

pub fn is_business_open(weekday: Weekday, hour: u32) -> bool {
    match weekday {
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => {
            (7..18).contains(&hour)
        }
        Weekday::Sat => (7..12).contains(&hour),
        Weekday::Sun => false,
    }
}

/// Checks a local wall-clock time; no timezone conversion happens here.
pub fn is_open_at<T: Datelike + Timelike>(time: &T) -> bool {
    is_business_open(time.weekday(), time.hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> chrono::NaiveDateTime {
        // October 2026: the 12th is a Monday.
        NaiveDate::from_ymd_opt(2026, 10, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap()
    }

    #[test]
    fn weekday_evening_is_closed() {
        assert!(!is_open_at(&at(13, 20)));
    }

    #[test]
    fn weekday_morning_is_open() {
        assert!(is_open_at(&at(14, 10)));
    }

    #[test]
    fn saturday_closes_at_noon() {
        assert!(is_open_at(&at(17, 11)));
        assert!(!is_open_at(&at(17, 13)));
        assert!(!is_open_at(&at(17, 12)));
    }

    #[test]
    fn boundaries() {
        assert!(!is_business_open(Weekday::Mon, 6));
        assert!(is_business_open(Weekday::Mon, 7));
        assert!(is_business_open(Weekday::Fri, 17));
        assert!(!is_business_open(Weekday::Fri, 18));
        for hour in 0..24 {
            assert!(!is_business_open(Weekday::Sun, hour));
        }
    }
}
