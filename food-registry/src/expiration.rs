use chrono::NaiveDate;
use derive_more::Display;
use serde::Serialize;

/// Days left until the food expires, counted in whole calendar days.
///
/// Negative once the expiration date has passed, `0` on the expiration date itself.
pub fn days_remaining(expiration_date: NaiveDate, today: NaiveDate) -> i64 {
    (expiration_date - today).num_days()
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpirationStatus {
    #[display("EXPIRED")]
    Expired,
    #[display("EXPIRING_SOON")]
    ExpiringSoon,
    #[display("FRESH")]
    Fresh,
}

/// Foods expiring within this many days are flagged as expiring soon.
pub const EXPIRING_SOON_DAYS: i64 = 3;

pub fn status_of(days_remaining: i64) -> ExpirationStatus {
    if days_remaining < 0 {
        ExpirationStatus::Expired
    } else if days_remaining <= EXPIRING_SOON_DAYS {
        ExpirationStatus::ExpiringSoon
    } else {
        ExpirationStatus::Fresh
    }
}

impl ExpirationStatus {
    /// Badge color for the status, as a hex RGB string.
    pub fn color(self) -> &'static str {
        match self {
            ExpirationStatus::Expired => "#ef4444",
            ExpirationStatus::ExpiringSoon => "#f59e0b",
            ExpirationStatus::Fresh => "#10b981",
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn counts_calendar_days() {
        let expiration = date(2024, 11, 20);

        assert_eq!(days_remaining(expiration, date(2024, 11, 10)), 10);
        assert_eq!(days_remaining(expiration, date(2024, 11, 20)), 0);
        assert_eq!(days_remaining(expiration, date(2024, 11, 21)), -1);
        assert_eq!(days_remaining(date(2025, 3, 1), date(2025, 2, 28)), 1);
        assert_eq!(days_remaining(date(2024, 3, 1), date(2024, 2, 28)), 2);
    }

    #[test]
    fn is_stable_for_the_same_inputs() {
        let expiration = date(2025, 1, 10);
        let today = date(2025, 1, 3);
        assert_eq!(
            days_remaining(expiration, today),
            days_remaining(expiration, today)
        );
    }

    #[test]
    fn strictly_decreases_as_days_pass() {
        let expiration = date(2025, 1, 10);
        let mut today = date(2024, 12, 20);
        let mut previous = days_remaining(expiration, today);

        for _ in 0..40 {
            today = today + Days::new(1);
            let current = days_remaining(expiration, today);
            assert_eq!(current, previous - 1);
            previous = current;
        }
    }

    #[test]
    fn status_boundaries() {
        assert_eq!(status_of(-1), ExpirationStatus::Expired);
        assert_eq!(status_of(0), ExpirationStatus::ExpiringSoon);
        assert_eq!(status_of(3), ExpirationStatus::ExpiringSoon);
        assert_eq!(status_of(4), ExpirationStatus::Fresh);
        assert_eq!(status_of(i64::MIN), ExpirationStatus::Expired);
    }

    #[test]
    fn status_names() {
        assert_eq!(ExpirationStatus::ExpiringSoon.to_string(), "EXPIRING_SOON");
        assert_eq!(
            serde_json::to_string(&ExpirationStatus::Expired).unwrap(),
            r#""EXPIRED""#
        );
        assert_eq!(ExpirationStatus::Fresh.color(), "#10b981");
    }
}
