use chrono::{NaiveDate, Utc};

/// Calendar seam so date-sensitive rules can be exercised with a pinned day.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Production clock reading the system time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
