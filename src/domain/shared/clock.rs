use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use std::sync::{Mutex, PoisonError};

/// Source of the current time and of the calendar day used for quota periods.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar day that usage is accounted against.
    fn today(&self) -> NaiveDate;

    /// Instant at which the current day's quota resets.
    fn next_reset(&self) -> DateTime<Utc>;
}

/// Canonical, locale-independent day identifier (`YYYY-MM-DD`).
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Wall clock; quota days follow the local calendar so they roll over at local midnight.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn next_reset(&self) -> DateTime<Utc> {
        let tomorrow = self.today() + Duration::days(1);
        tomorrow
            .and_hms_opt(0, 0, 0)
            .and_then(|midnight| Local.from_local_datetime(&midnight).earliest())
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| Utc::now() + Duration::days(1))
    }
}

/// Clock that only moves when told to. Days follow UTC.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    fn next_reset(&self) -> DateTime<Utc> {
        (self.today() + Duration::days(1))
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc())
            .unwrap_or_else(|| self.now() + Duration::days(1))
    }
}
