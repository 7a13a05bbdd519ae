use chrono::{DateTime, Local, NaiveDate, Utc};

/// Time source of the form controller.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
