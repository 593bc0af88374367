use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day, used as the streak anchor.
    fn today(&self) -> NaiveDate;

    /// Calendar day `at` falls on in the clock's local zone.
    fn local_day(&self, at: &DateTime<FixedOffset>) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn local_day(&self, at: &DateTime<FixedOffset>) -> NaiveDate {
        at.with_timezone(&Local).date_naive()
    }
}

/// A clock pinned to one instant in a fixed zone (UTC unless overridden).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            offset: Utc.fix(),
        }
    }

    pub fn at_day(today: NaiveDate) -> Self {
        Self::new(today.and_hms_opt(12, 0, 0).unwrap_or_default().and_utc())
    }

    pub fn in_offset(self, offset: FixedOffset) -> Self {
        Self { offset, ..self }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.now.with_timezone(&self.offset).date_naive()
    }

    fn local_day(&self, at: &DateTime<FixedOffset>) -> NaiveDate {
        at.with_timezone(&self.offset).date_naive()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }

    fn local_day(&self, at: &DateTime<FixedOffset>) -> NaiveDate {
        (**self).local_day(at)
    }
}
