use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Kilde for "i dag" og "nå" (prod: SystemClock, test: FixedClock)
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    fn time_of_day(&self) -> NaiveTime {
        self.now().time()
    }
}

/// Lokal veggklokke.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Fast tidspunkt, kan flyttes manuelt i tester.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub at: NaiveDateTime,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }

    pub fn set(&mut self, at: NaiveDateTime) {
        self.at = at;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at
    }
}
