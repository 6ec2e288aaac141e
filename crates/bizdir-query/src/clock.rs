use chrono::{Datelike, Local, Weekday};

/// Source of "today" for the open-now filter.
pub trait Clock {
    fn today(&self) -> Weekday;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Weekday {
        Local::now().weekday()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Weekday);

impl Clock for FixedClock {
    fn today(&self) -> Weekday {
        self.0
    }
}

/// Full English day name, as used for keys in business hours.
#[must_use]
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
