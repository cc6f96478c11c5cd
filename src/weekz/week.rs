use chrono::{Datelike, Duration, NaiveDate};

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// One displayed calendar week, Sunday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    start: NaiveDate,
}

impl WeekWindow {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            start: start_of_week(date),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..7).map(move |offset| self.start + Duration::days(offset))
    }

    /// The window `weeks` weeks away, re-anchored to its Sunday.
    pub fn shifted(&self, weeks: i64) -> Self {
        Self::containing(self.start + Duration::days(weeks * 7))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }
}
