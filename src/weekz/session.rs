use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::week::{start_of_week, WeekWindow};

/// Where the user is looking: the selected day and the displayed week.
///
/// Persisted between runs so consecutive invocations continue where the
/// last one left off. The selection may sit outside the displayed week;
/// the two move independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub selected_day: Option<NaiveDate>,
    pub week_start: NaiveDate,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl Session {
    /// A fresh session showing the week that contains `today`, with no
    /// day selected yet.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected_day: None,
            week_start: start_of_week(today),
        }
    }

    pub fn window(&self) -> WeekWindow {
        WeekWindow::containing(self.week_start)
    }

    /// Re-anchors `week_start` to a Sunday. Stored sessions may have
    /// been edited by hand; every load goes through this.
    pub fn normalize(&mut self) {
        self.week_start = start_of_week(self.week_start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn new_session_has_no_selection() {
        let session = Session::new(date("2026-03-04"));
        assert_eq!(session.selected_day, None);
        assert_eq!(session.week_start, date("2026-03-01"));
    }

    #[test]
    fn normalize_moves_week_start_back_to_sunday() {
        let mut session = Session::new(date("2026-03-04"));
        session.week_start = date("2026-03-06");
        session.normalize();
        assert_eq!(session.week_start, date("2026-03-01"));
    }

    #[test]
    fn session_round_trips_through_json() {
        let mut session = Session::new(date("2026-03-04"));
        session.selected_day = Some(date("2026-03-02"));

        let text = serde_json::to_string(&session).unwrap();
        let reloaded: Session = serde_json::from_str(&text).unwrap();
        assert_eq!(reloaded, session);
    }
}
