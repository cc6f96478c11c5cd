use chrono::NaiveDate;

use crate::commands::{CmdResult, ViewUpdate};
use crate::error::Result;
use crate::session::Session;

/// Selects a day. Any ISO day goes, including one outside the displayed
/// week; the strip just shows no highlight then.
pub fn run(session: &mut Session, date: NaiveDate) -> Result<CmdResult> {
    session.selected_day = Some(date);
    Ok(CmdResult::default()
        .with_view(ViewUpdate::DayStrip)
        .with_view(ViewUpdate::TopicList))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn sets_the_selection() {
        let mut session = Session::new(date("2026-03-04"));
        let result = run(&mut session, date("2026-03-02")).unwrap();

        assert_eq!(session.selected_day, Some(date("2026-03-02")));
        assert!(result.repaints(ViewUpdate::DayStrip));
        assert!(result.repaints(ViewUpdate::TopicList));
        assert!(!result.mutated);
    }

    #[test]
    fn accepts_a_day_outside_the_displayed_week() {
        let mut session = Session::new(date("2026-03-04"));
        run(&mut session, date("2026-05-20")).unwrap();

        assert_eq!(session.selected_day, Some(date("2026-05-20")));
        // The window stays put; only the selection moved.
        assert_eq!(session.week_start, date("2026-03-01"));
    }
}
