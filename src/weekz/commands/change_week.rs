use crate::commands::{CmdResult, ViewUpdate};
use crate::error::Result;
use crate::session::Session;

/// Moves the displayed window by whole weeks (`-1` back, `1` forward),
/// re-anchoring on the Sunday of the target week. The selected day is
/// left alone even when it scrolls out of view.
pub fn run(session: &mut Session, weeks: i64) -> Result<CmdResult> {
    session.week_start = session.window().shifted(weeks).start();
    Ok(CmdResult::default().with_view(ViewUpdate::DayStrip))
}
