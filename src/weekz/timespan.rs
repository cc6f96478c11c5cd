use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_HOUR: u32 = 12;
pub const MINUTE_STEP: u32 = 5;

static MINUTES_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d+)\s*(?:minutes?|mins?)$").expect("valid minutes pattern"));

static HOURS_MINUTES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:hours?|hrs?)?(?:\s+(\d+)\s*(?:minutes?|mins?)?)?")
        .expect("valid duration pattern")
});

/// Hour/minute picker behind a resource's free-form duration label.
///
/// Hours run 0 through [`MAX_HOUR`], minutes in steps of [`MINUTE_STEP`].
/// Both start unset; no label is derived until an hour is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWheel {
    hour: Option<u32>,
    minute: Option<u32>,
}

impl TimeWheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the wheel from existing label text. Two accepted shapes: a
    /// minutes-only label ("45 mins") and an hours-first label ("1 hour
    /// 10 mins", "2 hrs"). Anything else leaves the wheel unset.
    pub fn from_label(text: &str) -> Self {
        let mut wheel = Self::new();
        let text = text.trim();

        if let Some(caps) = MINUTES_ONLY.captures(text) {
            if let Ok(minutes) = caps[1].parse() {
                wheel.select_hour(0);
                wheel.select_minute(minutes);
            }
            return wheel;
        }

        if let Some(caps) = HOURS_MINUTES.captures(text) {
            if let Ok(hours) = caps[1].parse() {
                wheel.select_hour(hours);
                let minutes = caps
                    .get(2)
                    .and_then(|m| m.as_str().parse().ok())
                    .unwrap_or(0);
                wheel.select_minute(minutes);
            }
        }
        wheel
    }

    pub fn select_hour(&mut self, hour: u32) {
        self.hour = Some(hour);
    }

    /// Minutes snap down to the nearest multiple of [`MINUTE_STEP`].
    pub fn select_minute(&mut self, minute: u32) {
        self.minute = Some(minute - minute % MINUTE_STEP);
    }

    pub fn hour(&self) -> Option<u32> {
        self.hour
    }

    pub fn minute(&self) -> Option<u32> {
        self.minute
    }

    pub fn is_set(&self) -> bool {
        self.hour.is_some()
    }

    /// The derived duration label, or `None` while no hour is selected.
    pub fn label(&self) -> Option<String> {
        let hours = self.hour?;
        let minutes = self.minute.unwrap_or(0);

        if hours == 0 {
            if minutes > 0 {
                return Some(format!("{minutes} {}", unit(minutes, "min")));
            }
            return Some("0 mins".to_string());
        }

        let mut text = format!("{hours} {}", unit(hours, "hour"));
        if minutes > 0 {
            text.push_str(&format!(" {minutes} {}", unit(minutes, "min")));
        }
        Some(text)
    }
}

fn unit(value: u32, singular: &str) -> String {
    if value == 1 {
        singular.to_string()
    } else {
        format!("{singular}s")
    }
}
