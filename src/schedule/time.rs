use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use tracing::warn;

use crate::models::Course;

pub const GRID_START_HOUR: u32 = 8;
pub const GRID_END_HOUR: u32 = 22;
pub const GRID_ROWS: usize = (GRID_END_HOUR - GRID_START_HOUR) as usize;

/// Minutes elapsed since the 08:00 grid anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GridMinute(pub u32);

impl GridMinute {
    pub const ANCHOR: GridMinute = GridMinute(0);

    /// Parses `"H:MM"` / `"HH:MM"`. Anything unparseable or earlier than
    /// 08:00 clamps to the anchor.
    pub fn parse(raw: &str) -> Self {
        let Ok(time) = NaiveTime::parse_from_str(raw.trim(), "%H:%M") else {
            warn!("malformed time value {:?}, clamping to 08:00", raw);
            return Self::ANCHOR;
        };

        let minutes = time.hour() * 60 + time.minute();
        let anchor = GRID_START_HOUR * 60;
        if minutes < anchor {
            warn!("time value {:?} is before 08:00, clamping", raw);
            return Self::ANCHOR;
        }

        GridMinute(minutes - anchor)
    }
}

/// Half-open `[start, end)` range on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start: GridMinute,
    pub end: GridMinute,
}

impl TimeRange {
    pub fn parse(start: &str, end: &str) -> Self {
        Self {
            start: GridMinute::parse(start),
            end: GridMinute::parse(end),
        }
    }

    pub fn of(course: &Course) -> Self {
        Self::parse(&course.time_start, &course.time_end)
    }

    /// Touching endpoints do not intersect.
    pub fn intersects(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration(&self) -> u32 {
        self.end.0.saturating_sub(self.start.0)
    }
}

/// Two courses overlap when they share a weekday and their ranges intersect.
pub fn overlaps(a: &Course, b: &Course) -> bool {
    a.shares_day_with(b) && TimeRange::of(a).intersects(&TimeRange::of(b))
}

/// Row labels for the hour grid, `"8:00"` through `"21:00"`.
pub fn hour_labels() -> Vec<String> {
    (GRID_START_HOUR..GRID_END_HOUR)
        .map(|hour| format!("{}:00", hour))
        .collect()
}
