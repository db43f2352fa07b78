use serde::Serialize;
use tracing::warn;

use crate::models::{Course, CourseId, Weekday};
use crate::schedule::time::{TimeRange, hour_labels};

/// One positioned block in a day column. Offsets are in minutes from 08:00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarBlock {
    pub course_id: CourseId,
    pub name: String,
    pub time_start: String,
    pub time_end: String,
    pub offset: u32,
    pub extent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayColumn {
    pub day: Weekday,
    pub blocks: Vec<CalendarBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyCalendar {
    pub rows: Vec<String>,
    pub columns: Vec<DayColumn>,
}

impl WeeklyCalendar {
    pub fn column(&self, day: Weekday) -> Option<&DayColumn> {
        self.columns.iter().find(|c| c.day == day)
    }

    pub fn block_count(&self) -> usize {
        self.columns.iter().map(|c| c.blocks.len()).sum()
    }
}

pub fn block_for(course: &Course) -> CalendarBlock {
    let range = TimeRange::of(course);
    if range.end < range.start {
        warn!(
            "{} ends ({}) before it starts ({}), drawing zero height",
            course.name, course.time_end, course.time_start
        );
    }

    CalendarBlock {
        course_id: course.id,
        name: course.name.clone(),
        time_start: course.time_start.clone(),
        time_end: course.time_end.clone(),
        offset: range.start.0,
        extent: range.duration(),
    }
}

/// Lays the selection out on the Monday–Friday, 08:00–22:00 grid.
/// A course meeting on N days yields N identical blocks.
pub fn project(selection: &[Course]) -> WeeklyCalendar {
    let columns = Weekday::ALL
        .into_iter()
        .map(|day| DayColumn {
            day,
            blocks: selection
                .iter()
                .filter(|course| course.meets_on(day))
                .map(block_for)
                .collect(),
        })
        .collect();

    WeeklyCalendar {
        rows: hour_labels(),
        columns,
    }
}
