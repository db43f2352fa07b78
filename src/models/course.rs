use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weekday tags a course can meet on. Ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown weekday: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvaluationMethod {
    Exam,
    Paper,
    Both,
}

impl FromStr for EvaluationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Exam" => Ok(EvaluationMethod::Exam),
            "Paper" => Ok(EvaluationMethod::Paper),
            "Both" => Ok(EvaluationMethod::Both),
            other => Err(format!("unknown evaluation method: {}", other)),
        }
    }
}

/// A catalog course after ingestion. Immutable once loaded.
///
/// `days` is deduplicated and kept in Monday→Friday order. The time strings
/// are kept as sourced; `schedule::time` interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub professor: String,
    pub category: String,
    pub description: String,
    pub credits: u32,
    pub days: Vec<Weekday>,
    pub time_start: String,
    pub time_end: String,
    pub evaluation_method: Option<EvaluationMethod>,
    pub is_required: bool,
}

impl Course {
    pub fn meets_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    pub fn shares_day_with(&self, other: &Course) -> bool {
        self.days.iter().any(|day| other.meets_on(*day))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmitCourseRequest {
    pub course_id: CourseId,
}
