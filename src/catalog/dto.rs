use serde::Deserialize;
use tracing::warn;

use crate::models::{Course, CourseId, EvaluationMethod, Weekday};
use crate::schedule::TimeRange;

/// A catalog record as it appears in `courses.json`, before normalization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCourse {
    pub id: RawId,
    pub name: String,
    #[serde(default)]
    pub professor: RawProfessor,
    pub credits: u32,
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub time_start: Option<String>,
    #[serde(default)]
    pub time_end: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub evaluation_method: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_required: Option<RawFlag>,
    #[serde(default)]
    pub biddable: Option<RawFlag>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawProfessor {
    Many(Vec<String>),
    One(String),
}

impl Default for RawProfessor {
    fn default() -> Self {
        RawProfessor::One(String::new())
    }
}

/// `"Y"`/`"N"` strings or plain booleans.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawFlag {
    Bool(bool),
    Text(String),
}

impl RawFlag {
    fn is_set(&self) -> bool {
        match self {
            RawFlag::Bool(b) => *b,
            RawFlag::Text(s) => matches!(s.trim(), "Y" | "y" | "true"),
        }
    }
}

impl RawCourse {
    pub fn into_course(self) -> Result<Course, String> {
        let id = match self.id {
            RawId::Number(n) => CourseId(n),
            RawId::Text(s) => s
                .trim()
                .parse::<u64>()
                .map(CourseId)
                .map_err(|_| format!("invalid course id {:?}", s))?,
        };

        let professor = match self.professor {
            RawProfessor::Many(names) => names.join(", "),
            RawProfessor::One(name) => name,
        };

        let mut days = Vec::with_capacity(self.days.len());
        for raw in &self.days {
            match raw.parse::<Weekday>() {
                Ok(day) => days.push(day),
                Err(e) => warn!("course {}: {}, dropping", id, e),
            }
        }
        days.sort();
        days.dedup();

        let evaluation_method = match self.evaluation_method.as_deref() {
            None | Some("") => None,
            Some(raw) => raw
                .parse::<EvaluationMethod>()
                .map_err(|e| warn!("course {}: {}", id, e))
                .ok(),
        };

        if !(1..=4).contains(&self.credits) {
            warn!("course {} has unusual credit value {}", id, self.credits);
        }

        // missing times stay empty and clamp to 08:00 like any malformed value
        let time_start = self.time_start.unwrap_or_default();
        let time_end = self.time_end.unwrap_or_default();
        let range = TimeRange::parse(&time_start, &time_end);
        if range.end <= range.start {
            warn!(
                "course {} has non-positive time range {:?}-{:?}",
                id, time_start, time_end
            );
        }

        let is_required = self.is_required.as_ref().is_some_and(RawFlag::is_set)
            || self.biddable.as_ref().is_some_and(RawFlag::is_set);

        Ok(Course {
            id,
            name: self.name,
            professor,
            category: self.category,
            description: self.description.unwrap_or_default(),
            credits: self.credits,
            days,
            time_start,
            time_end,
            evaluation_method,
            is_required,
        })
    }
}
