use serde::Serialize;

use crate::models::{Course, CourseId};
use crate::schedule::time::overlaps;

/// Identifies a selected course that blocks a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictRef {
    pub id: CourseId,
    pub name: String,
}

impl From<&Course> for ConflictRef {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            name: course.name.clone(),
        }
    }
}

/// Selected courses (other than the candidate itself) that overlap the candidate.
pub fn conflicting_with<'a>(candidate: &Course, selection: &'a [Course]) -> Vec<&'a Course> {
    selection
        .iter()
        .filter(|selected| selected.id != candidate.id && overlaps(candidate, selected))
        .collect()
}

pub fn conflicts(candidate: &Course, selection: &[Course]) -> bool {
    selection
        .iter()
        .any(|selected| selected.id != candidate.id && overlaps(candidate, selected))
}
