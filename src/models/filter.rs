use serde::{Deserialize, Serialize};

use crate::models::{Course, EvaluationMethod, Weekday};

/// Catalog filter values set from the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub search_query: String,
    pub category: Option<String>,
    pub professor: Option<String>,
    pub credits: Option<u32>,
    pub evaluation_method: Option<EvaluationMethod>,
    pub days: Vec<Weekday>,
}

impl FilterCriteria {
    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.trim().to_string();
    }

    pub fn toggle_day(&mut self, day: Weekday) {
        if let Some(pos) = self.days.iter().position(|d| *d == day) {
            self.days.remove(pos);
        } else {
            self.days.push(day);
            self.days.sort();
        }
    }

    pub fn set_days(&mut self, days: impl IntoIterator<Item = Weekday>) {
        let mut days: Vec<Weekday> = days.into_iter().collect();
        days.sort();
        days.dedup();
        self.days = days;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }

    /// Each selected day counts as one filter.
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.search_query.is_empty())
            + usize::from(self.category.is_some())
            + usize::from(self.professor.is_some())
            + usize::from(self.credits.is_some())
            + usize::from(self.evaluation_method.is_some())
            + self.days.len()
    }

    pub fn matches(&self, course: &Course) -> bool {
        let matches_search = if self.search_query.is_empty() {
            true
        } else {
            let needle = self.search_query.to_lowercase();
            course.name.to_lowercase().contains(&needle)
                || course.professor.to_lowercase().contains(&needle)
        };

        matches_search
            && self.category.as_ref().is_none_or(|c| &course.category == c)
            && self.professor.as_ref().is_none_or(|p| &course.professor == p)
            && self.credits.is_none_or(|c| course.credits == c)
            && self
                .evaluation_method
                .is_none_or(|m| course.evaluation_method == Some(m))
            && self.days.iter().all(|day| course.meets_on(*day))
    }
}
