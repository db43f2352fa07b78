use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Course, Weekday};
use crate::schedule::conflict;

pub const INITIAL_PAGE_SIZE: usize = 3;
pub const PAGE_STEP: usize = 3;

/// Affinity bucket, declared in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    SameDayAndCategory,
    SameCategory,
    SameDay,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::SameDayAndCategory => "Same Day & Category",
            Tier::SameCategory => "Same Category",
            Tier::SameDay => "Same Day",
        }
    }

    fn classify(shares_day: bool, shares_category: bool) -> Option<Tier> {
        match (shares_day, shares_category) {
            (true, true) => Some(Tier::SameDayAndCategory),
            (false, true) => Some(Tier::SameCategory),
            (true, false) => Some(Tier::SameDay),
            (false, false) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub course: Course,
    pub tier: Tier,
    pub label: &'static str,
}

/// Ranks unselected, conflict-free catalog courses by affinity with the
/// current selection. Catalog order is kept within each tier; courses
/// sharing neither a day nor a category are not recommended.
pub fn rank(selection: &[Course], catalog: &[Course]) -> Vec<Recommendation> {
    let selected_days: HashSet<Weekday> = selection
        .iter()
        .flat_map(|c| c.days.iter().copied())
        .collect();
    let selected_categories: HashSet<&str> =
        selection.iter().map(|c| c.category.as_str()).collect();

    let mut ranked: Vec<Recommendation> = catalog
        .iter()
        .filter(|course| !selection.iter().any(|s| s.id == course.id))
        .filter(|course| !conflict::conflicts(course, selection))
        .filter_map(|course| {
            let shares_day = course.days.iter().any(|d| selected_days.contains(d));
            let shares_category = selected_categories.contains(course.category.as_str());
            Tier::classify(shares_day, shares_category).map(|tier| Recommendation {
                course: course.clone(),
                tier,
                label: tier.label(),
            })
        })
        .collect();

    // stable, so source order survives inside a tier
    ranked.sort_by_key(|r| r.tier);
    ranked
}

/// How many recommendations the page currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationWindow {
    pub visible: usize,
}

impl Default for RecommendationWindow {
    fn default() -> Self {
        Self {
            visible: INITIAL_PAGE_SIZE,
        }
    }
}

impl RecommendationWindow {
    pub fn show_more(&mut self, available: usize) {
        self.visible = (self.visible + PAGE_STEP)
            .min(available)
            .max(INITIAL_PAGE_SIZE);
    }

    pub fn show_less(&mut self) {
        self.visible = INITIAL_PAGE_SIZE;
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }
}
