use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogLoad};
use crate::error::AppError;
use crate::models::{Course, CourseId, FilterCriteria};
use crate::schedule::calendar::{self, WeeklyCalendar};
use crate::schedule::recommend::{self, Recommendation, RecommendationWindow};
use crate::schedule::{AdmitOutcome, ConflictRef, CreditStatus, SelectionLedger};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSnapshot {
    pub courses: Vec<Course>,
    pub total_credits: u32,
    pub credit_status: CreditStatus,
    pub calendar: WeeklyCalendar,
    pub catalog_error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePreview {
    pub course_id: CourseId,
    pub selected: bool,
    pub would_conflict: bool,
    pub conflicts_with: Vec<ConflictRef>,
    pub would_exceed_credits: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListing {
    #[serde(flatten)]
    pub course: Course,
    pub selected: bool,
    pub would_conflict: bool,
    pub would_exceed_credits: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPage {
    pub items: Vec<Recommendation>,
    pub visible: usize,
    pub total: usize,
}

/// 1 つの閲覧セッション分の状態
///
/// Owns the catalog, the selection ledger and the filter values. Calendar
/// and recommendations are rebuilt after every change to the selection or
/// the catalog, before the mutating call returns.
#[derive(Debug, Clone)]
pub struct PlannerSession {
    catalog: Catalog,
    catalog_error: Option<String>,
    ledger: SelectionLedger,
    filters: FilterCriteria,
    window: RecommendationWindow,
    recommendations: Vec<Recommendation>,
    calendar: WeeklyCalendar,
}

impl PlannerSession {
    pub fn new(load: CatalogLoad) -> Self {
        let mut session = Self {
            catalog: load.catalog,
            catalog_error: load.error,
            ledger: SelectionLedger::new(),
            filters: FilterCriteria::default(),
            window: RecommendationWindow::default(),
            recommendations: Vec::new(),
            calendar: calendar::project(&[]),
        };
        session.refresh();
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_error(&self) -> Option<&str> {
        self.catalog_error.as_deref()
    }

    pub fn ledger(&self) -> &SelectionLedger {
        &self.ledger
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterCriteria {
        &mut self.filters
    }

    pub fn calendar(&self) -> &WeeklyCalendar {
        &self.calendar
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// 新しいカタログで置き換える（後勝ち）
    pub fn replace_catalog(&mut self, load: CatalogLoad) {
        info!("Replacing catalog ({} courses)", load.catalog.len());
        self.catalog = load.catalog;
        self.catalog_error = load.error;
        self.refresh();
    }

    pub fn admit(&mut self, id: CourseId) -> Result<AdmitOutcome, AppError> {
        let course = self.catalog.get(id).cloned().ok_or(AppError::NotFound)?;
        let outcome = self.ledger.admit(course)?;
        if outcome == AdmitOutcome::Admitted {
            self.refresh();
        }
        Ok(outcome)
    }

    /// Returns whether anything was removed.
    pub fn evict(&mut self, id: CourseId) -> bool {
        let removed = self.ledger.evict(id).is_some();
        if removed {
            self.refresh();
        }
        removed
    }

    pub fn preview(&self, id: CourseId) -> Result<CoursePreview, AppError> {
        let course = self.catalog.get(id).ok_or(AppError::NotFound)?;
        let selected = self.ledger.is_selected(id);
        Ok(CoursePreview {
            course_id: id,
            selected,
            would_conflict: self.ledger.would_conflict(course),
            conflicts_with: if selected {
                Vec::new()
            } else {
                self.ledger.conflicts_for(course)
            },
            would_exceed_credits: self.ledger.would_exceed_credits(course),
        })
    }

    pub fn listings(&self, criteria: &FilterCriteria) -> Vec<CourseListing> {
        self.catalog
            .filter(criteria)
            .map(|course| CourseListing {
                course: course.clone(),
                selected: self.ledger.is_selected(course.id),
                would_conflict: self.ledger.would_conflict(course),
                would_exceed_credits: self.ledger.would_exceed_credits(course),
            })
            .collect()
    }

    pub fn snapshot(&self) -> ScheduleSnapshot {
        ScheduleSnapshot {
            courses: self.ledger.courses().to_vec(),
            total_credits: self.ledger.total_credits(),
            credit_status: self.ledger.credit_status(),
            calendar: self.calendar.clone(),
            catalog_error: self.catalog_error.clone(),
        }
    }

    pub fn recommendation_page(&self) -> RecommendationPage {
        RecommendationPage {
            items: self.window.slice(&self.recommendations).to_vec(),
            visible: self.window.visible,
            total: self.recommendations.len(),
        }
    }

    pub fn show_more_recommendations(&mut self) {
        self.window.show_more(self.recommendations.len());
    }

    pub fn show_fewer_recommendations(&mut self) {
        self.window.show_less();
    }

    fn refresh(&mut self) {
        self.calendar = calendar::project(self.ledger.courses());
        self.recommendations = recommend::rank(self.ledger.courses(), self.catalog.courses());
        debug!(
            "refreshed views: {} calendar blocks, {} recommendations",
            self.calendar.block_count(),
            self.recommendations.len()
        );
    }
}
