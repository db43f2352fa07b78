use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Course, CourseId};
use crate::schedule::conflict::{self, ConflictRef};

pub const CREDIT_CEILING: u32 = 15;
pub const RECOMMENDED_MIN_CREDITS: u32 = 9;
pub const RECOMMENDED_MAX_CREDITS: u32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmitOutcome {
    Admitted,
    AlreadySelected,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Schedule conflict with {}", names(.conflicting))]
    Conflict { conflicting: Vec<ConflictRef> },

    #[error("Adding {requested} credits to {current} would exceed the maximum credit limit of {ceiling}")]
    CreditCeiling {
        current: u32,
        requested: u32,
        ceiling: u32,
    },
}

fn names(refs: &[ConflictRef]) -> String {
    refs.iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Advisory band for the current total. Never blocks an admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CreditStatus {
    BelowRecommended,
    WithinRecommended,
    AboveRecommended,
}

impl CreditStatus {
    pub fn for_total(total: u32) -> Self {
        if total < RECOMMENDED_MIN_CREDITS {
            CreditStatus::BelowRecommended
        } else if total <= RECOMMENDED_MAX_CREDITS {
            CreditStatus::WithinRecommended
        } else {
            CreditStatus::AboveRecommended
        }
    }
}

/// The student's selection, in the order courses were admitted.
///
/// All mutation goes through [`SelectionLedger::admit`] and
/// [`SelectionLedger::evict`]; the credit total is always derived from the
/// current entries.
#[derive(Debug, Clone, Default)]
pub struct SelectionLedger {
    selected: Vec<Course>,
}

impl SelectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn courses(&self) -> &[Course] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn total_credits(&self) -> u32 {
        self.selected
            .iter()
            .fold(0u32, |total, c| total.saturating_add(c.credits))
    }

    pub fn credit_status(&self) -> CreditStatus {
        CreditStatus::for_total(self.total_credits())
    }

    pub fn is_selected(&self, id: CourseId) -> bool {
        self.selected.iter().any(|c| c.id == id)
    }

    pub fn would_conflict(&self, course: &Course) -> bool {
        !self.is_selected(course.id) && conflict::conflicts(course, &self.selected)
    }

    pub fn conflicts_for(&self, course: &Course) -> Vec<ConflictRef> {
        conflict::conflicting_with(course, &self.selected)
            .into_iter()
            .map(ConflictRef::from)
            .collect()
    }

    pub fn would_exceed_credits(&self, course: &Course) -> bool {
        !self.is_selected(course.id)
            && self.total_credits().saturating_add(course.credits) > CREDIT_CEILING
    }

    pub fn admit(&mut self, course: Course) -> Result<AdmitOutcome, Rejection> {
        if self.is_selected(course.id) {
            return Ok(AdmitOutcome::AlreadySelected);
        }

        let conflicting = self.conflicts_for(&course);
        if !conflicting.is_empty() {
            let rejection = Rejection::Conflict { conflicting };
            warn!("rejected {}: {}", course.name, rejection);
            return Err(rejection);
        }

        let current = self.total_credits();
        if current.saturating_add(course.credits) > CREDIT_CEILING {
            let rejection = Rejection::CreditCeiling {
                current,
                requested: course.credits,
                ceiling: CREDIT_CEILING,
            };
            warn!("rejected {}: {}", course.name, rejection);
            return Err(rejection);
        }

        info!("admitted {} ({} credits)", course.name, course.credits);
        self.selected.push(course);
        info!("total credits now {}", self.total_credits());
        Ok(AdmitOutcome::Admitted)
    }

    /// Returns the removed course, or `None` when it was not selected.
    pub fn evict(&mut self, id: CourseId) -> Option<Course> {
        let pos = self.selected.iter().position(|c| c.id == id)?;
        let removed = self.selected.remove(pos);
        info!(
            "evicted {}, total credits now {}",
            removed.name,
            self.total_credits()
        );
        Some(removed)
    }
}
