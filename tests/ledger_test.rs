mod common;

use common::course;
use course_scheduler::models::{CourseId, Weekday::*};
use course_scheduler::schedule::{AdmitOutcome, CreditStatus, Rejection, SelectionLedger};

#[test]
fn test_overlapping_course_is_rejected() {
    let mut ledger = SelectionLedger::new();
    let x = course(1, "Law", &[Monday, Wednesday], "09:00", "10:00", 3);
    let y = course(2, "Tax", &[Monday], "09:30", "10:30", 3);

    assert_eq!(ledger.admit(x), Ok(AdmitOutcome::Admitted));

    let result = ledger.admit(y.clone());
    match result {
        Err(Rejection::Conflict { conflicting }) => {
            assert_eq!(conflicting.len(), 1);
            assert_eq!(conflicting[0].id, CourseId(1));
        }
        other => panic!("expected conflict, got {:?}", other),
    }

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.total_credits(), 3);
    assert!(!ledger.is_selected(y.id));
}

#[test]
fn test_credit_ceiling_blocks_fourth_four_credit_course() {
    let mut ledger = SelectionLedger::new();
    let courses = [
        course(1, "Law", &[Monday], "09:00", "10:00", 4),
        course(2, "Law", &[Tuesday], "09:00", "10:00", 4),
        course(3, "Law", &[Wednesday], "09:00", "10:00", 4),
        course(4, "Law", &[Thursday], "09:00", "10:00", 4),
    ];

    let mut totals = Vec::new();
    for c in courses.iter().take(3) {
        assert_eq!(ledger.admit(c.clone()), Ok(AdmitOutcome::Admitted));
        totals.push(ledger.total_credits());
    }
    assert_eq!(totals, vec![4, 8, 12]);

    let result = ledger.admit(courses[3].clone());
    assert_eq!(
        result,
        Err(Rejection::CreditCeiling {
            current: 12,
            requested: 4,
            ceiling: 15
        })
    );
    assert_eq!(ledger.total_credits(), 12);
    assert_eq!(ledger.len(), 3);
}

#[test]
fn test_exactly_fifteen_credits_is_allowed() {
    let mut ledger = SelectionLedger::new();
    for (i, day) in [Monday, Tuesday, Wednesday, Thursday, Friday].iter().enumerate() {
        let c = course(i as u64 + 1, "Law", &[*day], "09:00", "10:00", 3);
        assert_eq!(ledger.admit(c), Ok(AdmitOutcome::Admitted));
    }
    assert_eq!(ledger.total_credits(), 15);
}

#[test]
fn test_evicting_unknown_id_is_a_noop() {
    let mut ledger = SelectionLedger::new();
    ledger
        .admit(course(1, "Law", &[Monday], "09:00", "10:00", 3))
        .expect("admit");
    let before = ledger.courses().to_vec();

    assert!(ledger.evict(CourseId(999)).is_none());

    assert_eq!(ledger.courses(), before.as_slice());
    assert_eq!(ledger.total_credits(), 3);
}

#[test]
fn test_evict_recomputes_total() {
    let mut ledger = SelectionLedger::new();
    ledger
        .admit(course(1, "Law", &[Monday], "09:00", "10:00", 3))
        .expect("admit");
    ledger
        .admit(course(2, "Law", &[Tuesday], "09:00", "10:00", 2))
        .expect("admit");

    let removed = ledger.evict(CourseId(1)).expect("course 1 was selected");
    assert_eq!(removed.id, CourseId(1));
    assert_eq!(ledger.total_credits(), 2);
    assert!(!ledger.is_selected(CourseId(1)));
}

#[test]
fn test_duplicate_admission_changes_nothing() {
    let mut ledger = SelectionLedger::new();
    let c = course(1, "Law", &[Monday], "09:00", "10:00", 3);

    assert_eq!(ledger.admit(c.clone()), Ok(AdmitOutcome::Admitted));
    assert_eq!(ledger.admit(c), Ok(AdmitOutcome::AlreadySelected));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.total_credits(), 3);
}

#[test]
fn test_back_to_back_courses_do_not_conflict() {
    let mut ledger = SelectionLedger::new();
    ledger
        .admit(course(1, "Law", &[Monday], "09:00", "10:00", 3))
        .expect("admit");

    let next = course(2, "Law", &[Monday], "10:00", "11:00", 3);
    assert!(!ledger.would_conflict(&next));
    assert_eq!(ledger.admit(next), Ok(AdmitOutcome::Admitted));
}

#[test]
fn test_same_time_on_different_days_does_not_conflict() {
    let mut ledger = SelectionLedger::new();
    ledger
        .admit(course(1, "Law", &[Monday], "09:00", "10:00", 3))
        .expect("admit");
    let other_day = course(2, "Law", &[Tuesday], "09:00", "10:00", 3);
    assert!(!ledger.would_conflict(&other_day));
}

#[test]
fn test_previews_ignore_already_selected_course() {
    let mut ledger = SelectionLedger::new();
    let big = course(1, "Law", &[Monday], "09:00", "10:00", 4);
    ledger.admit(big.clone()).expect("admit");
    for (id, day) in [(2, Tuesday), (3, Wednesday)] {
        ledger
            .admit(course(id, "Law", &[day], "09:00", "10:00", 4))
            .expect("admit");
    }

    assert!(!ledger.would_conflict(&big));
    assert!(!ledger.would_exceed_credits(&big));

    let clash = course(4, "Law", &[Monday], "09:15", "09:45", 1);
    assert!(ledger.would_conflict(&clash));
    assert!(!ledger.would_exceed_credits(&clash));

    let heavy = course(5, "Law", &[Friday], "09:00", "10:00", 4);
    assert!(!ledger.would_conflict(&heavy));
    assert!(ledger.would_exceed_credits(&heavy));
}

#[test]
fn test_conflict_wins_over_credit_ceiling() {
    let mut ledger = SelectionLedger::new();
    for (id, day) in [(1, Monday), (2, Tuesday), (3, Wednesday)] {
        ledger
            .admit(course(id, "Law", &[day], "09:00", "10:00", 4))
            .expect("admit");
    }

    let both = course(4, "Law", &[Monday], "09:30", "10:30", 4);
    assert!(matches!(ledger.admit(both), Err(Rejection::Conflict { .. })));
}

#[test]
fn test_credit_status_band() {
    assert_eq!(CreditStatus::for_total(0), CreditStatus::BelowRecommended);
    assert_eq!(CreditStatus::for_total(8), CreditStatus::BelowRecommended);
    assert_eq!(CreditStatus::for_total(9), CreditStatus::WithinRecommended);
    assert_eq!(CreditStatus::for_total(14), CreditStatus::WithinRecommended);
    assert_eq!(CreditStatus::for_total(15), CreditStatus::AboveRecommended);
}

#[test]
fn test_rejection_message_names_conflicting_courses() {
    let mut ledger = SelectionLedger::new();
    ledger
        .admit(course(1, "Law", &[Monday], "09:00", "10:00", 3))
        .expect("admit");
    ledger
        .admit(course(2, "Law", &[Wednesday], "09:00", "10:00", 3))
        .expect("admit");

    let err = ledger
        .admit(course(3, "Law", &[Monday, Wednesday], "09:30", "09:45", 1))
        .expect_err("should conflict");
    assert_eq!(err.to_string(), "Schedule conflict with Course 1, Course 2");
}

#[test]
fn test_huge_credit_value_is_rejected_without_overflow() {
    let mut ledger = SelectionLedger::new();
    ledger
        .admit(course(1, "Law", &[Monday], "09:00", "10:00", 3))
        .expect("admit");

    let huge = course(2, "Tax", &[Friday], "09:00", "10:00", u32::MAX);
    assert!(ledger.would_exceed_credits(&huge));
    assert_eq!(
        ledger.admit(huge),
        Err(Rejection::CreditCeiling {
            current: 3,
            requested: u32::MAX,
            ceiling: 15,
        })
    );
    assert_eq!(ledger.total_credits(), 3);
    assert_eq!(ledger.len(), 1);
}
