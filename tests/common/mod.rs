#![allow(dead_code)]

use course_scheduler::models::{Course, CourseId, EvaluationMethod, Weekday};

pub fn course(
    id: u64,
    category: &str,
    days: &[Weekday],
    start: &str,
    end: &str,
    credits: u32,
) -> Course {
    Course {
        id: CourseId(id),
        name: format!("Course {}", id),
        professor: "Staff".to_string(),
        category: category.to_string(),
        description: String::new(),
        credits,
        days: days.to_vec(),
        time_start: start.to_string(),
        time_end: end.to_string(),
        evaluation_method: Some(EvaluationMethod::Exam),
        is_required: false,
    }
}
