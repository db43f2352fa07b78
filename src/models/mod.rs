pub mod course;
pub mod filter;

pub use course::{AdmitCourseRequest, Course, CourseId, EvaluationMethod, Weekday};
pub use filter::FilterCriteria;
