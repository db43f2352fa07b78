pub mod planner;

pub use planner::{CourseListing, CoursePreview, PlannerSession, RecommendationPage, ScheduleSnapshot};
