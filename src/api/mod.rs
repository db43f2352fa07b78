use axum::Json;
use axum::extract::Path;
use axum::routing::{delete, post};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use tracing::info;

use crate::catalog;
use crate::error::AppError;
use crate::models::*;
use crate::schedule::WeeklyCalendar;
use crate::services::{CourseListing, CoursePreview, RecommendationPage, ScheduleSnapshot};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FilterOptions {
    categories: Vec<String>,
    professors: Vec<String>,
    weekdays: Vec<Weekday>,
    credits: Vec<u32>,
    evaluation_methods: Vec<EvaluationMethod>,
}

/// Current filters plus the badge counts a filter panel shows.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FilterState {
    #[serde(flatten)]
    criteria: FilterCriteria,
    active_filter_count: usize,
    has_active_filters: bool,
}

impl From<&FilterCriteria> for FilterState {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            criteria: criteria.clone(),
            active_filter_count: criteria.active_filter_count(),
            has_active_filters: criteria.has_active_filters(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogStatus {
    courses: usize,
    error: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses))
        .route("/courses/options", get(filter_options))
        .route("/filters", get(get_filters).put(set_filters).delete(reset_filters))
        .route("/filters/days/{day}", post(toggle_day))
        .route("/schedule", get(get_schedule))
        .route("/schedule/courses", post(admit_course))
        .route("/schedule/courses/{id}", delete(evict_course))
        .route("/schedule/preview/{id}", get(preview_course))
        .route("/calendar", get(get_calendar))
        .route("/recommendations", get(list_recommendations))
        .route("/recommendations/more", post(more_recommendations))
        .route("/recommendations/less", post(fewer_recommendations))
        .route("/catalog/reload", post(reload_catalog))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_courses(State(state): State<AppState>) -> Json<Vec<CourseListing>> {
    let session = state.session.read().await;
    Json(session.listings(session.filters()))
}

async fn filter_options(State(state): State<AppState>) -> Json<FilterOptions> {
    let session = state.session.read().await;
    Json(FilterOptions {
        categories: session.catalog().categories(),
        professors: session.catalog().professors(),
        weekdays: Weekday::ALL.to_vec(),
        credits: vec![1, 2, 3, 4],
        evaluation_methods: vec![
            EvaluationMethod::Exam,
            EvaluationMethod::Paper,
            EvaluationMethod::Both,
        ],
    })
}

async fn get_filters(State(state): State<AppState>) -> Json<FilterState> {
    Json(state.session.read().await.filters().into())
}

async fn set_filters(
    State(state): State<AppState>,
    Json(req): Json<FilterCriteria>,
) -> Json<FilterState> {
    let mut session = state.session.write().await;
    let filters = session.filters_mut();
    filters.set_search_query(&req.search_query);
    filters.category = req.category;
    filters.professor = req.professor;
    filters.credits = req.credits;
    filters.evaluation_method = req.evaluation_method;
    filters.set_days(req.days);
    Json(FilterState::from(&*filters))
}

async fn reset_filters(State(state): State<AppState>) -> Json<FilterState> {
    let mut session = state.session.write().await;
    session.filters_mut().reset();
    Json(session.filters().into())
}

async fn toggle_day(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Json<FilterState>, AppError> {
    let day = day.parse::<Weekday>().map_err(AppError::BadRequest)?;
    let mut session = state.session.write().await;
    session.filters_mut().toggle_day(day);
    Ok(Json(session.filters().into()))
}

async fn get_schedule(State(state): State<AppState>) -> Json<ScheduleSnapshot> {
    Json(state.session.read().await.snapshot())
}

async fn admit_course(
    State(state): State<AppState>,
    Json(req): Json<AdmitCourseRequest>,
) -> Result<Json<ScheduleSnapshot>, AppError> {
    let mut session = state.session.write().await;
    session.admit(req.course_id)?;
    Ok(Json(session.snapshot()))
}

async fn evict_course(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<ScheduleSnapshot> {
    let mut session = state.session.write().await;
    session.evict(CourseId(id));
    Json(session.snapshot())
}

async fn preview_course(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<CoursePreview>, AppError> {
    let preview = state.session.read().await.preview(CourseId(id))?;
    Ok(Json(preview))
}

async fn get_calendar(State(state): State<AppState>) -> Json<WeeklyCalendar> {
    Json(state.session.read().await.calendar().clone())
}

async fn list_recommendations(State(state): State<AppState>) -> Json<RecommendationPage> {
    Json(state.session.read().await.recommendation_page())
}

async fn more_recommendations(State(state): State<AppState>) -> Json<RecommendationPage> {
    let mut session = state.session.write().await;
    session.show_more_recommendations();
    Json(session.recommendation_page())
}

async fn fewer_recommendations(State(state): State<AppState>) -> Json<RecommendationPage> {
    let mut session = state.session.write().await;
    session.show_fewer_recommendations();
    Json(session.recommendation_page())
}

async fn reload_catalog(State(state): State<AppState>) -> Json<CatalogStatus> {
    // fetch outside the lock; only the swap is exclusive
    let load = catalog::load_catalog(state.catalog_source.as_ref()).await;
    let status = CatalogStatus {
        courses: load.catalog.len(),
        error: load.error.clone(),
    };

    state.session.write().await.replace_catalog(load);
    info!("Catalog reloaded: {} courses", status.courses);
    Json(status)
}
