use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::IntoResponse;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

pub const GREETING: &str = "Hello World!";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn hello() -> &'static str {
    GREETING
}

async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<CourseDto>>, AppError> {
    let courses = state
        .store
        .list()
        .await?
        .into_iter()
        .map(CourseDto::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(courses))
}

async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<CourseDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let course = state.store.create(Course::from(req)).await?;
    let created = CourseDto::try_from(course)?;
    info!("created course {}", created.course_id);

    let location = format!("/courses/{}", created.course_id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CourseDto>, AppError> {
    let course = state.store.get(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(CourseDto::try_from(course)?))
}

async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<CourseDto>, JsonRejection>,
) -> Result<Json<CourseDto>, AppError> {
    let Json(req) = payload?;
    let course = state
        .store
        .update(id, Course::from(req))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(CourseDto::try_from(course)?))
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CourseDto>, AppError> {
    let course = state.store.delete(id).await?.ok_or(AppError::NotFound)?;
    info!("deleted course {}", id);
    Ok(Json(CourseDto::try_from(course)?))
}
