//! Router configuration for the course endpoints.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{
    add_lecture, create_course, get_course_lectures, list_courses, remove_course, remove_lecture,
    update_course,
};

/// Create the course API router.
///
/// # Routes
///
/// ## Public endpoints
/// - `GET /` - list courses (no lecture bodies)
///
/// ## Subscriber endpoints
/// - `GET /:id/lectures` - lectures (active subscription or admin)
///
/// ## Admin endpoints
/// - `POST /` - create course (multipart, optional `thumbnail`)
/// - `PUT /:id` - update course
/// - `DELETE /:id` - remove course
/// - `POST /:id/lectures` - add lecture (multipart, optional `lecture`)
/// - `DELETE /:id/lectures/:lecture_id` - remove lecture
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/:id", put(update_course).delete(remove_course))
        .route(
            "/:id/lectures",
            get(get_course_lectures).post(add_lecture),
        )
        .route("/:id/lectures/:lecture_id", delete(remove_lecture))
}
