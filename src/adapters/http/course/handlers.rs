//! HTTP handlers for the course endpoints.

use std::collections::HashMap;

use axum::extract::{Json, Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::{AdminUser, AuthenticatedUser};
use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::course::{
    AddLectureCommand, CreateCourseCommand, GetCourseLecturesQuery, RemoveCourseCommand,
    RemoveLectureCommand, UpdateCourseCommand,
};
use crate::domain::foundation::{CourseId, LectureId};
use crate::ports::MediaUpload;

use super::dto::{CourseListResponse, CourseResponse, LecturesResponse, UpdateCourseRequest};

/// Parsed multipart form: text fields plus at most one file part.
struct ParsedForm {
    fields: HashMap<String, String>,
    file: Option<MediaUpload>,
}

/// Reads a multipart form, treating `file_field` as the upload and
/// everything else as text.
async fn read_form(mut multipart: Multipart, file_field: &str) -> Result<ParsedForm, ApiError> {
    let mut fields = HashMap::new();
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {}", e)))?
    {
        let name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        if name == file_field {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;

            file = Some(MediaUpload {
                file_name,
                content_type,
                bytes: bytes.to_vec(),
                folder: String::new(),
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::bad_request(format!("Malformed field '{}': {}", name, e)))?;
            fields.insert(name, value);
        }
    }

    Ok(ParsedForm { fields, file })
}

fn take(fields: &mut HashMap<String, String>, name: &str) -> String {
    fields.remove(name).unwrap_or_default()
}

/// GET /api/v1/courses
pub async fn list_courses(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let courses = state.list_courses_handler().handle().await?;

    Ok(Json(CourseListResponse {
        success: true,
        message: "All courses".to_string(),
        courses,
    }))
}

/// POST /api/v1/courses (admin, multipart with optional `thumbnail` part)
pub async fn create_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut form = read_form(multipart, "thumbnail").await?;

    let course = state
        .create_course_handler()
        .handle(CreateCourseCommand {
            title: take(&mut form.fields, "title"),
            description: take(&mut form.fields, "description"),
            category: take(&mut form.fields, "category"),
            created_by: take(&mut form.fields, "created_by"),
            thumbnail: form.file,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CourseResponse {
            success: true,
            message: "Course created successfully".to_string(),
            course,
        }),
    ))
}

/// GET /api/v1/courses/:id/lectures (active subscribers and admins)
pub async fn get_course_lectures(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(course_id): Path<CourseId>,
) -> Result<impl IntoResponse, ApiError> {
    let lectures = state
        .get_course_lectures_handler()
        .handle(GetCourseLecturesQuery {
            course_id,
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(LecturesResponse {
        success: true,
        message: "Course lectures fetched successfully".to_string(),
        lectures,
    }))
}

/// PUT /api/v1/courses/:id (admin)
pub async fn update_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(course_id): Path<CourseId>,
    Json(request): Json<UpdateCourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let course = state
        .update_course_handler()
        .handle(UpdateCourseCommand {
            course_id,
            update: request.into(),
        })
        .await?;

    Ok(Json(CourseResponse {
        success: true,
        message: "Course updated successfully".to_string(),
        course,
    }))
}

/// DELETE /api/v1/courses/:id (admin)
pub async fn remove_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(course_id): Path<CourseId>,
) -> Result<impl IntoResponse, ApiError> {
    let course = state
        .remove_course_handler()
        .handle(RemoveCourseCommand { course_id })
        .await?;

    Ok(Json(CourseResponse {
        success: true,
        message: "Course deleted successfully".to_string(),
        course,
    }))
}

/// POST /api/v1/courses/:id/lectures (admin, multipart with optional `lecture` part)
pub async fn add_lecture(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(course_id): Path<CourseId>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut form = read_form(multipart, "lecture").await?;

    let course = state
        .add_lecture_handler()
        .handle(AddLectureCommand {
            course_id,
            title: take(&mut form.fields, "title"),
            description: take(&mut form.fields, "description"),
            media: form.file,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CourseResponse {
            success: true,
            message: "Lecture successfully added to the course".to_string(),
            course,
        }),
    ))
}

/// DELETE /api/v1/courses/:id/lectures/:lecture_id (admin)
pub async fn remove_lecture(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path((course_id, lecture_id)): Path<(CourseId, LectureId)>,
) -> Result<impl IntoResponse, ApiError> {
    let course = state
        .remove_lecture_handler()
        .handle(RemoveLectureCommand {
            course_id,
            lecture_id,
        })
        .await?;

    Ok(Json(CourseResponse {
        success: true,
        message: "Lecture deleted successfully".to_string(),
        course,
    }))
}
