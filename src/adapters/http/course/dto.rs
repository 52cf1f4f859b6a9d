//! HTTP DTOs for the course endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::course::{Course, CourseUpdate, Lecture};
use crate::ports::CourseSummary;

/// Body of the course update endpoint; unset fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl From<UpdateCourseRequest> for CourseUpdate {
    fn from(request: UpdateCourseRequest) -> Self {
        CourseUpdate {
            title: request.title,
            description: request.description,
            category: request.category,
        }
    }
}

/// Envelope for the course catalogue.
#[derive(Debug, Clone, Serialize)]
pub struct CourseListResponse {
    pub success: bool,
    pub message: String,
    pub courses: Vec<CourseSummary>,
}

/// Envelope for a single course (lectures included).
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub success: bool,
    pub message: String,
    pub course: Course,
}

/// Envelope for a course's lectures.
#[derive(Debug, Clone, Serialize)]
pub struct LecturesResponse {
    pub success: bool,
    pub message: String,
    pub lectures: Vec<Lecture>,
}
