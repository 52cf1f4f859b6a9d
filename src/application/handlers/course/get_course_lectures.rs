//! GetCourseLecturesHandler - lecture access gated on subscription state.

use std::sync::Arc;

use crate::domain::course::{CourseError, Lecture};
use crate::domain::foundation::{CourseId, UserId};
use crate::ports::{CourseRepository, UserRepository};

/// Query for a course's lectures.
#[derive(Debug, Clone)]
pub struct GetCourseLecturesQuery {
    pub course_id: CourseId,
    pub user_id: UserId,
}

/// Handler returning a course's lectures.
///
/// Paid content: the caller must either be an admin or hold an active
/// subscription.
pub struct GetCourseLecturesHandler {
    courses: Arc<dyn CourseRepository>,
    users: Arc<dyn UserRepository>,
}

impl GetCourseLecturesHandler {
    pub fn new(courses: Arc<dyn CourseRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { courses, users }
    }

    pub async fn handle(&self, query: GetCourseLecturesQuery) -> Result<Vec<Lecture>, CourseError> {
        let user = self
            .users
            .find_by_id(&query.user_id)
            .await
            .map_err(|e| CourseError::infrastructure(e.to_string()))?
            .ok_or(CourseError::Unauthorized)?;

        let is_admin = matches!(user.role, crate::domain::user::Role::Admin);
        if !is_admin && !user.has_active_subscription() {
            return Err(CourseError::access_denied(
                "An active subscription is required to view lectures",
            ));
        }

        let course = self
            .courses
            .find_by_id(&query.course_id)
            .await
            .map_err(|e| CourseError::infrastructure(e.to_string()))?
            .ok_or(CourseError::NotFound(query.course_id))?;

        Ok(course.lectures)
    }
}
