//! RemoveCourseHandler - admin command for deleting a course.

use std::sync::Arc;

use crate::domain::course::{Course, CourseError};
use crate::domain::foundation::CourseId;
use crate::ports::{CourseRepository, MediaStorage};

/// Command to delete a course.
#[derive(Debug, Clone)]
pub struct RemoveCourseCommand {
    pub course_id: CourseId,
}

/// Handler for deleting courses.
///
/// Associated media assets are removed best-effort after the document is
/// gone; a storage failure is logged, not surfaced.
pub struct RemoveCourseHandler {
    courses: Arc<dyn CourseRepository>,
    media: Arc<dyn MediaStorage>,
}

impl RemoveCourseHandler {
    pub fn new(courses: Arc<dyn CourseRepository>, media: Arc<dyn MediaStorage>) -> Self {
        Self { courses, media }
    }

    pub async fn handle(&self, cmd: RemoveCourseCommand) -> Result<Course, CourseError> {
        let course = self
            .courses
            .find_by_id(&cmd.course_id)
            .await
            .map_err(|e| CourseError::infrastructure(e.to_string()))?
            .ok_or(CourseError::NotFound(cmd.course_id))?;

        self.courses
            .delete(&cmd.course_id)
            .await
            .map_err(|e| CourseError::infrastructure(e.to_string()))?;

        let mut public_ids: Vec<&str> = Vec::new();
        if let Some(thumbnail) = &course.thumbnail {
            public_ids.push(&thumbnail.public_id);
        }
        for lecture in &course.lectures {
            if let Some(media) = &lecture.media {
                public_ids.push(&media.public_id);
            }
        }
        for public_id in public_ids {
            if let Err(e) = self.media.delete(public_id).await {
                tracing::warn!(public_id, error = %e, "failed to delete media asset");
            }
        }

        tracing::info!(course_id = %course.id, "course removed");
        Ok(course)
    }
}
