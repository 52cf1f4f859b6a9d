//! RemoveLectureHandler - admin command for deleting a lecture.

use std::sync::Arc;

use crate::domain::course::{Course, CourseError};
use crate::domain::foundation::{CourseId, LectureId};
use crate::ports::{CourseRepository, MediaStorage};

/// Command to remove a lecture from a course.
#[derive(Debug, Clone)]
pub struct RemoveLectureCommand {
    pub course_id: CourseId,
    pub lecture_id: LectureId,
}

/// Handler for removing lectures.
pub struct RemoveLectureHandler {
    courses: Arc<dyn CourseRepository>,
    media: Arc<dyn MediaStorage>,
}

impl RemoveLectureHandler {
    pub fn new(courses: Arc<dyn CourseRepository>, media: Arc<dyn MediaStorage>) -> Self {
        Self { courses, media }
    }

    pub async fn handle(&self, cmd: RemoveLectureCommand) -> Result<Course, CourseError> {
        let mut course = self
            .courses
            .find_by_id(&cmd.course_id)
            .await
            .map_err(|e| CourseError::infrastructure(e.to_string()))?
            .ok_or(CourseError::NotFound(cmd.course_id))?;

        let removed_media = course
            .lectures
            .iter()
            .find(|l| l.id == cmd.lecture_id)
            .and_then(|l| l.media.clone());

        course.remove_lecture(&cmd.lecture_id)?;

        self.courses
            .update(&course)
            .await
            .map_err(|e| CourseError::infrastructure(e.to_string()))?;

        if let Some(media) = removed_media {
            if let Err(e) = self.media.delete(&media.public_id).await {
                tracing::warn!(public_id = %media.public_id, error = %e, "failed to delete media asset");
            }
        }

        Ok(course)
    }
}
