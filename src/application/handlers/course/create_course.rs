//! CreateCourseHandler - admin command for creating a course.

use std::sync::Arc;

use crate::domain::course::{Course, CourseError};
use crate::ports::{CourseRepository, MediaStorage, MediaUpload};

/// Folder all course media lands under in external storage.
pub(crate) const MEDIA_FOLDER: &str = "lms";

/// Command to create a course, optionally with a thumbnail upload.
#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_by: String,
    pub thumbnail: Option<MediaUpload>,
}

/// Handler for creating courses.
pub struct CreateCourseHandler {
    courses: Arc<dyn CourseRepository>,
    media: Arc<dyn MediaStorage>,
}

impl CreateCourseHandler {
    pub fn new(courses: Arc<dyn CourseRepository>, media: Arc<dyn MediaStorage>) -> Self {
        Self { courses, media }
    }

    pub async fn handle(&self, cmd: CreateCourseCommand) -> Result<Course, CourseError> {
        let mut course = Course::new(cmd.title, cmd.description, cmd.category, cmd.created_by)?;

        if let Some(mut upload) = cmd.thumbnail {
            upload.folder = MEDIA_FOLDER.to_string();
            let asset = self
                .media
                .upload(upload)
                .await
                .map_err(|e| CourseError::media_storage(e.to_string()))?;
            course.set_thumbnail(asset);
        }

        self.courses
            .insert(&course)
            .await
            .map_err(|e| CourseError::infrastructure(e.to_string()))?;

        tracing::info!(course_id = %course.id, title = %course.title, "course created");
        Ok(course)
    }
}
