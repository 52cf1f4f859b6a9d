//! ListCoursesHandler - public course catalogue query.

use std::sync::Arc;

use crate::domain::course::CourseError;
use crate::ports::{CourseRepository, CourseSummary};

/// Handler listing all courses without their lecture bodies.
pub struct ListCoursesHandler {
    courses: Arc<dyn CourseRepository>,
}

impl ListCoursesHandler {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn handle(&self) -> Result<Vec<CourseSummary>, CourseError> {
        let summaries = self
            .courses
            .list_summaries()
            .await
            .map_err(|e| CourseError::infrastructure(e.to_string()))?;
        Ok(summaries)
    }
}
