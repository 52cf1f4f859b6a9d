//! UpdateCourseHandler - admin command for partial course updates.

use std::sync::Arc;

use crate::domain::course::{Course, CourseError, CourseUpdate};
use crate::domain::foundation::CourseId;
use crate::ports::CourseRepository;

/// Command applying a partial update to a course.
#[derive(Debug, Clone)]
pub struct UpdateCourseCommand {
    pub course_id: CourseId,
    pub update: CourseUpdate,
}

/// Handler for updating courses.
pub struct UpdateCourseHandler {
    courses: Arc<dyn CourseRepository>,
}

impl UpdateCourseHandler {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn handle(&self, cmd: UpdateCourseCommand) -> Result<Course, CourseError> {
        let mut course = self
            .courses
            .find_by_id(&cmd.course_id)
            .await
            .map_err(|e| CourseError::infrastructure(e.to_string()))?
            .ok_or(CourseError::NotFound(cmd.course_id))?;

        course.apply_update(cmd.update);

        self.courses
            .update(&course)
            .await
            .map_err(|e| CourseError::infrastructure(e.to_string()))?;

        Ok(course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainError;
    use crate::ports::CourseSummary;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockCourseRepository {
        courses: Mutex<Vec<Course>>,
    }

    #[async_trait]
    impl CourseRepository for MockCourseRepository {
        async fn insert(&self, course: &Course) -> Result<(), DomainError> {
            self.courses.lock().unwrap().push(course.clone());
            Ok(())
        }

        async fn update(&self, course: &Course) -> Result<(), DomainError> {
            let mut courses = self.courses.lock().unwrap();
            if let Some(stored) = courses.iter_mut().find(|c| c.id == course.id) {
                *stored = course.clone();
            }
            Ok(())
        }

        async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
            Ok(self
                .courses
                .lock()
                .unwrap()
                .iter()
                .find(|c| &c.id == id)
                .cloned())
        }

        async fn list_summaries(&self) -> Result<Vec<CourseSummary>, DomainError> {
            Ok(vec![])
        }

        async fn delete(&self, _id: &CourseId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn updates_named_fields_only() {
        let course = Course::new("Rust 101", "Intro", "programming", "admin-1").unwrap();
        let course_id = course.id;
        let repo = Arc::new(MockCourseRepository {
            courses: Mutex::new(vec![course]),
        });
        let handler = UpdateCourseHandler::new(repo.clone());

        let updated = handler
            .handle(UpdateCourseCommand {
                course_id,
                update: CourseUpdate {
                    title: Some("Rust 201".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.title, "Rust 201");
        assert_eq!(updated.category, "programming");

        let stored = repo.find_by_id(&course_id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Rust 201");
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let repo = Arc::new(MockCourseRepository {
            courses: Mutex::new(Vec::new()),
        });
        let handler = UpdateCourseHandler::new(repo);

        let result = handler
            .handle(UpdateCourseCommand {
                course_id: CourseId::new(),
                update: CourseUpdate::default(),
            })
            .await;

        assert!(matches!(result, Err(CourseError::NotFound(_))));
    }
}
