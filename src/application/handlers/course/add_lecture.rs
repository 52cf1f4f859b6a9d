//! AddLectureHandler - admin command for adding a lecture to a course.

use std::sync::Arc;

use crate::domain::course::{Course, CourseError, Lecture};
use crate::domain::foundation::CourseId;
use crate::ports::{CourseRepository, MediaStorage, MediaUpload};

use super::create_course::MEDIA_FOLDER;

/// Command to add a lecture, optionally with uploaded media.
#[derive(Debug, Clone)]
pub struct AddLectureCommand {
    pub course_id: CourseId,
    pub title: String,
    pub description: String,
    pub media: Option<MediaUpload>,
}

/// Handler for adding lectures.
pub struct AddLectureHandler {
    courses: Arc<dyn CourseRepository>,
    media: Arc<dyn MediaStorage>,
}

impl AddLectureHandler {
    pub fn new(courses: Arc<dyn CourseRepository>, media: Arc<dyn MediaStorage>) -> Self {
        Self { courses, media }
    }

    pub async fn handle(&self, cmd: AddLectureCommand) -> Result<Course, CourseError> {
        let mut course = self
            .courses
            .find_by_id(&cmd.course_id)
            .await
            .map_err(|e| CourseError::infrastructure(e.to_string()))?
            .ok_or(CourseError::NotFound(cmd.course_id))?;

        let asset = match cmd.media {
            Some(mut upload) => {
                upload.folder = MEDIA_FOLDER.to_string();
                Some(
                    self.media
                        .upload(upload)
                        .await
                        .map_err(|e| CourseError::media_storage(e.to_string()))?,
                )
            }
            None => None,
        };

        let lecture = Lecture::new(cmd.title, cmd.description, asset)?;
        course.add_lecture(lecture);

        self.courses
            .update(&course)
            .await
            .map_err(|e| CourseError::infrastructure(e.to_string()))?;

        tracing::info!(
            course_id = %course.id,
            lecture_count = course.lecture_count(),
            "lecture added"
        );
        Ok(course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::MediaAsset;
    use crate::domain::foundation::{DomainError, ErrorCode};
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

    struct MockMediaStorage {
        fail: bool,
    }

    #[async_trait]
    impl MediaStorage for MockMediaStorage {
        async fn upload(&self, upload: MediaUpload) -> Result<MediaAsset, DomainError> {
            if self.fail {
                return Err(DomainError::new(
                    ErrorCode::MediaStorageError,
                    "Simulated upload failure",
                ));
            }
            Ok(MediaAsset {
                public_id: format!("{}/{}", upload.folder, upload.file_name),
                secure_url: format!("https://media.example.com/{}", upload.file_name),
            })
        }

        async fn delete(&self, _public_id: &str) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn seeded_repo() -> (Arc<MockCourseRepository>, CourseId) {
        let course = Course::new("Rust 101", "Intro", "programming", "admin-1").unwrap();
        let id = course.id;
        (
            Arc::new(MockCourseRepository {
                courses: Mutex::new(vec![course]),
            }),
            id,
        )
    }

    #[tokio::test]
    async fn adds_lecture_with_media() {
        let (repo, course_id) = seeded_repo();
        let handler = AddLectureHandler::new(repo.clone(), Arc::new(MockMediaStorage { fail: false }));

        let course = handler
            .handle(AddLectureCommand {
                course_id,
                title: "Ownership".to_string(),
                description: "Moves and borrows".to_string(),
                media: Some(MediaUpload {
                    file_name: "ownership.mp4".to_string(),
                    content_type: "video/mp4".to_string(),
                    bytes: vec![0u8; 32],
                    folder: String::new(),
                }),
            })
            .await
            .unwrap();

        assert_eq!(course.lecture_count(), 1);
        let media = course.lectures[0].media.as_ref().unwrap();
        assert!(media.public_id.starts_with("lms/"));

        let stored = repo.find_by_id(&course_id).await.unwrap().unwrap();
        assert_eq!(stored.lecture_count(), 1);
    }

    #[tokio::test]
    async fn missing_title_is_validation_error() {
        let (repo, course_id) = seeded_repo();
        let handler = AddLectureHandler::new(repo.clone(), Arc::new(MockMediaStorage { fail: false }));

        let result = handler
            .handle(AddLectureCommand {
                course_id,
                title: String::new(),
                description: "desc".to_string(),
                media: None,
            })
            .await;

        assert!(matches!(result, Err(CourseError::ValidationFailed { .. })));
        let stored = repo.find_by_id(&course_id).await.unwrap().unwrap();
        assert_eq!(stored.lecture_count(), 0);
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let (repo, _) = seeded_repo();
        let handler = AddLectureHandler::new(repo, Arc::new(MockMediaStorage { fail: false }));

        let result = handler
            .handle(AddLectureCommand {
                course_id: CourseId::new(),
                title: "t".to_string(),
                description: "d".to_string(),
                media: None,
            })
            .await;

        assert!(matches!(result, Err(CourseError::NotFound(_))));
    }

    #[tokio::test]
    async fn upload_failure_leaves_course_unchanged() {
        let (repo, course_id) = seeded_repo();
        let handler = AddLectureHandler::new(repo.clone(), Arc::new(MockMediaStorage { fail: true }));

        let result = handler
            .handle(AddLectureCommand {
                course_id,
                title: "t".to_string(),
                description: "d".to_string(),
                media: Some(MediaUpload {
                    file_name: "x.mp4".to_string(),
                    content_type: "video/mp4".to_string(),
                    bytes: vec![],
                    folder: String::new(),
                }),
            })
            .await;

        assert!(matches!(result, Err(CourseError::MediaStorage { .. })));
        let stored = repo.find_by_id(&course_id).await.unwrap().unwrap();
        assert_eq!(stored.lecture_count(), 0);
    }
}
