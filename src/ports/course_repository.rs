//! Course repository port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::course::{Course, MediaAsset};
use crate::domain::foundation::{CourseId, DomainError};

/// Course projection without lecture bodies, used for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_by: String,
    pub thumbnail: Option<MediaAsset>,
    pub lecture_count: usize,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
            description: course.description.clone(),
            category: course.category.clone(),
            created_by: course.created_by.clone(),
            thumbnail: course.thumbnail.clone(),
            lecture_count: course.lecture_count(),
        }
    }
}

/// Repository port for course documents (lectures embedded).
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Insert a new course.
    async fn insert(&self, course: &Course) -> Result<(), DomainError>;

    /// Replace the stored state of an existing course.
    async fn update(&self, course: &Course) -> Result<(), DomainError>;

    /// Find a course by id, lectures included.
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError>;

    /// List all courses without lecture bodies.
    async fn list_summaries(&self) -> Result<Vec<CourseSummary>, DomainError>;

    /// Delete a course document.
    async fn delete(&self, id: &CourseId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::Lecture;

    #[test]
    fn course_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CourseRepository) {}
    }

    #[test]
    fn summary_omits_lectures_but_counts_them() {
        let mut course = Course::new("t", "d", "c", "by").unwrap();
        course.add_lecture(Lecture::new("l1", "d1", None).unwrap());
        course.add_lecture(Lecture::new("l2", "d2", None).unwrap());

        let summary = CourseSummary::from(&course);
        assert_eq!(summary.lecture_count, 2);
        assert_eq!(summary.title, "t");
    }
}
