//! MongoDB implementation of the course repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::course::{Course, Lecture, MediaAsset};
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, Timestamp};
use crate::ports::{CourseRepository, CourseSummary};

const COLLECTION: &str = "courses";

/// Course document with embedded lectures.
#[derive(Debug, Serialize, Deserialize)]
struct CourseDocument {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    description: String,
    category: String,
    created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail: Option<MediaAsset>,
    lectures: Vec<Lecture>,
    lecture_count: usize,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl From<&Course> for CourseDocument {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.to_string(),
            title: course.title.clone(),
            description: course.description.clone(),
            category: course.category.clone(),
            created_by: course.created_by.clone(),
            thumbnail: course.thumbnail.clone(),
            lectures: course.lectures.clone(),
            lecture_count: course.lecture_count(),
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

impl TryFrom<CourseDocument> for Course {
    type Error = DomainError;

    fn try_from(doc: CourseDocument) -> Result<Self, Self::Error> {
        let id = doc
            .id
            .parse::<CourseId>()
            .map_err(|e| DomainError::new(ErrorCode::DatabaseError, e.to_string()))?;
        Ok(Course {
            id,
            title: doc.title,
            description: doc.description,
            category: doc.category,
            created_by: doc.created_by,
            thumbnail: doc.thumbnail,
            lectures: doc.lectures,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}

/// Projection used by `list_summaries`; lecture bodies never leave the
/// database.
#[derive(Debug, Deserialize)]
struct SummaryDocument {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    description: String,
    category: String,
    created_by: String,
    #[serde(default)]
    thumbnail: Option<MediaAsset>,
    #[serde(default)]
    lecture_count: usize,
}

/// MongoDB-backed `CourseRepository`.
pub struct MongoCourseRepository {
    collection: Collection<CourseDocument>,
    summaries: Collection<SummaryDocument>,
}

impl MongoCourseRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
            summaries: database.collection(COLLECTION),
        }
    }
}

fn db_error(e: mongodb::error::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, e.to_string())
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn insert(&self, course: &Course) -> Result<(), DomainError> {
        let document = CourseDocument::from(course);
        self.collection
            .insert_one(&document)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn update(&self, course: &Course) -> Result<(), DomainError> {
        let document = CourseDocument::from(course);
        let result = self
            .collection
            .replace_one(doc! { "_id": course.id.to_string() }, &document)
            .await
            .map_err(db_error)?;

        if result.matched_count == 0 {
            return Err(DomainError::new(
                ErrorCode::CourseNotFound,
                format!("Course {} does not exist", course.id),
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(db_error)?;

        document.map(Course::try_from).transpose()
    }

    async fn list_summaries(&self) -> Result<Vec<CourseSummary>, DomainError> {
        let cursor = self
            .summaries
            .find(doc! {})
            .projection(doc! { "lectures": 0 })
            .await
            .map_err(db_error)?;

        let documents: Vec<SummaryDocument> = cursor.try_collect().await.map_err(db_error)?;

        documents
            .into_iter()
            .map(|doc| {
                let id = doc
                    .id
                    .parse::<CourseId>()
                    .map_err(|e| DomainError::new(ErrorCode::DatabaseError, e.to_string()))?;
                Ok(CourseSummary {
                    id,
                    title: doc.title,
                    description: doc.description,
                    category: doc.category,
                    created_by: doc.created_by,
                    thumbnail: doc.thumbnail,
                    lecture_count: doc.lecture_count,
                })
            })
            .collect()
    }

    async fn delete(&self, id: &CourseId) -> Result<(), DomainError> {
        self.collection
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(db_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_roundtrips_through_domain() {
        let mut course = Course::new("Rust 101", "Intro", "programming", "admin-1").unwrap();
        course.add_lecture(Lecture::new("Ownership", "Moves", None).unwrap());

        let document = CourseDocument::from(&course);
        assert_eq!(document.lecture_count, 1);

        let back = Course::try_from(document).unwrap();
        assert_eq!(back, course);
    }

    #[test]
    fn summary_document_tolerates_missing_fields() {
        let json = format!(
            r#"{{"_id":"{}","title":"t","description":"d","category":"c","created_by":"by"}}"#,
            CourseId::new()
        );
        let doc: SummaryDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc.lecture_count, 0);
        assert!(doc.thumbnail.is_none());
    }
}
