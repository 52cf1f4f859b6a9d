//! Course aggregate entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourseId, LectureId, Timestamp, ValidationError};

use super::CourseError;

/// Reference to a file stored in external media storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    /// Storage-assigned identifier, used for later deletion.
    pub public_id: String,

    /// Publicly servable URL.
    pub secure_url: String,
}

/// A single lecture within a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: LectureId,
    pub title: String,
    pub description: String,
    pub media: Option<MediaAsset>,
    pub created_at: Timestamp,
}

impl Lecture {
    /// Creates a lecture, validating required fields.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        media: Option<MediaAsset>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let description = description.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        Ok(Self {
            id: LectureId::new(),
            title,
            description,
            media,
            created_at: Timestamp::now(),
        })
    }
}

/// Partial update applied to an existing course.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Course aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_by: String,
    pub thumbnail: Option<MediaAsset>,
    pub lectures: Vec<Lecture>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Course {
    /// Creates a course with no lectures, validating required fields.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let description = description.into();
        let category = category.into();
        let created_by = created_by.into();

        for (field, value) in [
            ("title", &title),
            ("description", &description),
            ("category", &category),
            ("created_by", &created_by),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }

        let now = Timestamp::now();
        Ok(Self {
            id: CourseId::new(),
            title,
            description,
            category,
            created_by,
            thumbnail: None,
            lectures: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Number of lectures currently attached.
    pub fn lecture_count(&self) -> usize {
        self.lectures.len()
    }

    /// Attaches an uploaded thumbnail.
    pub fn set_thumbnail(&mut self, asset: MediaAsset) {
        self.thumbnail = Some(asset);
        self.updated_at = Timestamp::now();
    }

    /// Applies a partial update, ignoring unset fields.
    pub fn apply_update(&mut self, update: CourseUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        self.updated_at = Timestamp::now();
    }

    /// Appends a lecture.
    pub fn add_lecture(&mut self, lecture: Lecture) {
        self.lectures.push(lecture);
        self.updated_at = Timestamp::now();
    }

    /// Removes a lecture by id.
    ///
    /// # Errors
    ///
    /// Returns `LectureNotFound` if no lecture has the given id.
    pub fn remove_lecture(&mut self, lecture_id: &LectureId) -> Result<(), CourseError> {
        let index = self
            .lectures
            .iter()
            .position(|l| &l.id == lecture_id)
            .ok_or(CourseError::LectureNotFound(*lecture_id))?;

        self.lectures.remove(index);
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
