//! Course management handlers.
//!
//! ## Commands
//! - Creating, updating, and removing courses (admin)
//! - Adding and removing lectures, with optional media upload (admin)
//!
//! ## Queries
//! - Listing courses without lecture bodies
//! - Fetching a course's lectures (active subscribers and admins)

mod add_lecture;
mod create_course;
mod get_course_lectures;
mod list_courses;
mod remove_course;
mod remove_lecture;
mod update_course;

// Commands
pub use add_lecture::{AddLectureCommand, AddLectureHandler};
pub use create_course::{CreateCourseCommand, CreateCourseHandler};
pub use remove_course::{RemoveCourseCommand, RemoveCourseHandler};
pub use remove_lecture::{RemoveLectureCommand, RemoveLectureHandler};
pub use update_course::{UpdateCourseCommand, UpdateCourseHandler};

// Queries
pub use get_course_lectures::{GetCourseLecturesHandler, GetCourseLecturesQuery};
pub use list_courses::ListCoursesHandler;
