//! Course domain module.
//!
//! Courses hold ordered lectures; both may carry an uploaded media asset.

mod aggregate;
mod errors;

pub use aggregate::{Course, CourseUpdate, Lecture, MediaAsset};
pub use errors::CourseError;
