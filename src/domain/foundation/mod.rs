//! Foundation module - shared domain primitives.
//!
//! Value objects, identifiers, and error types that form the vocabulary
//! of the Lectern domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CourseId, LectureId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
