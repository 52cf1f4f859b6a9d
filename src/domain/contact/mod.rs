//! Contact form domain module.

mod message;

pub use message::ContactMessage;
