//! Contact form HTTP module.

mod dto;
mod handlers;
mod routes;

pub use routes::contact_routes;
