//! Payment HTTP module.

mod dto;
mod handlers;
mod routes;

pub use routes::payment_routes;
