//! Adapters - implementations of port interfaces.
//!
//! - `razorpay` - payment gateway client (real HTTP adapter and mock)
//! - `mongo` - MongoDB repositories
//! - `media` - external media storage client
//! - `email` - SMTP mailer
//! - `http` - axum REST API

pub mod email;
pub mod http;
pub mod media;
pub mod mongo;
pub mod razorpay;
