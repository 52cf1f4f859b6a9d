//! Lectern - Learning Management REST Backend
//!
//! This crate implements course/lecture management with media upload,
//! a contact-form relay, and subscription payment handling backed by an
//! external payment gateway.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
