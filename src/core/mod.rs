//! Configuration and wire models shared by the request and response sides.

pub mod config;
pub mod models;
