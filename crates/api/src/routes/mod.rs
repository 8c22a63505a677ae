//! HTTP route handlers

pub mod analyze;
pub mod auth;
pub mod calendar;
pub mod health;
