//! Shared HTTP client plumbing
//!
//! Every outbound integration goes through [`HttpClient`] so timeouts and
//! request logging stay uniform.

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
