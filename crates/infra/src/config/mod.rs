//! Configuration loading and management
//!
//! This module provides utilities for loading application configuration
//! from environment variables.

pub mod loader;

// Re-export commonly used items
pub use loader::load;
