//! Shared types for the foundation layer.
//!
//! This module provides:
//! - Error types (`error`)

pub mod error;

pub use error::QuadratureError;
