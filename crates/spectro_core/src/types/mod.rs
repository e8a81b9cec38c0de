//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for interpolation, solver and dataset operations
//!
//! # Re-exports
//!
//! [`InterpolationError`], [`SolverError`] and [`DataError`] are re-exported
//! at this module level.

pub mod error;

pub use error::{DataError, InterpolationError, SolverError};
