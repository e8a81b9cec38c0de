//! # spectro_core: Interpolation Foundation for Spectrometry
//!
//! ## Layer 1 (Foundation) Role
//!
//! spectro_core is the bottom layer of the workspace, providing:
//! - Interpolation kernels: linear, cubic spline, Pchip, Akima, B-spline
//!   (`math::interpolators`)
//! - Linear system and root-finding helpers (`math::linear_systems`,
//!   `math::solvers`)
//! - Method dispatch, extrapolation and log-scale transforms (`interpolation`)
//! - Validated sample containers: `Dataset`, `Spectrum`
//! - Error types: `InterpolationError`, `SolverError`, `DataError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - num-traits: Generic floating-point kernels
//! - thiserror: Error enums
//! - tracing: Diagnostics
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use spectro_core::dataset::Dataset;
//! use spectro_core::interpolation::{Method, Scale};
//!
//! let data = Dataset::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 8.0, 27.0, 64.0]).unwrap();
//!
//! // A single point
//! let y = data.interpolate_one(2.5, Method::CubicSpline).unwrap();
//! assert!((y - 15.625).abs() < 1e-9);
//!
//! // Several methods side by side
//! let table = data
//!     .interpolate_many(&[1.5, 3.5], &Method::ALL, Scale::Linear)
//!     .unwrap();
//! assert_eq!(table.columns().len(), 5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for errors, methods and options

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod dataset;
pub mod interpolation;
pub mod math;
pub mod spectrum;
pub mod types;
