//! Numerical building blocks.
//!
//! - [`interpolators`]: 1D interpolation kernels
//! - [`linear_systems`]: tridiagonal and banded solvers
//! - [`solvers`]: bracketing and step-halving root finders

pub mod interpolators;
pub mod linear_systems;
pub mod solvers;
