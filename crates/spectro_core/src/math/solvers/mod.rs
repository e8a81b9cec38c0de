//! Root-finding solvers.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: Bracketing method without derivative requirement
//! - [`HalvingSearch`]: Step-halving search for decreasing response curves,
//!   used to locate attenuation layers
//!
//! ## Configuration
//!
//! [`BisectionSolver`] uses [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)

mod bisection;
mod config;
mod halving;

// Re-export public types at module level
pub use bisection::BisectionSolver;
pub use config::SolverConfig;
pub use halving::HalvingSearch;
