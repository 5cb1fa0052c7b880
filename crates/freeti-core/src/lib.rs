//! # FreeTI Core Library
//!
//! Free-energy differences between two thermodynamic end-states (Lambda=0 and
//! Lambda=1) by thermodynamic integration over a piecewise-linear energy model,
//! with first-order propagation of the measurement uncertainties.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Immutable value types (`EndStateSample`, `LinearModel`,
//!   `Intersection`, `IntegrationResult`), sample statistics, and the diagnostic profile.
//!
//! - **[`engine`]: The Pipeline.** Model Builder → Intersection Solver →
//!   {Piecewise Integrator, Uncertainty Propagator}, with configuration and errors.
//!
//! - **[`workflows`]: The Public API.** Runs the pipeline for one pair or a batch and
//!   returns a report carrying every intermediate result.
//!
//! ```
//! use freeti::workflows::integrate::free_energy;
//!
//! let result = free_energy(
//!     [2.93809314, 0.00598791, -0.08426016, 0.00364061],
//!     [2.76668567, 0.00611661, -0.08411737, 0.003613],
//! );
//! assert!((result.value - 2.852389405).abs() < 1e-9);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
