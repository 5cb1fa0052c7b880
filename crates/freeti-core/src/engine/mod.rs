//! # Engine Module
//!
//! The four stages of the thermodynamic-integration pipeline, plus the
//! configuration, progress and error types shared by the workflows.
//!
//! ## Pipeline
//!
//! - **Model Builder** ([`model_builder`]) - Linearizes each end-state sample into a line over Lambda
//! - **Intersection Solver** ([`solver`]) - Finds where the lines cross and classifies it against `[0, 1]`
//! - **Piecewise Integrator** ([`integrator`]) - Exact area under the piecewise-linear model, or the endpoint average
//! - **Uncertainty Propagator** ([`uncertainty`]) - First-order error propagation, one named partial per source
//!
//! The integrator and the propagator both consume the solver's result and do not
//! depend on each other.

pub mod config;
pub mod error;
pub mod integrator;
pub mod model_builder;
pub mod progress;
pub mod solver;
pub mod uncertainty;
