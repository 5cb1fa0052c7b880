//! # Core Module
//!
//! Stateless building blocks of the free-energy calculation.
//!
//! - **Value Types** ([`models`]) - End-state samples, linear models, intersections and results
//! - **Sample Statistics** ([`statistics`]) - Mean and standard error of raw energy series
//! - **Diagnostic Profile** ([`profile`]) - The integrated curve sampled over Lambda for plotting
//! - **Output** ([`io`]) - CSV export of the diagnostic profile

pub mod io;
pub mod models;
pub mod profile;
pub mod statistics;
