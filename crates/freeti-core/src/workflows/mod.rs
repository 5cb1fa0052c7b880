//! # Workflows Module
//!
//! High-level entry points that run the whole pipeline.
//!
//! - **Integration Workflow** ([`integrate`]) - One end-state pair to an estimate with
//!   diagnostics, or many pairs in parallel.

pub mod integrate;
