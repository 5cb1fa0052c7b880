//! Value types flowing through the integration pipeline.
//!
//! Every type here is an immutable value: the pipeline stages consume one and
//! produce the next, and nothing is shared or mutated across stages.

pub mod intersection;
pub mod linear;
pub mod result;
pub mod sample;
