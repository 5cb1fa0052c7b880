//! Serialization of pipeline outputs for external tools.

pub mod profile_csv;
