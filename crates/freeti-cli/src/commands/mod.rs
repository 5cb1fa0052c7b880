pub mod batch;
pub mod integrate;
pub mod profile;
