//! Command implementations for the recordings CLI

pub mod serve;

pub use serve::run_serve;
