//! Shared utilities used across the Glint backend.

pub mod timing;

pub use timing::Stopwatch;
