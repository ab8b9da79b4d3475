//! Portfolio module - value-over-time reconstruction.

pub mod history;

pub use history::*;
