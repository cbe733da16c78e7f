//! Services - the inference engine.
//!
//! Stateless service structs that operate on domain types. The analyzer
//! borrows the read-only registry and owns nothing between calls.

pub mod analyzer;

pub use analyzer::{CableAnalyzer, analyze};
