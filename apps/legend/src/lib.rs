//! # Legend Library
//!
//! This library exposes the Legend CLI modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod config;

// Re-export legend_core for convenience
pub use legend_core;
