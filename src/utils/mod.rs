//! Utility functions and helpers.
//!
//! This module contains formatting helpers shared by the text and JSON
//! renderers.

pub mod size;

pub use size::human_readable_size;
