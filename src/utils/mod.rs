//! Utility functions

pub mod escape;

pub use escape::*;
