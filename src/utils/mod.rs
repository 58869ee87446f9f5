//! # Utilities Module
//!
//! Utility functions for movement math, text and map connectivity.

pub mod connectivity;
pub mod math;

pub use connectivity::*;
pub use math::*;
