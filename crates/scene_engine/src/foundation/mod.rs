//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and the model transform composition
//! - Logging initialization

pub mod math;
pub mod logging;
