//! Common test utilities for Mission Control CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Fixtures: Reusable snapshot exports

#![allow(dead_code)]

pub mod fixtures;

pub use env::*;
pub use fixtures::*;
