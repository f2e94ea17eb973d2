//! Common test utilities for assetgz CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - File helpers for writing assets with explicit modification times

pub mod env;

pub use env::*;
