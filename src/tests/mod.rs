//! Test modules for the hashtrie-ring crate.
//!
//! This module contains crate-internal test suites:
//! - Model-checked property tests for both data structures
//! - Configuration loading and validation tests
//! - Error conversion tests
//! - Shared strategies and fixtures

pub mod test_utils;
