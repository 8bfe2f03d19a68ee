//! Test infrastructure for the configuration resolver
//!
//! Provides:
//! - Row fixtures for common port / VRF / system layouts
//! - A reference switch snapshot covering every lookup path
//! - Snapshot files on disk for load-path tests
//! - Test logging setup

pub mod fixtures;
mod logging;

pub use fixtures::*;
pub use logging::init_test_logging;
