//! Common test utilities for slidepick end-to-end tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated workspace in a temp directory
//! - A recording tool script that captures the delegated invocation

#![allow(dead_code)]

pub mod env;

pub use env::*;
