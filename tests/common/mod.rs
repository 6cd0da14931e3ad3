//! Consolidated test utilities for git-stager
//!
//! Real-repository helpers for command tests plus recording collaborators for
//! dispatcher and coordinator tests.

pub mod assertions;
pub mod fixtures;
pub mod mocks;
pub mod repository;
