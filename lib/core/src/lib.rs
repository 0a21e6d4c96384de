//! Core domain types and utilities for the chalkboard platform.
//!
//! This crate provides the foundational types and error handling shared by
//! the chalkboard course-platform client: the `Result` alias used across
//! crates and the strongly-typed user identifier.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ParseIdError, UserId};
