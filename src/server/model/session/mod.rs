//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for session data storage and retrieval using
//! tower-sessions. Each submodule owns one key of the session with methods for inserting,
//! retrieving and removing its value.

pub mod flash;
pub mod user;
