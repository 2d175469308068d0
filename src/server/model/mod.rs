//! Server application models and type definitions.
//!
//! This module contains the shared application state, database model type aliases, typed
//! session entries and the per-request scope handed to handlers.

pub mod app;
pub mod auth;
pub mod db;
pub mod scope;
pub mod session;
