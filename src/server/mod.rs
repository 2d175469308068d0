//! Server application core modules.
//!
//! This module contains all server-side functionality for Snippetbox: configuration, HTTP
//! routing and middleware, form validation, session state, persistence of snippets and users,
//! and server-side HTML rendering.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod form;
pub mod middleware;
pub mod model;
pub mod render;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
