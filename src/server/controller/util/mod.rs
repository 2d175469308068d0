//! Utility extractors for controller request handling.

pub mod form;
