//! Data access layer repositories.
//!
//! Repositories are thin wrappers around SeaORM queries, generic over any
//! [`ConnectionTrait`](sea_orm::ConnectionTrait) so they can run against a pooled connection or
//! inside a transaction. They return raw [`DbErr`](sea_orm::DbErr)s and leave the mapping to
//! sentinel conditions to the service layer.

pub mod snippet;
pub mod user;
