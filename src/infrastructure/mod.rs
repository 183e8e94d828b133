//! Infrastructure layer for external integrations.
//!
//! Implements the contracts defined by the domain layer.
//!
//! # Modules
//!
//! - [`dns`] - Hostname existence checks through the system resolver
//! - [`persistence`] - PostgreSQL repository implementations

pub mod dns;
pub mod persistence;
