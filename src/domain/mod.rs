//! Domain layer containing the persisted entity and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - The [`entities::UrlRecord`] mapping and its creation input
//! - [`repositories`] - Store contract implemented by the infrastructure layer
//! - [`resolver`] - Hostname existence check used to gate new URLs
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented in [`crate::infrastructure`]
//! - Business logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod resolver;
