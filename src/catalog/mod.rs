//! Remote beer catalog access.
//!
//! This module wraps the public catalog REST endpoint. It builds paginated
//! `GET` requests, decodes the JSON array responses into [`Beer`] records and
//! maps transport, status and decoding failures into [`CatalogError`]
//! variants so that callers can log or surface them without depending on
//! `reqwest` internals.

pub mod error;
pub mod gateway;
pub mod models;
pub mod pagination;

pub use error::CatalogError;
pub use gateway::{CatalogGateway, HttpCatalogGateway};
pub use models::{Beer, BeerId};
pub use pagination::{PageNumber, PageRequest, PerPage};

#[cfg(test)]
pub use gateway::MockCatalogGateway;
