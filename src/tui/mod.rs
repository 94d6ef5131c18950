//! Terminal User Interface for browsing the beer catalog.
//!
//! This module provides a full-screen two-column catalog grid with refresh
//! and infinite scrolling, built on the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::CatalogApp`], wrapping the list
//!   reducer from [`crate::listing`]
//! - **View**: Rendering logic in `app::rendering` and [`components`]
//! - **Update**: Message-driven state transitions in `update()`
//!
//! Fetches run as bubbletea commands and come back as
//! [`messages::AppMsg::FetchCompleted`], where the reducer decides whether
//! the response is still current.
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway, view settings and telemetry sink are stored in
//! module-level storage before the program starts. Call
//! [`set_catalog_gateway`] and [`set_view_settings`] first;
//! `CatalogApp::init()` reads them back.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
mod storage;

pub use app::{CatalogApp, ViewSettings};
pub use storage::{set_catalog_gateway, set_telemetry_sink, set_view_settings};

pub(crate) use storage::{
    get_catalog_gateway, get_initial_terminal_size, get_telemetry_sink, get_view_settings,
};
