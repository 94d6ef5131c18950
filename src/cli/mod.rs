//! CLI operation mode handlers.
//!
//! This module contains the implementations for the two operation modes:
//! - [`catalog_tui`]: Full-screen two-column catalog browser
//! - [`print_pages`]: Load a fixed number of pages and print a summary

pub mod catalog_tui;
pub mod print_pages;
