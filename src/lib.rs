//! gsrc-cli library
//!
//! This crate provides the core functionality for the `gsrc-cli` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle different aspects of the
//! announcement browsing and administration workflow:
//!
//! - [`api`] - Typed HTTP client for the announcement backend
//! - [`announcements`] - Loads the listing and renders it as HTML cards
//! - [`admin`] - Manual classification, collection jobs, and the dashboard auto-refresh
//! - [`render`] - Pure data-to-markup transforms for cards, alerts, and fragments
//! - [`filters`] - Search filter map built from CLI flags, sent as query parameters
//! - [`alerts`] - Ephemeral user notifications with severity and auto-expiry
//! - [`pages`] - Route detection for the `page` dispatch subcommand
//! - [`cli`] - Command-line interface orchestrating the above
//! - [`models`] - Announcement records and response envelopes
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! A listing load builds a filter map, fetches through the API client, and
//! renders the result as an HTML fragment:
//!
//! ```no_run
//! use gsrc_cli::{alerts::AlertStack, announcements, api::ApiClient, config::ResolvedConfig,
//!     errors::AppResult, filters::Filters};
//!
//! # async fn example() -> AppResult<()> {
//! let api = ApiClient::new(&ResolvedConfig::default())?;
//! let mut filters = Filters::new();
//! filters.insert("region", "48000");
//!
//! let mut alerts = AlertStack::new();
//! let page = announcements::load_announcements(&api, &filters, &mut alerts).await;
//! println!("{}", page.html);
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod alerts;
pub mod announcements;
pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod filters;
pub mod models;
pub mod pages;
pub mod render;
pub mod ui;
pub mod utils;
