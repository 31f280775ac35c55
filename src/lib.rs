//! Lead Search Client Library
//!
//! Client side of the lead-generation workflow: it asks the search service to
//! run a places lookup, then pulls the stored leads from the listing service
//! and normalizes them for display.
//!
//! # Modules
//!
//! - `client`: HTTP client for the search and listing services.
//! - `config`: Configuration management.
//! - `controller`: Search workflow and session state.
//! - `errors`: Error handling types.
//! - `models`: Form, status and lead data models.
//! - `normalizer`: Raw lead to display lead mapping.
//! - `view`: Plain-text rendering of status and leads.

pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod normalizer;
pub mod view;
