//! Sales-Proposal Tracking API Library
//!
//! This library provides both halves of the proposal tracking dashboard: the
//! in-memory store service exposed over a JSON REST API, and the client-side
//! views that consume it (dashboard aggregation, proposal entry, tracking
//! with Excel export, partner registration).
//!
//! # Modules
//!
//! - `api`: API definitions.
//! - `core`: Core domain modules.
//! - `client`: Client application views.
//! - `acompanhamento`: Tracking table and spreadsheet export.
//! - `api_client`: HTTP client for the store API.
//! - `config`: Configuration management.
//! - `dashboard`: Dashboard aggregation view.
//! - `entrada`: Proposal entry view.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers and router.
//! - `models`: Core data models.
//! - `moeda`: Brazilian-locale currency parsing and formatting.
//! - `parceiros`: Partner registration view.
//! - `policy`: Admission-policy seam ahead of the store operations.
//! - `store`: In-memory proposal/partner store.

pub mod api;
pub mod client;
pub mod core;

// Re-export primary modules for shared use in tests and other binaries
pub mod acompanhamento;
pub mod api_client;
pub mod config;
pub mod dashboard;
pub mod entrada;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod moeda;
pub mod parceiros;
pub mod policy;
pub mod store;
