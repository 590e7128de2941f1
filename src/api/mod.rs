//! # API Module
//!
//! This module provides the HTTP endpoints served by the local web server
//! during interactive authentication. It implements the OAuth callback and a
//! health check.
//!
//! ## Overview
//!
//! Scroplcli is a batch program and normally serves no HTTP at all. The one
//! exception is `scroplcli auth`, which briefly runs a local server so that
//! Spotify's authorization redirect has somewhere to land:
//!
//! - **OAuth Authentication Flow**: [`callback`] completes the PKCE flow by
//!   exchanging the authorization code for an access token and handing it to
//!   the waiting auth command through shared state.
//! - **Health Monitoring**: [`health`] returns application status and version
//!   information, useful to verify the listener is up while authorizing.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is an async function wired into the router in
//! [`crate::server`].
//!
//! ## Security Considerations
//!
//! - Uses OAuth 2.0 PKCE flow for enhanced security without exposing client secrets
//! - Implements proper state management for temporary authentication data
//! - Handles authentication failures gracefully with appropriate error responses
//!
//! ## Related Modules
//!
//! - [`crate::spotify`] - Spotify API integration
//! - [`crate::types`] - Type definitions for authentication tokens

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
