//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! weekly rotation pipeline. It implements authentication, catalog search,
//! and playlist management, and handles all HTTP communication, OAuth flows,
//! error handling, and rate limiting on behalf of the higher-level commands.
//!
//! ## Overview
//!
//! Scroplcli touches Spotify in three places: once per lifetime of a token
//! to authorize the application, once per scrobbled track to find its
//! catalog counterpart, and once per even-numbered run to create and fill
//! the destination playlist. Each concern lives in its own submodule.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Matching)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Catalog Search (Track Lookup)
//!     └── Playlist Operations (Create, Fill, Cover)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements OAuth 2.0 PKCE (Proof Key for Code Exchange) flow:
//! - **Complete Auth Flow**: Handles the full OAuth process from initial request to token storage
//! - **PKCE Security**: Implements cryptographically secure authentication without client secrets
//! - **Token Management**: Automatic token refresh and expiration handling
//! - **Browser Integration**: Automatic browser launch for user authorization
//! - **Local Callback Server**: Temporary HTTP server for receiving OAuth callbacks
//!
//! ### Catalog Search Module
//!
//! [`search`] - Resolves scrobbled tracks against the Spotify catalog:
//! - **Single-Result Search**: Asks for exactly one track per query, since the
//!   match scorer only ever examines the first result
//! - **Market Pinning**: Queries the US market so results are stable across runs
//! - **Rate Limiting**: Respects Retry-After delays during bursts of searches
//! - **Transient Errors**: Retries 502 Bad Gateway responses automatically
//!
//! ### Playlist Management Module
//!
//! [`playlist`] - Provides playlist creation and modification capabilities:
//! - **Playlist Creation**: Creates the public rotation playlist for the current run
//! - **Recency Lookup**: Resolves the freshly created playlist by fetching the
//!   user's most recent playlist, tolerating Spotify's eventual consistency
//! - **Track Management**: Adds the shuffled track URIs in one batch
//! - **Cover Upload**: Pushes the hue-shifted JPEG cover as base64 image data
//!
//! ## Authentication Strategy
//!
//! The module implements OAuth 2.0 with PKCE for secure authentication:
//!
//! 1. **Code Verifier Generation**: Creates cryptographically random verifier
//! 2. **Challenge Creation**: Derives SHA256 challenge from verifier
//! 3. **Authorization Request**: Directs user to Spotify with challenge
//! 4. **Local Callback**: Receives authorization code via temporary HTTP server
//! 5. **Token Exchange**: Exchanges code + verifier for access token
//! 6. **Token Storage**: Securely stores tokens for future use
//!
//! ## Error Handling Philosophy
//!
//! ### Rate Limiting
//! - **Automatic Retry**: Handles 429 Too Many Requests with appropriate delays
//! - **Retry-After Headers**: Respects Spotify's recommended retry timing
//! - **Rate Limit Warnings**: Provides user feedback for excessive delays
//!
//! ### Network Resilience
//! - **Connection Failures**: Network errors are propagated to the caller
//! - **Service Errors**: Automatic retry for transient failures (502 Bad Gateway)
//! - **Fail Fast**: All other HTTP errors abort the run so a half-built
//!   playlist never looks like a finished one
//!
//! ## API Coverage
//!
//! The module covers the following Spotify Web API endpoints:
//!
//! - `GET /search` - Track search with type, limit and market parameters
//! - `POST /users/{user_id}/playlists` - Create new playlists
//! - `GET /users/{user_id}/playlists` - Most-recent playlist lookup
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks to playlists
//! - `PUT /playlists/{playlist_id}/images` - Upload custom playlist covers
//! - `POST /api/token` - Token exchange and refresh operations
//!
//! ## Error Types
//!
//! All functions return `Result` types with specific error handling:
//! - **`reqwest::Error`** - HTTP client errors, network issues, API errors
//! - **`String`** - Authentication and token management errors

pub mod auth;
pub mod playlist;
pub mod search;
