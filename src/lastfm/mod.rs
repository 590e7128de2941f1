//! # Last.fm Integration Module
//!
//! This module provides the read-only interface to the Last.fm REST API.
//! The rotation pipeline only ever asks one question of Last.fm: what were
//! the top tracks of an account over the last seven days. Everything else
//! (matching, deduplication, playlist assembly) happens against Spotify.
//!
//! ## Authentication
//!
//! The `user.gettoptracks` endpoint is public data and requires only the
//! API key from configuration, not a user session. The configured account
//! names select whose listening is aggregated.
//!
//! ## Error Handling
//!
//! Requests follow the same posture as the Spotify layer: 502 Bad Gateway
//! responses are retried after a delay, everything else is propagated so
//! the run fails fast rather than building a playlist from partial data.

pub mod top_tracks;
