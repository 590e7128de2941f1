//! # CLI Module
//!
//! This module provides the command-line interface layer for Scroplcli, the
//! weekly playlist rotation tool. It implements all user-facing commands and
//! coordinates between the Last.fm client, the matching layer, the Spotify
//! integration, and the persisted state managers.
//!
//! ## Overview
//!
//! The CLI module is the primary interface between users (and cron) and the
//! application's functionality:
//!
//! - **Authentication Management**: OAuth 2.0 PKCE flow for Spotify API access
//! - **Rotation Runs**: The scheduled batch run that collects, matches and
//!   rotates tracks into playlists
//! - **State Inspection**: Offline queries of the run counter and the tracks
//!   waiting for the next playlist
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates Spotify OAuth authentication flow with PKCE security
//!
//! ### Rotation
//!
//! - [`run`] - Executes one rotation run. Odd-numbered runs collect a fresh
//!   week of top tracks and park them in the carry-over list; even-numbered
//!   runs merge the parked tracks with a fresh collection into a new shuffled
//!   playlist with a hue-shifted cover.
//!
//! ### Information Commands
//!
//! - [`status`] - Shows the run counter, what the next run will do, and the
//!   carried-over tracks as a table
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Persisted State)
//!     ↓
//! API Layer (Last.fm / Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command delegates to the appropriate modules while handling user
//! interaction, progress feedback, and error presentation.
//!
//! ## Error Handling Philosophy
//!
//! The run command fails fast: any error that would leave the playlist in a
//! half-built state terminates the program before the run counter is
//! advanced, so the next invocation retries the same run. The status command
//! degrades gracefully and prints whatever state it can load.
//!
//! ## Progress and User Experience
//!
//! Network-heavy phases show a spinner, and every stage reports through the
//! structured output macros (info, success, warning, error) so that cron
//! mail and terminals read the same way.
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! scroplcli auth                   # Authenticate with Spotify
//! ```
//!
//! ### Scheduled Usage
//! ```bash
//! scroplcli run                    # Invoked weekly by a scheduler
//! ```
//!
//! ### Inspection
//! ```bash
//! scroplcli status                 # What happened, what happens next
//! ```
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::spotify`] - Spotify API integration and authentication
//! - [`crate::lastfm`] - Last.fm top-track retrieval
//! - [`crate::matching`] - Track normalization and match scoring
//! - [`crate::management`] - Persisted state management
//! - [`crate::utils`] - Deduplication and cover-art helpers

mod auth;
mod run;
mod status;

pub use auth::auth;
pub use run::run;
pub use status::status;
