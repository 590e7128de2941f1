//! Configuration management for the weekly playlist rotation CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, Last.fm API access, and other
//! runtime parameters.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `scroplcli/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/scroplcli/.env`
/// - macOS: `~/Library/Application Support/scroplcli/.env`
/// - Windows: `%LOCALAPPDATA%/scroplcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an error
/// string if directory creation or file loading fails.
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("scroplcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).expect("Failed to load .env file");
    Ok(())
}

/// Returns the server address for the local OAuth callback server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the local HTTP server should bind for
/// handling OAuth callbacks during the authentication flow.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify user ID for API operations.
///
/// Retrieves the `SPOTIFY_USER_ID` environment variable which identifies
/// the Spotify user account that owns the weekly playlists.
///
/// # Panics
///
/// Panics if the `SPOTIFY_USER_ID` environment variable is not set.
///
/// # Example
///
/// ```
/// let user_id = spotify_user(); // e.g., "username"
/// ```
pub fn spotify_user() -> String {
    env::var("SPOTIFY_USER_ID").expect("SPOTIFY_USER_ID must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform. The PKCE flow needs no client secret.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
///
/// # Example
///
/// ```
/// let client_id = spotify_client_id(); // e.g., "abc123..."
/// ```
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Retrieves the `SPOTIFY_API_REDIRECT_URI` environment variable which specifies
/// the callback URL that Spotify should redirect to after user authorization.
/// This must match the redirect URI registered in the Spotify application settings.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
///
/// # Example
///
/// ```
/// let redirect_uri = spotify_redirect_uri(); // e.g., "http://localhost:8080/callback"
/// ```
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the Spotify API scope permissions.
///
/// Retrieves the `SPOTIFY_API_AUTH_SCOPE` environment variable which defines
/// the scope of permissions requested during OAuth authentication. Playlist
/// creation and cover upload require `playlist-modify-public` and
/// `ugc-image-upload`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_SCOPE` environment variable is not set.
///
/// # Example
///
/// ```
/// let scope = spotify_scope(); // e.g., "playlist-modify-public ugc-image-upload"
/// ```
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").expect("SPOTIFY_API_AUTH_SCOPE must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// Retrieves the `SPOTIFY_API_AUTH_URL` environment variable which contains
/// the base URL for Spotify's OAuth authorization endpoint. This is where
/// users are redirected to grant permissions to the application.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let auth_url = spotify_apiauth_url(); // e.g., "https://accounts.spotify.com/authorize"
/// ```
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").expect("SPOTIFY_API_AUTH_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. This is used for all API
/// operations after authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which contains
/// the URL for exchanging authorization codes for access tokens during the
/// OAuth flow. This is used in the final step of authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Returns the Last.fm API base URL.
///
/// Retrieves the `LASTFM_API_URL` environment variable which contains the
/// base URL of the Last.fm REST API used to fetch weekly top tracks.
///
/// # Panics
///
/// Panics if the `LASTFM_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = lastfm_apiurl(); // e.g., "https://ws.audioscrobbler.com/2.0"
/// ```
pub fn lastfm_apiurl() -> String {
    env::var("LASTFM_API_URL").expect("LASTFM_API_URL must be set")
}

/// Returns the Last.fm API key.
///
/// Retrieves the `LASTFM_API_KEY` environment variable which contains the
/// API key obtained from the Last.fm developer platform. Reading top tracks
/// requires no user session, only the key.
///
/// # Panics
///
/// Panics if the `LASTFM_API_KEY` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_key = lastfm_api_key(); // e.g., "0123456789abcdef..."
/// ```
pub fn lastfm_api_key() -> String {
    env::var("LASTFM_API_KEY").expect("LASTFM_API_KEY must be set")
}

/// Returns the Last.fm accounts whose listening feeds the playlists.
///
/// Retrieves the `LASTFM_ACCOUNTS` environment variable, a comma-separated
/// list of Last.fm usernames, and splits it into individual account names.
/// Empty entries produced by stray commas are dropped.
///
/// # Panics
///
/// Panics if the `LASTFM_ACCOUNTS` environment variable is not set.
///
/// # Example
///
/// ```
/// let accounts = lastfm_accounts(); // e.g., ["alice", "bob", "carol"]
/// ```
pub fn lastfm_accounts() -> Vec<String> {
    env::var("LASTFM_ACCOUNTS")
        .expect("LASTFM_ACCOUNTS must be set")
        .split(',')
        .map(|account| account.trim().to_string())
        .filter(|account| !account.is_empty())
        .collect()
}

/// Returns the filesystem path of the static playlist cover image.
///
/// Retrieves the `PLAYLIST_COVER_PATH` environment variable which points at
/// the JPEG image used as cover source. Each playlist gets a hue-shifted
/// variant of this image.
///
/// # Panics
///
/// Panics if the `PLAYLIST_COVER_PATH` environment variable is not set.
///
/// # Example
///
/// ```
/// let cover = playlist_cover_path(); // e.g., "/home/user/pictures/cover.jpg"
/// ```
pub fn playlist_cover_path() -> String {
    env::var("PLAYLIST_COVER_PATH").expect("PLAYLIST_COVER_PATH must be set")
}
