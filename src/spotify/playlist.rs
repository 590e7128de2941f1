use std::time::Duration;

use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use tokio::time::sleep;

use crate::{
    config, error,
    management::TokenManager,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, GetUserPlaylistsResponse, Playlist,
    },
};

/// Creates a new public playlist for the configured Spotify user.
///
/// Sends a playlist creation request with the given name and description.
/// The playlist is always public and never collaborative, matching how the
/// weekly rotation playlists are shared.
///
/// # Arguments
///
/// * `name` - Display name of the new playlist
/// * `description` - Description shown under the playlist title
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(CreatePlaylistResponse)` - Id and name of the created playlist
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Authentication
///
/// Loads the token from the token manager. If no valid token is found,
/// the function terminates the program with an error message directing
/// the user to run `scroplcli auth`.
///
/// # Consistency Note
///
/// The Web API acknowledges creation before the playlist is visible in all
/// listing endpoints. Callers that need to find the playlist again should
/// wait briefly and resolve it via [`latest`].
///
/// # Retry Logic
///
/// 502 Bad Gateway responses are retried after a 10-second delay. Other
/// errors are propagated immediately.
pub async fn create(
    name: String,
    description: String,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run scroplcli auth\n Error: {}",
                e
            );
        }
    };

    let api_url = format!(
        "{uri}/users/{user}/playlists",
        uri = &config::spotify_apiurl(),
        user = &config::spotify_user()
    );

    let request = CreatePlaylistRequest {
        name,
        description,
        public: true,
        collaborative: false,
    };

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }

                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let json = response.json::<CreatePlaylistResponse>().await?;
        return Ok(json);
    }
}

/// Retrieves the most recently created playlist of the configured user.
///
/// Fetches the user's playlists with `limit=1`, which the Web API orders by
/// recency, and returns the first entry. Used right after [`create`] to
/// resolve the id of the playlist that was just made.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Some(Playlist))` - The user's most recent playlist
/// - `Ok(None)` - The user has no playlists
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Authentication
///
/// Loads the token from the token manager. If no valid token is found,
/// the function terminates the program with an error message directing
/// the user to run `scroplcli auth`.
///
/// # Retry Logic
///
/// 502 Bad Gateway responses are retried after a 10-second delay. Other
/// errors are propagated immediately.
pub async fn latest() -> Result<Option<Playlist>, reqwest::Error> {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run scroplcli auth\n Error: {}",
                e
            );
        }
    };

    let api_url = format!(
        "{uri}/users/{user}/playlists?limit={limit}",
        uri = &config::spotify_apiurl(),
        user = &config::spotify_user(),
        limit = "1"
    );

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }

                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let json = response.json::<GetUserPlaylistsResponse>().await?;
        return Ok(json.items.into_iter().next());
    }
}

/// Adds a batch of tracks to an existing playlist.
///
/// Appends the given track URIs to the playlist in request order. The
/// rotation playlist never exceeds the 100-track single-request limit of
/// the endpoint, so no chunking is needed here.
///
/// # Arguments
///
/// * `playlist_id` - Id of the playlist to extend
/// * `uris` - Spotify track URIs in the order they should appear
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(AddTrackToPlaylistResponse)` - Snapshot id of the updated playlist
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Authentication
///
/// Loads the token from the token manager. If no valid token is found,
/// the function terminates the program with an error message directing
/// the user to run `scroplcli auth`.
///
/// # Retry Logic
///
/// 502 Bad Gateway responses are retried after a 10-second delay. Other
/// errors are propagated immediately.
pub async fn add_tracks(
    playlist_id: String,
    uris: Vec<String>,
) -> Result<AddTrackToPlaylistResponse, reqwest::Error> {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run scroplcli auth\n Error: {}",
                e
            );
        }
    };

    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let request = AddTrackToPlaylistRequest { uris };

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }

                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let json = response.json::<AddTrackToPlaylistResponse>().await?;
        return Ok(json);
    }
}

/// Uploads a custom cover image to a playlist.
///
/// Sends the base64-encoded JPEG as the request body with an `image/jpeg`
/// content type, replacing the auto-generated mosaic cover.
///
/// # Arguments
///
/// * `playlist_id` - Id of the playlist receiving the cover
/// * `image_b64` - Base64-encoded JPEG data (standard alphabet, no data URL prefix)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(())` - The upload was accepted
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Authentication
///
/// Loads the token from the token manager. If no valid token is found,
/// the function terminates the program with an error message directing
/// the user to run `scroplcli auth`. The token must carry the
/// `ugc-image-upload` scope.
///
/// # Retry Logic
///
/// 502 Bad Gateway responses are retried after a 10-second delay. Other
/// errors are propagated immediately.
pub async fn upload_cover(playlist_id: String, image_b64: String) -> Result<(), reqwest::Error> {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run scroplcli auth\n Error: {}",
                e
            );
        }
    };

    let api_url = format!(
        "{uri}/playlists/{playlist_id}/images",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client
            .put(&api_url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "image/jpeg")
            .body(image_b64.clone())
            .send()
            .await;

        match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(_) => return Ok(()),
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }

                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        }
    }
}
