use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{ScrobbleEntry, TopTracksResponse},
};

/// Retrieves the weekly top tracks of a Last.fm account.
///
/// Queries `user.gettoptracks` for the last seven days and flattens the
/// response into scrobble entries. The entries arrive ordered by play count,
/// most-played first, which later stages rely on when deduplicating.
///
/// # Arguments
///
/// * `account` - Last.fm username whose listening is fetched
/// * `limit` - Maximum number of tracks to request
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<ScrobbleEntry>)` - Top tracks with title, artist and play count
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Retry Logic
///
/// The function implements automatic retry logic for 502 Bad Gateway errors
/// with a 10-second delay between attempts. Other errors are propagated
/// immediately.
///
/// # Example
///
/// ```
/// let tracks = get_top_tracks("some-account", 3).await?;
/// for track in tracks {
///     println!("{} by {} ({} plays)", track.title, track.artist, track.playcount);
/// }
/// ```
pub async fn get_top_tracks(
    account: &str,
    limit: u32,
) -> Result<Vec<ScrobbleEntry>, reqwest::Error> {
    let api_key = config::lastfm_api_key();
    let api_url = config::lastfm_apiurl();
    let limit_param = limit.to_string();

    loop {
        let client = Client::new();
        let response = client
            .get(&api_url)
            .query(&[
                ("method", "user.gettoptracks"),
                ("user", account),
                ("api_key", api_key.as_str()),
                ("format", "json"),
                ("period", "7day"),
                ("limit", limit_param.as_str()),
            ])
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

        let json = response.json::<TopTracksResponse>().await?;
        let entries = json
            .toptracks
            .track
            .into_iter()
            .map(|track| ScrobbleEntry {
                title: track.name,
                artist: track.artist.name,
                playcount: track.playcount,
            })
            .collect();

        return Ok(entries);
    }
}
