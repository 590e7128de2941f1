use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{config, types::{FoundTrack, SearchResponse}, warning};

/// Searches the Spotify catalog for a single track by title and artist.
///
/// Issues a track-type search for `"{title} {artist}"` against the US market
/// and returns the first result, if any. The caller is expected to pass
/// cleaned title and artist strings; the combined query mirrors what a user
/// would type into the Spotify search box.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `title` - Cleaned track title to search for
/// * `artist` - Cleaned artist name to search for
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Some(FoundTrack))` - The best catalog hit for the query
/// - `Ok(None)` - The search completed but returned no items
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Rate Limiting
///
/// The widening fetch loop can trigger bursts of searches, so this function
/// respects 429 Too Many Requests responses: it sleeps for the duration the
/// `Retry-After` header recommends (when at most 120 seconds) and retries.
/// Excessive delays produce a warning and the error is propagated.
///
/// # Retry Logic
///
/// 502 Bad Gateway responses are retried after a 10-second delay. Other
/// errors are propagated immediately.
///
/// # Example
///
/// ```
/// let token = "BQC..."; // Valid access token
/// match track(token, "Karma Police", "Radiohead").await? {
///     Some(found) => println!("uri: {}", found.uri),
///     None => println!("no catalog match"),
/// }
/// ```
pub async fn track(
    token: &str,
    title: &str,
    artist: &str,
) -> Result<Option<FoundTrack>, reqwest::Error> {
    let query = format!("{} {}", title, artist);
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    loop {
        let client = Client::new();
        let response = client
            .get(&api_url)
            .query(&[
                ("q", query.as_str()),
                ("type", "track"),
                ("limit", "1"),
                ("market", "US"),
            ])
            .bearer_auth(token)
            .send()
            .await;

        let response = match response {
            Ok(resp) => {
                // check for retry-after header
                if resp.status() == StatusCode::TOO_MANY_REQUESTS {
                    if let Some(retry_after) = resp.headers().get("retry-after") {
                        let retry_after = retry_after
                            .to_str()
                            .unwrap_or("0")
                            .parse::<u64>()
                            .unwrap_or(0);
                        if retry_after <= 120 {
                            sleep(Duration::from_secs(retry_after)).await;
                            continue; // retry
                        }
                        warning!(
                            "Retry after has reached a abnormal high of {} seconds. Try your best tommorrow again.",
                            retry_after
                        );
                    }
                }

                match resp.error_for_status() {
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
                }
            }
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let json = response.json::<SearchResponse>().await?;
        return Ok(json.tracks.items.into_iter().next());
    }
}
