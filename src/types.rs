use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub toptracks: TopTracksContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksContainer {
    pub track: Vec<TopTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTrack {
    pub name: String,
    pub playcount: String,
    pub artist: TopTrackArtist,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTrackArtist {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct ScrobbleEntry {
    pub title: String,
    pub artist: String,
    pub playcount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: SearchTracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracks {
    pub items: Vec<FoundTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundTrack {
    pub name: String,
    pub uri: String,
    pub artists: Vec<FoundTrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundTrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub snapshot_id: String,
}

#[derive(Tabled)]
pub struct CarriedTrackRow {
    pub title: String,
    pub artist: String,
}
