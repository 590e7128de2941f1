use std::{collections::HashMap, fmt};

use once_cell::sync::Lazy;
use regex::Regex;
use strsim::normalized_levenshtein;

use crate::{Res, spotify, types::FoundTrack};

/// Minimum combined similarity for a search result to count as a match.
pub const MATCH_THRESHOLD: f64 = 0.8;

/// Separator between title and artist in carry-over records. Chosen so it
/// cannot collide with anything a tagger would put in a track title.
pub const RECORD_DELIMITER: &str = "[][][]";

static PARENTHESIZED_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(.+\)$").expect("invalid suffix pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanKind {
    Artist,
    Track,
}

/// Normalizes a title or artist name before searching the catalog.
///
/// Artist names are cut at the first "and" and then at the first '&' so
/// collaborations collapse to their lead act. Track titles lose a trailing
/// parenthesized qualifier like "(Live)" or "(feat. ...)" unless it marks a
/// remix, which names a genuinely different track.
pub fn clean(item: &str, kind: CleanKind) -> String {
    match kind {
        CleanKind::Artist => {
            let mut cleaned = item;
            // substring match, not word-aware: "Brandy" becomes "Br"
            if let Some(pos) = cleaned.find("and") {
                cleaned = &cleaned[..pos];
            }
            if let Some(pos) = cleaned.find('&') {
                cleaned = &cleaned[..pos];
            }
            cleaned.trim_end().to_string()
        }
        CleanKind::Track => {
            let mut cleaned = item;
            if PARENTHESIZED_SUFFIX.is_match(item) && !item.to_lowercase().contains("remix") {
                if let Some(pos) = cleaned.find('(') {
                    cleaned = &cleaned[..pos];
                }
            }
            cleaned.trim_end().to_string()
        }
    }
}

pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Scores a search result against the cleaned title and artist it was
/// searched for. Title and artist similarity weigh in equally.
pub fn match_score(title: &str, artist: &str, found: &FoundTrack) -> f64 {
    let found_artist = found
        .artists
        .first()
        .map(|artist| artist.name.as_str())
        .unwrap_or_default();
    0.5 * similarity(artist, found_artist) + 0.5 * similarity(title, &found.name)
}

/// Splits a carry-over record at the first delimiter occurrence into its
/// title and artist halves.
pub fn parse_record(record: &str) -> Option<(String, String)> {
    record
        .split_once(RECORD_DELIMITER)
        .map(|(title, artist)| (title.to_string(), artist.to_string()))
}

/// A scrobbled track together with its catalog search outcome.
///
/// `title` and `artist` are the cleaned forms. `catalog` holds the first
/// search result when the search returned one, and `confidence` the combined
/// similarity score against it (0.0 when the search came up empty).
#[derive(Debug, Clone)]
pub struct CandidateTrack {
    pub title: String,
    pub artist: String,
    pub catalog: Option<FoundTrack>,
    pub confidence: f64,
}

impl CandidateTrack {
    /// Builds a candidate from already cleaned parts and a search outcome.
    pub fn from_search(title: String, artist: String, catalog: Option<FoundTrack>) -> CandidateTrack {
        let confidence = match &catalog {
            Some(found) => match_score(&title, &artist, found),
            None => 0.0,
        };
        CandidateTrack {
            title,
            artist,
            catalog,
            confidence,
        }
    }

    /// Cleans the raw title and artist, runs one catalog search and scores
    /// the first result.
    pub async fn locate(token: &str, title: &str, artist: &str) -> Res<CandidateTrack> {
        let title = clean(title, CleanKind::Track);
        let artist = clean(artist, CleanKind::Artist);
        let catalog = spotify::search::track(token, &title, &artist).await?;
        Ok(CandidateTrack::from_search(title, artist, catalog))
    }

    pub fn is_match(&self) -> bool {
        self.confidence >= MATCH_THRESHOLD
    }

    /// Returns the catalog URI, or a descriptive error for a track the
    /// search never found. The error surfaces here, at the moment the URI
    /// is actually needed, so that callers aggregating many tracks report
    /// the offending one.
    pub fn uri(&self) -> Res<String> {
        match &self.catalog {
            Some(found) => Ok(found.uri.clone()),
            None => Err(format!("{} not found by Spotify search.", self).into()),
        }
    }
}

impl fmt::Display for CandidateTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.title, RECORD_DELIMITER, self.artist)
    }
}

/// Memoizes catalog lookups per cleaned (title, artist) identity.
///
/// The widening fetch loop rescans the same entries many times; caching the
/// verdict keeps the search volume at one request per distinct track.
pub struct MatchCache {
    entries: HashMap<(String, String), CandidateTrack>,
}

impl MatchCache {
    pub fn new() -> MatchCache {
        MatchCache {
            entries: HashMap::new(),
        }
    }

    pub async fn resolve(&mut self, token: &str, title: &str, artist: &str) -> Res<CandidateTrack> {
        let key = (
            clean(title, CleanKind::Track),
            clean(artist, CleanKind::Artist),
        );
        if let Some(hit) = self.entries.get(&key) {
            return Ok(hit.clone());
        }
        let candidate = CandidateTrack::locate(token, title, artist).await?;
        self.entries.insert(key, candidate.clone());
        Ok(candidate)
    }
}
