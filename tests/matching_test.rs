use scroplcli::matching::*;
use scroplcli::types::{FoundTrack, FoundTrackArtist, ScrobbleEntry};
use scroplcli::utils::{DedupKey, dedup_scrobbles};

// Helper function to create a test search result
fn create_found_track(name: &str, uri: &str, artist_name: &str) -> FoundTrack {
    FoundTrack {
        name: name.to_string(),
        uri: uri.to_string(),
        artists: vec![FoundTrackArtist {
            name: artist_name.to_string(),
        }],
    }
}

// Helper function to create a test scrobble entry
fn create_scrobble(title: &str, artist: &str, playcount: &str) -> ScrobbleEntry {
    ScrobbleEntry {
        title: title.to_string(),
        artist: artist.to_string(),
        playcount: playcount.to_string(),
    }
}

#[test]
fn test_clean_artist_collaborations() {
    // Should cut at "and" and keep only the lead act
    assert_eq!(clean("Simon and Garfunkel", CleanKind::Artist), "Simon");

    // Should cut at '&' as well
    assert_eq!(clean("Earth, Wind & Fire", CleanKind::Artist), "Earth, Wind");
    assert_eq!(clean("Hall & Oates", CleanKind::Artist), "Hall");

    // Names without separators pass through unchanged
    assert_eq!(clean("Cher", CleanKind::Artist), "Cher");
    assert_eq!(clean("Fleetwood Mac", CleanKind::Artist), "Fleetwood Mac");
}

#[test]
fn test_clean_artist_substring_cut() {
    // The cut is a plain substring search, not word-aware
    assert_eq!(clean("Brandy", CleanKind::Artist), "Br");
    assert_eq!(clean("Grandmaster Flash", CleanKind::Artist), "Gr");
}

#[test]
fn test_clean_track_qualifiers() {
    // Should drop a trailing parenthesized qualifier
    assert_eq!(clean("Silver Springs (Live)", CleanKind::Track), "Silver Springs");
    assert_eq!(clean("Dreams (2004 Remaster)", CleanKind::Track), "Dreams");
    assert_eq!(
        clean("Gold Dust Woman (feat. Stevie Nicks)", CleanKind::Track),
        "Gold Dust Woman"
    );

    // Titles without a trailing qualifier pass through unchanged
    assert_eq!(clean("Dreams", CleanKind::Track), "Dreams");
    assert_eq!(
        clean("(Sittin' On) The Dock of the Bay", CleanKind::Track),
        "(Sittin' On) The Dock of the Bay"
    );
}

#[test]
fn test_clean_track_keeps_remixes() {
    // A remix names a different track, so the qualifier stays
    assert_eq!(
        clean("One More Time (Club Remix)", CleanKind::Track),
        "One More Time (Club Remix)"
    );
    assert_eq!(
        clean("Blue Monday (Hardfloor Remix)", CleanKind::Track),
        "Blue Monday (Hardfloor Remix)"
    );
}

#[test]
fn test_clean_track_cuts_at_first_parenthesis() {
    // With a trailing qualifier present, everything from the first
    // parenthesis on goes away
    assert_eq!(
        clean("Intro (Part 1) Outro (Part 2)", CleanKind::Track),
        "Intro"
    );
}

#[test]
fn test_similarity_is_case_insensitive() {
    assert_eq!(similarity("DREAMS", "dreams"), 1.0);
    assert_eq!(similarity("Fleetwood Mac", "fleetwood mac"), 1.0);

    // One edit over four characters
    assert_eq!(similarity("abcd", "abce"), 0.75);
}

#[test]
fn test_match_score_exact_result() {
    let found = create_found_track("Dreams", "spotify:track:abc", "Fleetwood Mac");
    let score = match_score("Dreams", "Fleetwood Mac", &found);

    // Perfect title and artist agreement scores 1.0
    assert_eq!(score, 1.0);
    assert!(score >= MATCH_THRESHOLD);
}

#[test]
fn test_match_score_weighs_both_halves() {
    // Exact title, close artist: 0.5 * 1.0 + 0.5 * 0.75
    let found = create_found_track("Dreams", "spotify:track:abc", "abce");
    assert_eq!(match_score("Dreams", "abcd", &found), 0.875);

    // Exact title, unrelated artist stays below the threshold
    let found = create_found_track("Dreams", "spotify:track:abc", "bbbb");
    let score = match_score("Dreams", "aaaa", &found);
    assert_eq!(score, 0.5);
    assert!(score < MATCH_THRESHOLD);
}

#[test]
fn test_match_score_without_artists() {
    // A result with no artist entries compares against the empty string
    let found = FoundTrack {
        name: "Dreams".to_string(),
        uri: "spotify:track:abc".to_string(),
        artists: vec![],
    };
    let score = match_score("Dreams", "Fleetwood Mac", &found);
    assert_eq!(score, 0.5);
}

#[test]
fn test_match_acceptance_rises_with_artist_similarity() {
    // At a fixed title, each step brings the found artist one edit closer
    // to the scrobbled "aaaa"
    let ladder = ["zzzz", "aazz", "aaaz", "aaaa"];

    let candidates: Vec<CandidateTrack> = ladder
        .iter()
        .map(|found_artist| {
            let found = create_found_track("Dreams", "spotify:track:abc", found_artist);
            CandidateTrack::from_search("Dreams".to_string(), "aaaa".to_string(), Some(found))
        })
        .collect();

    // The score only rises along the ladder
    for pair in candidates.windows(2) {
        assert!(pair[0].confidence <= pair[1].confidence);
    }

    // Acceptance switches once from rejected to accepted and never back
    let verdicts: Vec<bool> = candidates.iter().map(|c| c.is_match()).collect();
    assert_eq!(verdicts, vec![false, false, true, true]);
}

#[test]
fn test_candidate_without_catalog_result() {
    let candidate = CandidateTrack::from_search(
        "Dreams".to_string(),
        "Fleetwood Mac".to_string(),
        None,
    );

    // An empty search never matches
    assert_eq!(candidate.confidence, 0.0);
    assert!(!candidate.is_match());

    // Asking for the URI anyway names the offending track
    let err = candidate.uri().unwrap_err().to_string();
    assert!(err.contains("not found by Spotify search."));
    assert!(err.contains("Dreams"));
    assert!(err.contains("Fleetwood Mac"));
}

#[test]
fn test_candidate_with_catalog_result() {
    let found = create_found_track("Dreams", "spotify:track:abc", "Fleetwood Mac");
    let candidate = CandidateTrack::from_search(
        "Dreams".to_string(),
        "Fleetwood Mac".to_string(),
        Some(found),
    );

    assert_eq!(candidate.confidence, 1.0);
    assert!(candidate.is_match());
    assert_eq!(candidate.uri().unwrap(), "spotify:track:abc");
}

#[test]
fn test_record_display_and_parse() {
    let candidate = CandidateTrack::from_search(
        "Dreams".to_string(),
        "Fleetwood Mac".to_string(),
        None,
    );

    // Display renders the carry-over record form
    let record = candidate.to_string();
    assert_eq!(record, format!("Dreams{}Fleetwood Mac", RECORD_DELIMITER));

    // Parsing the record recovers both halves
    let (title, artist) = parse_record(&record).unwrap();
    assert_eq!(title, "Dreams");
    assert_eq!(artist, "Fleetwood Mac");
}

#[test]
fn test_parse_record_splits_at_first_delimiter() {
    let record = format!("a{}b{}c", RECORD_DELIMITER, RECORD_DELIMITER);
    let (title, artist) = parse_record(&record).unwrap();
    assert_eq!(title, "a");
    assert_eq!(artist, format!("b{}c", RECORD_DELIMITER));
}

#[test]
fn test_parse_record_rejects_plain_text() {
    assert!(parse_record("no delimiter here").is_none());
    assert!(parse_record("").is_none());
}

#[test]
fn test_dedup_scrobbles_by_artist() {
    let mut entries = vec![
        create_scrobble("Dreams", "Fleetwood Mac", "12"),
        create_scrobble("Landslide", "Fleetwood Mac", "9"), // Duplicate artist
        create_scrobble("Believe", "Cher", "7"),
        create_scrobble("Strong Enough", "Cher", "4"), // Duplicate artist
    ];

    dedup_scrobbles(&mut entries, DedupKey::Artist);

    // One entry per artist, the most-played one first in the list wins
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Dreams");
    assert_eq!(entries[1].title, "Believe");
}

#[test]
fn test_dedup_scrobbles_by_title() {
    let mut entries = vec![
        create_scrobble("Dreams", "Fleetwood Mac", "12"),
        create_scrobble("Dreams", "The Cranberries", "8"), // Duplicate title
        create_scrobble("Zombie", "The Cranberries", "6"),
    ];

    dedup_scrobbles(&mut entries, DedupKey::Title);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].artist, "Fleetwood Mac");
    assert_eq!(entries[1].title, "Zombie");
}

#[test]
fn test_dedup_scrobbles_uses_raw_names() {
    // Deduplication happens before any cleaning, so these stay distinct
    let mut entries = vec![
        create_scrobble("The Boxer", "Simon and Garfunkel", "5"),
        create_scrobble("You Can Call Me Al", "Simon", "3"),
    ];

    dedup_scrobbles(&mut entries, DedupKey::Artist);

    assert_eq!(entries.len(), 2);
}
