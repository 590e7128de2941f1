use std::{collections::HashSet, io::Cursor};

use base64::{
    Engine,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};
use image::ImageFormat;
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{Res, types::ScrobbleEntry};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupKey {
    Artist,
    Title,
}

pub fn dedup_scrobbles(entries: &mut Vec<ScrobbleEntry>, key: DedupKey) {
    let mut seen = HashSet::new();
    entries.retain(|entry| {
        let value = match key {
            DedupKey::Artist => entry.artist.clone(),
            DedupKey::Title => entry.title.clone(),
        };
        seen.insert(value) // first occurrence wins
    });
}

pub fn hue_shifted_cover(path: &str) -> Res<String> {
    let source = image::open(path)?;
    // full hue circle, same spread in both directions
    let degrees = rand::rng().random_range(-180..180);
    let shifted = source.huerotate(degrees);

    let mut buffer = Cursor::new(Vec::new());
    shifted.write_to(&mut buffer, ImageFormat::Jpeg)?;
    Ok(STANDARD.encode(buffer.into_inner()))
}
