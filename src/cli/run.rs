use std::{collections::HashSet, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use tokio::time::sleep;

use crate::{
    Res, config, error, info, lastfm,
    management::{CarryOverManager, RunCounterManager, RunParity, TokenManager},
    matching::{CandidateTrack, MatchCache},
    spotify, success,
    utils::{self, DedupKey},
};

const TRACKS_PER_ACCOUNT: u32 = 3;
const REQUEST_CEILING: u32 = 100;
const PLAYLIST_DESCRIPTION: &str = "Top tracks of the last two weeks.";

pub async fn run() {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run scroplcli auth\n Error: {}",
                e
            );
        }
    };
    let token = token_mgr.get_valid_token().await;

    let mut counter_mgr = match RunCounterManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!("Failed to load run counter: {:?}", e);
        }
    };
    counter_mgr.increment();
    let run_number = counter_mgr.current();

    let accounts = config::lastfm_accounts();
    let mut cache = MatchCache::new();

    match counter_mgr.parity() {
        RunParity::Odd => {
            info!("Run {} parks this week's tracks for the next playlist.", run_number);

            let candidates =
                collect_accounts(&token, &mut cache, &accounts, &HashSet::new()).await;

            let mut records: Vec<String> = Vec::new();
            for candidate in &candidates {
                if let Err(e) = candidate.uri() {
                    error!("{}", e);
                }
                records.push(candidate.to_string());
            }

            let carry_over = CarryOverManager::new(records);
            if let Err(e) = carry_over.persist().await {
                error!("Failed to save carry-over list: {:?}", e);
            }

            success!("Parked {} tracks for next week's playlist.", candidates.len());
        }
        RunParity::Even => {
            let playlist_name = format!("Weekly Rotation {}", run_number / 2);
            info!("Run {} assembles playlist {}.", run_number, playlist_name);

            let carry_over = match CarryOverManager::load().await {
                Ok(manager) => manager,
                Err(e) => {
                    error!("Failed to load carry-over list: {:?}", e);
                }
            };
            let carried = match carry_over.parsed() {
                Ok(pairs) => pairs,
                Err(e) => {
                    error!("Failed to read carry-over list: {:?}", e);
                }
            };

            // carried tracks go through the search again so their URIs are current
            let mut uris: Vec<String> = Vec::new();
            for (title, artist) in &carried {
                let candidate = match cache.resolve(&token, title, artist).await {
                    Ok(candidate) => candidate,
                    Err(e) => {
                        error!("Failed to search carried track: {}", e);
                    }
                };
                match candidate.uri() {
                    Ok(uri) => uris.push(uri),
                    Err(e) => {
                        error!("{}", e);
                    }
                }
            }

            let excluded: HashSet<String> =
                carried.iter().map(|(title, _)| title.clone()).collect();
            let candidates = collect_accounts(&token, &mut cache, &accounts, &excluded).await;
            for candidate in &candidates {
                match candidate.uri() {
                    Ok(uri) => uris.push(uri),
                    Err(e) => {
                        error!("{}", e);
                    }
                }
            }

            uris.shuffle(&mut rand::rng());

            match spotify::playlist::create(playlist_name.clone(), PLAYLIST_DESCRIPTION.to_string())
                .await
            {
                Ok(created) => info!("Created playlist {}.", created.name),
                Err(e) => {
                    error!("Failed to create playlist: {}", e);
                }
            }

            // the new playlist shows up in listings only after a moment
            sleep(Duration::from_secs(2)).await;

            let playlist = match spotify::playlist::latest().await {
                Ok(Some(playlist)) => playlist,
                Ok(None) => {
                    error!("No playlist found after creating {}.", playlist_name);
                }
                Err(e) => {
                    error!("Failed to look up the new playlist: {}", e);
                }
            };

            match spotify::playlist::add_tracks(playlist.id.clone(), uris.clone()).await {
                Ok(_) => success!("Filled {} with {} tracks.", playlist_name, uris.len()),
                Err(e) => {
                    error!("Failed to add tracks to playlist: {}", e);
                }
            }

            let cover = match utils::hue_shifted_cover(&config::playlist_cover_path()) {
                Ok(cover) => cover,
                Err(e) => {
                    error!("Failed to prepare cover image: {}", e);
                }
            };
            if let Err(e) = spotify::playlist::upload_cover(playlist.id, cover).await {
                error!("Failed to upload playlist cover: {}", e);
            }

            success!("Playlist {} is ready.", playlist_name);
        }
    }

    // advanced only after the whole run succeeded, so a failed run repeats
    if let Err(e) = counter_mgr.persist().await {
        error!("Failed to save run counter: {:?}", e);
    }
}

async fn collect_accounts(
    token: &str,
    cache: &mut MatchCache,
    accounts: &[String],
    excluded_titles: &HashSet<String>,
) -> Vec<CandidateTrack> {
    let mut all_candidates: Vec<CandidateTrack> = Vec::new();

    for account in accounts {
        let pb = ProgressBar::new_spinner();
        pb.set_message(format!("Collecting top tracks for {}...", account));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        let survivors =
            match collect_top_tracks(token, cache, account, TRACKS_PER_ACCOUNT, excluded_titles)
                .await
            {
                Ok(survivors) => {
                    pb.finish_and_clear();
                    survivors
                }
                Err(e) => {
                    pb.finish_and_clear();
                    error!("Failed to collect top tracks for {}: {}", account, e);
                }
            };

        info!("{} contributes {} tracks.", account, survivors.len());
        all_candidates.extend(survivors);
    }

    all_candidates
}

async fn collect_top_tracks(
    token: &str,
    cache: &mut MatchCache,
    account: &str,
    limit: u32,
    excluded_titles: &HashSet<String>,
) -> Res<Vec<CandidateTrack>> {
    let mut request_size = limit;

    loop {
        let mut entries = lastfm::top_tracks::get_top_tracks(account, request_size).await?;
        utils::dedup_scrobbles(&mut entries, DedupKey::Artist);

        let mut survivors: Vec<CandidateTrack> = Vec::new();
        for entry in &entries {
            let candidate = cache.resolve(token, &entry.title, &entry.artist).await?;
            if candidate.is_match() && !excluded_titles.contains(&candidate.title) {
                survivors.push(candidate);
            }
        }

        if survivors.len() >= limit as usize {
            return Ok(survivors);
        }
        if request_size >= REQUEST_CEILING {
            // the listening week simply has no more usable tracks
            return Ok(survivors);
        }
        request_size += 1;
    }
}
