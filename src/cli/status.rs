use tabled::Table;

use crate::{
    info,
    management::{CarryOverManager, RunCounterManager, RunParity},
    matching,
    types::CarriedTrackRow,
    warning,
};

pub async fn status() {
    match RunCounterManager::load().await {
        Ok(counter_mgr) => {
            let completed = counter_mgr.current();
            let next = completed + 1;
            let next_action = match RunParity::from_counter(next) {
                RunParity::Odd => "park a fresh week of tracks".to_string(),
                RunParity::Even => format!("assemble playlist {}", next / 2),
            };

            info!("Completed runs: {}", completed);
            info!("Run {} will {}.", next, next_action);
        }
        Err(e) => warning!("Failed to load run counter: {:?}", e),
    }

    match CarryOverManager::load().await {
        Ok(carry_over) => {
            let rows: Vec<CarriedTrackRow> = carry_over
                .records()
                .iter()
                .filter_map(|record| matching::parse_record(record))
                .map(|(title, artist)| CarriedTrackRow { title, artist })
                .collect();

            if rows.is_empty() {
                info!("No tracks are waiting for the next playlist.");
            } else {
                info!("Tracks waiting for the next playlist:");
                let table = Table::new(rows);
                println!("{}", table);
            }
        }
        Err(e) => warning!("Failed to load carry-over list: {:?}", e),
    }
}
