// Scrape ingest: the payload handed over by the external scraper,
// trade-row deduplication, and roster-ready player construction.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Player, RawSeasonRow, SeasonStat};

/// Team code used for the aggregate row of a player traded mid-season.
const AGGREGATE_TEAM: &str = "TOT";

/// What the scraper produces for one player-page visit: identity fields
/// plus the per-game table rows in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedPlayer {
    pub name: String,
    pub image: String,
    pub bball_ref_url: String,
    pub rows: Vec<RawSeasonRow>,
}

impl ScrapedPlayer {
    /// Build a roster-ready `Player` from this payload.
    ///
    /// Trade rows are collapsed here, once per scrape, before the player
    /// enters the roster. The assigned id is opaque and stable for the
    /// lifetime of the roster entry.
    pub fn into_player(self) -> Player {
        let stats = dedupe(&self.rows)
            .into_iter()
            .map(|row| SeasonStat {
                date: row.season_label,
                points: Some(row.points),
                assists: Some(row.assists),
                rebounds: Some(row.rebounds),
            })
            .collect();

        Player {
            id: generate_player_id(),
            name: self.name,
            image: self.image,
            bball_ref_url: self.bball_ref_url,
            hide_status: false,
            stats,
        }
    }
}

/// Collapse multi-team trade rows into one row per season.
///
/// For each distinct season label, encountered in source order: keep the
/// `"TOT"` aggregate row if one exists for that label, otherwise keep the
/// first-encountered row. Output preserves first-occurrence label order.
/// Empty input yields empty output.
pub fn dedupe(rows: &[RawSeasonRow]) -> Vec<RawSeasonRow> {
    let mut order: Vec<String> = Vec::new();
    let mut chosen: HashMap<String, RawSeasonRow> = HashMap::new();

    for row in rows {
        match chosen.get(&row.season_label) {
            None => {
                order.push(row.season_label.clone());
                chosen.insert(row.season_label.clone(), row.clone());
            }
            Some(existing) => {
                if existing.team != AGGREGATE_TEAM && row.team == AGGREGATE_TEAM {
                    debug!(
                        season = %row.season_label,
                        "aggregate row supersedes per-team row"
                    );
                    chosen.insert(row.season_label.clone(), row.clone());
                }
            }
        }
    }

    order
        .iter()
        .filter_map(|label| chosen.remove(label))
        .collect()
}

/// Process-local sequence so two ids generated in the same millisecond
/// stay distinct.
static ID_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generate an opaque player id from the current UTC timestamp plus a
/// sequence suffix, e.g. `player_20260829_143022_123_0`.
fn generate_player_id() -> String {
    let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed);
    let now = chrono::Utc::now();
    format!("player_{}_{}", now.format("%Y%m%d_%H%M%S_%3f"), seq)
}
