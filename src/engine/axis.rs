// Shared season-axis construction for both display modes.

use std::collections::BTreeSet;

use crate::model::{DisplayMode, Player};

/// Derive the shared x-axis from the union of all players' seasons.
///
/// Calendar mode produces a contiguous run of `"YYYY-YY"` labels from the
/// earliest to the latest starting year seen across the roster, fabricating
/// entries for gap years no player has a row for. The axis must be gap-free
/// for a readable chart; the aligner prunes fabricated entries that end up
/// with no coverage. Relative mode produces `"Season 1"` through
/// `"Season N"` where N is the largest real-season count on the roster.
pub fn build_axis(players: &[Player], mode: DisplayMode) -> Vec<String> {
    match mode {
        DisplayMode::Calendar => calendar_axis(players),
        DisplayMode::Relative => relative_axis(players),
    }
}

fn calendar_axis(players: &[Player]) -> Vec<String> {
    let years: BTreeSet<i32> = players
        .iter()
        .flat_map(|p| p.stats.iter())
        .filter_map(|s| start_year(&s.date))
        .collect();

    let (Some(&min), Some(&max)) = (years.first(), years.last()) else {
        return Vec::new();
    };
    (min..=max).map(season_label).collect()
}

fn relative_axis(players: &[Player]) -> Vec<String> {
    let max = players
        .iter()
        .map(|p| real_season_count(p))
        .max()
        .unwrap_or(0);
    (1..=max).map(relative_label).collect()
}

/// Number of seasons a player has real data for: rows that are not all-null
/// padding left behind by an earlier alignment pass.
fn real_season_count(player: &Player) -> usize {
    player.stats.iter().filter(|s| !s.is_all_null()).count()
}

/// Parse the starting year from a calendar season label: `"2015-16"` -> 2015.
///
/// The upstream scraper guarantees the `"YYYY-YY"` format; a label without a
/// parseable leading 4-digit year violates that contract. Debug builds fail
/// loudly; release builds skip the label rather than deriving a garbage year.
pub(crate) fn start_year(label: &str) -> Option<i32> {
    let year = label
        .split('-')
        .next()
        .filter(|head| head.len() == 4)
        .and_then(|head| head.parse::<i32>().ok());
    debug_assert!(year.is_some(), "malformed season label: {label:?}");
    year
}

/// Format a season label from its starting year: 2015 -> `"2015-16"`.
/// The trailing pair is `(year + 1) mod 100`, zero-padded.
pub(crate) fn season_label(start_year: i32) -> String {
    format!("{}-{:02}", start_year, (start_year + 1) % 100)
}

/// Label for the k-th career season (1-based).
pub(crate) fn relative_label(index: usize) -> String {
    format!("Season {index}")
}
