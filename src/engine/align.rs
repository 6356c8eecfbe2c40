// Alignment of every player's series onto the shared axis.

use std::collections::HashSet;

use crate::model::{DisplayMode, Player, SeasonStat};

use super::axis::relative_label;

/// Reindex every player onto `axis`, returning a new roster snapshot with
/// equal-length, identically-ordered stat lists. Pure copy-on-write: the
/// input players are never mutated, so this is safe to call from any site
/// without aliasing the stored roster.
pub fn align(players: &[Player], axis: &[String], mode: DisplayMode) -> Vec<Player> {
    match mode {
        DisplayMode::Calendar => align_calendar(players, axis),
        DisplayMode::Relative => align_relative(players, axis),
    }
}

/// Calendar alignment: pad each player with all-null entries for the axis
/// labels they are missing, sort by label, then prune labels no player has
/// real data for.
///
/// The prune pass undoes over-padding that accumulates from repeated
/// normalization of a shrinking roster: once the only player with data for
/// a season is removed, every other player still carries an all-null
/// placeholder for it.
fn align_calendar(players: &[Player], axis: &[String]) -> Vec<Player> {
    let mut padded: Vec<Player> = players
        .iter()
        .map(|player| {
            let present: HashSet<&str> =
                player.stats.iter().map(|s| s.date.as_str()).collect();
            let mut stats = player.stats.clone();
            for label in axis {
                if !present.contains(label.as_str()) {
                    stats.push(SeasonStat::gap(label.clone()));
                }
            }
            // Lexicographic compare is correct for the fixed-width
            // year-prefixed label format.
            stats.sort_by(|a, b| a.date.cmp(&b.date));
            Player {
                stats,
                ..player.clone()
            }
        })
        .collect();

    let covered: HashSet<String> = padded
        .iter()
        .flat_map(|p| p.stats.iter())
        .filter(|s| !s.is_all_null())
        .map(|s| s.date.clone())
        .collect();

    for player in &mut padded {
        player.stats.retain(|s| covered.contains(&s.date));
    }
    padded
}

/// Relative alignment: drop all-null rows (undoing any prior padding so the
/// season count reflects only real data), renumber the survivors as
/// `"Season 1"`, `"Season 2"`, ..., then pad up to the axis length.
///
/// Gap years are an artifact of the calendar and must not count as career
/// seasons, so this mode never needs a prune pass: it only ever pads up to
/// exactly the computed maximum.
fn align_relative(players: &[Player], axis: &[String]) -> Vec<Player> {
    players
        .iter()
        .map(|player| {
            let mut stats: Vec<SeasonStat> = player
                .stats
                .iter()
                .filter(|s| !s.is_all_null())
                .enumerate()
                .map(|(i, s)| SeasonStat {
                    date: relative_label(i + 1),
                    ..s.clone()
                })
                .collect();
            for k in stats.len()..axis.len() {
                stats.push(SeasonStat::gap(relative_label(k + 1)));
            }
            Player {
                stats,
                ..player.clone()
            }
        })
        .collect()
}
