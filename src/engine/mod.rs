// Stat alignment and normalization engine.
//
// `normalize` is the single entry point: it rebuilds the shared season axis
// from the current roster and realigns every player's series onto it. All
// functions here are pure over their input; callers run them on every roster
// or mode change and treat the output as a disposable view. Cost is linear
// in players x seasons, so there is no memoization.

pub mod align;
pub mod axis;

pub use align::align;
pub use axis::build_axis;

use crate::model::{DisplayMode, Player};

/// Produce a chart-ready snapshot: every player padded (and, in calendar
/// mode, pruned) to an identical axis. Input is never mutated.
pub fn normalize(players: &[Player], mode: DisplayMode) -> Vec<Player> {
    let axis = build_axis(players, mode);
    align(players, &axis, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SeasonStat;

    fn player(name: &str, seasons: &[(&str, f64)]) -> Player {
        Player {
            id: format!("id_{name}"),
            name: name.into(),
            image: String::new(),
            bball_ref_url: String::new(),
            hide_status: false,
            stats: seasons
                .iter()
                .map(|(date, points)| SeasonStat {
                    date: (*date).into(),
                    points: Some(*points),
                    assists: Some(points / 4.0),
                    rebounds: Some(points / 3.0),
                })
                .collect(),
        }
    }

    fn dates(player: &Player) -> Vec<&str> {
        player.stats.iter().map(|s| s.date.as_str()).collect()
    }

    #[test]
    fn normalize_is_idempotent_calendar() {
        let players = vec![
            player("A", &[("2015-16", 20.0), ("2018-19", 25.0)]),
            player("B", &[("2016-17", 18.0)]),
        ];
        let once = normalize(&players, DisplayMode::Calendar);
        let twice = normalize(&once, DisplayMode::Calendar);
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_is_idempotent_relative() {
        let players = vec![
            player("A", &[("2015-16", 20.0), ("2018-19", 25.0)]),
            player("B", &[("2016-17", 18.0)]),
        ];
        let once = normalize(&players, DisplayMode::Relative);
        let twice = normalize(&once, DisplayMode::Relative);
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_equal_length_and_identical_dates() {
        let players = vec![
            player("A", &[("2015-16", 20.0), ("2018-19", 25.0)]),
            player("B", &[("2016-17", 18.0)]),
            player("C", &[]),
        ];
        for mode in [DisplayMode::Calendar, DisplayMode::Relative] {
            let normalized = normalize(&players, mode);
            let first = dates(&normalized[0]);
            for p in &normalized[1..] {
                assert_eq!(dates(p), first, "mode {mode:?}");
            }
        }
    }

    #[test]
    fn normalize_prunes_uncovered_gap_year() {
        // The contiguous axis fabricates 2017-18, but no player has data
        // there, so alignment prunes it again.
        let players = vec![
            player("A", &[("2015-16", 20.0), ("2018-19", 25.0)]),
            player("B", &[("2016-17", 18.0)]),
        ];
        let normalized = normalize(&players, DisplayMode::Calendar);
        assert_eq!(dates(&normalized[0]), vec!["2015-16", "2016-17", "2018-19"]);
    }

    #[test]
    fn normalize_empty_roster() {
        for mode in [DisplayMode::Calendar, DisplayMode::Relative] {
            assert!(normalize(&[], mode).is_empty());
        }
    }

    #[test]
    fn normalize_after_removal_drops_sole_coverage() {
        let players = vec![
            player("A", &[("2020-21", 12.0)]),
            player("B", &[("2020-21", 15.0), ("2021-22", 16.5)]),
        ];
        // First pass pads A up to B's range.
        let normalized = normalize(&players, DisplayMode::Calendar);
        assert_eq!(normalized[0].stats.len(), 2);

        // Remove B; A's padded 2021-22 entry has no coverage left and the
        // axis shrinks back to A's real season.
        let remainder: Vec<Player> = normalized
            .into_iter()
            .filter(|p| p.name == "A")
            .collect();
        let renormalized = normalize(&remainder, DisplayMode::Calendar);
        assert_eq!(dates(&renormalized[0]), vec!["2020-21"]);
    }
}
