// Core data types shared across the engine, roster, and store.

use serde::{Deserialize, Serialize};

/// One row of a player's per-game table exactly as it appears in the source
/// markup. Not unique per season: a player traded mid-season has one row per
/// team plus an aggregate `"TOT"` row for the same label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeasonRow {
    /// `"YYYY-YY"` season label, e.g. `"2015-16"`.
    pub season_label: String,
    pub team: String,
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
}

/// One entry of a player's (possibly aligned) stat series.
///
/// `None` means "no data at this axis position" and is rendered as a gap in
/// the chart. That is semantically distinct from zero: a player who sat out
/// a season did not average 0.0 points that year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStat {
    /// Season label or a synthesized `"Season N"` ordinal, depending on the
    /// active display mode.
    pub date: String,
    pub points: Option<f64>,
    pub assists: Option<f64>,
    pub rebounds: Option<f64>,
}

impl SeasonStat {
    /// An all-null padding entry for the given axis position.
    pub fn gap(date: impl Into<String>) -> Self {
        SeasonStat {
            date: date.into(),
            points: None,
            assists: None,
            rebounds: None,
        }
    }

    /// True if all three tracked stats are null, i.e. this entry carries no
    /// real data and exists only to fill an axis position.
    pub fn is_all_null(&self) -> bool {
        self.points.is_none() && self.assists.is_none() && self.rebounds.is_none()
    }

    /// The value of the selected metric at this axis position.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Points => self.points,
            Metric::Assists => self.assists,
            Metric::Rebounds => self.rebounds,
        }
    }
}

/// A collected player and their season-by-season series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Opaque identifier assigned at creation. Stable across normalization
    /// passes; removal and visibility toggles key off it.
    pub id: String,
    /// Display name. Unique within a roster -- this, not `id`, is the
    /// deduplication key on insertion.
    pub name: String,
    /// Headshot URL from the player page.
    pub image: String,
    /// The page the stats were scraped from.
    pub bball_ref_url: String,
    /// When set, the player's line is omitted from the rendered chart but
    /// the player stays on the roster (and in the shared axis).
    pub hide_status: bool,
    pub stats: Vec<SeasonStat>,
}

/// The three tracked per-game metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Points,
    Assists,
    Rebounds,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Points, Metric::Assists, Metric::Rebounds];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Points => "points",
            Metric::Assists => "assists",
            Metric::Rebounds => "rebounds",
        }
    }
}

/// How the shared season axis is constructed and players are aligned to it.
///
/// `Calendar` aligns players by real-world time (head-to-head era
/// comparison); `Relative` aligns by career stage regardless of draft year
/// (career-arc comparison).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Calendar,
    Relative,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Calendar => "calendar",
            DisplayMode::Relative => "relative",
        }
    }

    /// Parse the string form produced by `as_str`. Returns `None` for
    /// anything else.
    pub fn parse(s: &str) -> Option<DisplayMode> {
        match s {
            "calendar" => Some(DisplayMode::Calendar),
            "relative" => Some(DisplayMode::Relative),
            _ => None,
        }
    }
}
