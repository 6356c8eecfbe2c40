// Application controller: owns the roster, display settings, and store.
//
// Every mutation flows through here: apply a roster action or change a
// display setting, persist the raw roster, and hand back a freshly
// normalized chart view. The normalized output is derived state -- it is
// rebuilt on every change and never written back to the store, so repeated
// normalization cannot drift the persisted data.

use anyhow::{Context, Result};
use tracing::info;

use crate::chart::ChartView;
use crate::config::Config;
use crate::engine;
use crate::ingest::ScrapedPlayer;
use crate::model::{DisplayMode, Metric};
use crate::roster::{Roster, RosterAction};
use crate::store::Store;

pub struct App {
    config: Config,
    store: Store,
    roster: Roster,
    mode: DisplayMode,
    metric: Metric,
}

impl App {
    /// Reload persisted state and build the controller. The stored display
    /// mode wins over the configured default; the configured default wins
    /// over the built-in one.
    pub fn new(config: Config, store: Store) -> Result<Self> {
        let players = store
            .load_roster()
            .context("failed to load roster")?
            .unwrap_or_default();
        let mode = store
            .load_display_mode()
            .context("failed to load display mode")?
            .unwrap_or(config.display.default_mode);
        let metric = config.display.default_metric;

        info!(players = players.len(), mode = mode.as_str(), "roster loaded");
        Ok(Self {
            config,
            store,
            roster: Roster::new(players),
            mode,
            metric,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Ingest one scrape result. A payload whose name is already on the
    /// roster is ignored by the reducer, so re-scraping the same page is
    /// harmless.
    pub fn add_scrape(&mut self, scrape: ScrapedPlayer) -> Result<ChartView> {
        let player = scrape.into_player();
        info!(name = %player.name, seasons = player.stats.len(), "adding player");
        self.dispatch(RosterAction::Add(player))
    }

    /// Delete a player and re-normalize; axis entries only that player
    /// covered get pruned as a result.
    pub fn remove_player(&mut self, id: &str) -> Result<ChartView> {
        info!(id, "removing player");
        self.dispatch(RosterAction::Remove(id.to_string()))
    }

    /// Flip a player's line visibility. Persisted, but needs no
    /// realignment.
    pub fn toggle_visibility(&mut self, id: &str) -> Result<ChartView> {
        self.dispatch(RosterAction::ToggleVisibility(id.to_string()))
    }

    /// Switch alignment mode. The mode is committed before the view is
    /// recomputed, so recomputation always uses the newly selected mode,
    /// never the outgoing one.
    pub fn set_mode(&mut self, mode: DisplayMode) -> Result<ChartView> {
        self.mode = mode;
        self.store
            .save_display_mode(mode)
            .context("failed to persist display mode")?;
        info!(mode = mode.as_str(), "display mode changed");
        Ok(self.view())
    }

    /// Switch the charted metric. Pure view concern: nothing to persist,
    /// nothing to realign.
    pub fn set_metric(&mut self, metric: Metric) -> ChartView {
        self.metric = metric;
        self.view()
    }

    /// The current chart-ready snapshot, normalized under the active mode.
    pub fn view(&self) -> ChartView {
        let normalized = engine::normalize(self.roster.players(), self.mode);
        ChartView::build(&normalized, self.metric, &self.config.display.palette)
    }

    fn dispatch(&mut self, action: RosterAction) -> Result<ChartView> {
        self.roster = self.roster.apply(action);
        // Raw stats are what persists; the aligned snapshot stays derived.
        self.store
            .save_roster(self.roster.players())
            .context("failed to save roster")?;
        Ok(self.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawSeasonRow;

    fn test_app() -> App {
        let store = Store::open(":memory:").unwrap();
        App::new(Config::default(), store).unwrap()
    }

    fn row(label: &str, team: &str, points: f64) -> RawSeasonRow {
        RawSeasonRow {
            season_label: label.into(),
            team: team.into(),
            points,
            assists: points / 4.0,
            rebounds: points / 3.0,
        }
    }

    fn scrape(name: &str, rows: Vec<RawSeasonRow>) -> ScrapedPlayer {
        ScrapedPlayer {
            name: name.into(),
            image: String::new(),
            bball_ref_url: String::new(),
            rows,
        }
    }

    #[test]
    fn add_scrape_produces_view() {
        let mut app = test_app();
        let view = app
            .add_scrape(scrape("A", vec![row("2015-16", "CLE", 25.0)]))
            .unwrap();
        assert_eq!(view.series.len(), 1);
        assert_eq!(view.axis, vec!["2015-16"]);
    }

    #[test]
    fn duplicate_scrape_is_ignored() {
        let mut app = test_app();
        app.add_scrape(scrape("A", vec![row("2015-16", "CLE", 25.0)]))
            .unwrap();
        let view = app
            .add_scrape(scrape("A", vec![row("2016-17", "CLE", 26.0)]))
            .unwrap();
        assert_eq!(view.series.len(), 1);
        assert_eq!(app.roster().len(), 1);
        // The original scrape's data survives.
        assert_eq!(view.axis, vec!["2015-16"]);
    }

    #[test]
    fn set_mode_recomputes_with_incoming_mode() {
        let mut app = test_app();
        app.add_scrape(scrape(
            "A",
            vec![row("2015-16", "CLE", 25.0), row("2017-18", "CLE", 26.0)],
        ))
        .unwrap();

        let view = app.set_mode(DisplayMode::Relative).unwrap();
        // The axis is already in relative terms on the transition itself.
        assert_eq!(view.axis, vec!["Season 1", "Season 2"]);
        assert_eq!(app.mode(), DisplayMode::Relative);

        let back = app.set_mode(DisplayMode::Calendar).unwrap();
        assert_eq!(back.axis, vec!["2015-16", "2017-18"]);
    }

    #[test]
    fn set_metric_switches_values_without_touching_roster() {
        let mut app = test_app();
        app.add_scrape(scrape("A", vec![row("2015-16", "CLE", 20.0)]))
            .unwrap();
        let view = app.set_metric(Metric::Assists);
        assert_eq!(view.metric, Metric::Assists);
        assert_eq!(view.series[0].values, vec![Some(5.0)]);
    }

    #[test]
    fn remove_reprunes_axis() {
        let mut app = test_app();
        app.add_scrape(scrape("A", vec![row("2020-21", "MIA", 12.0)]))
            .unwrap();
        app.add_scrape(scrape(
            "B",
            vec![row("2020-21", "PHX", 15.0), row("2021-22", "PHX", 16.5)],
        ))
        .unwrap();

        let a_id = app.roster().players()[0].id.clone();
        let view = app.remove_player(&a_id).unwrap();
        assert_eq!(view.series.len(), 1);
        assert_eq!(view.axis, vec!["2020-21", "2021-22"]);

        let b_id = app.roster().players()[0].id.clone();
        let view = app.remove_player(&b_id).unwrap();
        assert!(view.axis.is_empty());
        assert!(view.series.is_empty());
    }

    #[test]
    fn toggle_visibility_survives_normalization() {
        let mut app = test_app();
        app.add_scrape(scrape("A", vec![row("2015-16", "CLE", 25.0)]))
            .unwrap();
        let id = app.roster().players()[0].id.clone();

        let view = app.toggle_visibility(&id).unwrap();
        assert!(view.series[0].hidden);

        let view = app.toggle_visibility(&id).unwrap();
        assert!(!view.series[0].hidden);
    }

    #[test]
    fn empty_roster_view_is_empty() {
        let app = test_app();
        let view = app.view();
        assert!(view.axis.is_empty());
        assert!(view.series.is_empty());
    }
}
