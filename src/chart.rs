// Chart-ready view of a normalized roster.
//
// The external renderer consumes this directly: one series per player in
// roster order, a shared x-axis, and `Option<f64>` values where `None`
// draws as a gap rather than a zero.

use serde::Serialize;

use crate::model::{Metric, Player};

/// Fallback color when the caller hands an empty palette.
const FALLBACK_COLOR: &str = "#8884d8";

/// One renderable line series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub player_id: String,
    pub name: String,
    /// Headshot URL for the legend entry.
    pub image: String,
    pub color: String,
    /// When set, the renderer omits the line but keeps the legend entry.
    pub hidden: bool,
    /// One value per axis entry, in axis order.
    pub values: Vec<Option<f64>>,
}

/// The full dataset handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartView {
    pub metric: Metric,
    pub axis: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartView {
    /// Build the view from an already-normalized snapshot (equal-length
    /// stat lists with identical date sequences). Colors are cycled from
    /// `palette` by roster insertion index.
    pub fn build(players: &[Player], metric: Metric, palette: &[String]) -> ChartView {
        let axis = players
            .first()
            .map(|p| p.stats.iter().map(|s| s.date.clone()).collect())
            .unwrap_or_default();

        let series = players
            .iter()
            .enumerate()
            .map(|(index, player)| {
                let color = if palette.is_empty() {
                    FALLBACK_COLOR.to_string()
                } else {
                    palette[index % palette.len()].clone()
                };
                ChartSeries {
                    player_id: player.id.clone(),
                    name: player.name.clone(),
                    image: player.image.clone(),
                    color,
                    hidden: player.hide_status,
                    values: player.stats.iter().map(|s| s.value(metric)).collect(),
                }
            })
            .collect();

        ChartView {
            metric,
            axis,
            series,
        }
    }
}
