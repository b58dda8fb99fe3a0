use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::game::{Metric, Player};

/// Scoreboard row for one player, rebuilt from every snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub name: String,
    /// Board cells the player occupies in the current snapshot
    pub points: u32,
    /// Unset until the player occupies at least one cell
    pub color: Option<Color>,
    pub killing_blows: u32,
    pub deaths: u32,
    pub invalid_moves: u32,
}

impl ScoreRecord {
    /// Zero-point row carrying the metric counters verbatim
    pub fn from_metric(metric: &Metric) -> Self {
        Self {
            name: metric.name.clone(),
            points: 0,
            color: None,
            killing_blows: metric.killing_blows,
            deaths: metric.deaths,
            invalid_moves: metric.invalid_moves,
        }
    }

    /// All-zero row shown before the game reports any metrics
    pub fn bootstrap(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            points: 0,
            color: Some(player.color),
            killing_blows: 0,
            deaths: 0,
            invalid_moves: 0,
        }
    }
}
