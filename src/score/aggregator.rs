use tracing::trace;

use super::models::ScoreRecord;
use crate::game::{Metric, Position, Roster};

/// Builds the scoreboard for one snapshot.
///
/// One row per metric, in metric order, with `points` counting the positions
/// held by that player. Rows get their color from the roster once the player
/// holds a cell. With no metrics yet, every rostered player gets a zero row
/// instead. Positions naming a player without a metric do not appear in the
/// table.
pub fn aggregate(metrics: &[Metric], positions: &[Position], roster: &Roster) -> Vec<ScoreRecord> {
    if metrics.is_empty() {
        return roster.players().iter().map(ScoreRecord::bootstrap).collect();
    }

    let mut scores: Vec<ScoreRecord> = metrics.iter().map(ScoreRecord::from_metric).collect();

    for position in positions {
        match scores
            .iter_mut()
            .find(|score| score.name == position.player_name)
        {
            Some(score) => {
                score.points += 1;
                score.color = Some(roster.color_for(&score.name));
            }
            None => {
                trace!(player = %position.player_name, "Position for player without metrics");
            }
        }
    }

    scores
}
