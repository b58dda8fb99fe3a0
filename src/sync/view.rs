use chrono::{DateTime, Utc};

use crate::board::{render, Canvas};
use crate::game::{GamePhase, GameSnapshot, Player, Roster};
use crate::score::{aggregate, ScoreRecord};

/// Everything the game screen shows, derived from the latest applied snapshot
#[derive(Debug, Clone)]
pub struct GameView<C> {
    pub game_id: String,
    pub game_name: String,
    pub roster: Roster,
    pub scores: Vec<ScoreRecord>,
    pub round: u32,
    pub winner: Option<String>,
    pub phase: GamePhase,
    pub canvas: C,
    /// Sequence number of the snapshot currently shown
    pub last_applied: Option<u64>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Poll ticks whose fetch failed since the view was created
    pub failed_polls: u64,
    snapshot: Option<GameSnapshot>,
}

impl<C: Canvas> GameView<C> {
    pub fn new(game_id: impl Into<String>, canvas: C) -> Self {
        Self {
            game_id: game_id.into(),
            game_name: String::new(),
            roster: Roster::default(),
            scores: Vec::new(),
            round: 0,
            winner: None,
            phase: GamePhase::default(),
            canvas,
            last_applied: None,
            updated_at: None,
            failed_polls: 0,
            snapshot: None,
        }
    }

    /// Snapshot currently on screen, if any
    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        self.snapshot.as_ref()
    }

    /// Installs the roster and redraws the current snapshot with its colors.
    /// Before any snapshot arrives this yields the zeroed bootstrap scoreboard.
    pub fn set_roster(&mut self, players: Vec<Player>) {
        self.roster = Roster::new(players);
        self.redraw();
    }

    /// Shows `snapshot` unless a snapshot with a sequence number at least as
    /// high is already shown. Returns whether it was applied.
    pub fn apply_snapshot(&mut self, sequence: u64, snapshot: GameSnapshot) -> bool {
        if self.last_applied.is_some_and(|last| sequence <= last) {
            return false;
        }

        self.game_name = snapshot.name.clone();
        self.round = snapshot.round;
        self.winner = snapshot.winner().map(str::to_string);
        self.phase = snapshot.state.clone();
        self.snapshot = Some(snapshot);
        self.last_applied = Some(sequence);
        self.updated_at = Some(Utc::now());
        self.redraw();
        true
    }

    pub fn record_poll_failure(&mut self) {
        self.failed_polls += 1;
    }

    /// Rebuilds scores and canvas from scratch
    fn redraw(&mut self) {
        match &self.snapshot {
            Some(snapshot) => {
                self.scores = aggregate(&snapshot.metrics, &snapshot.positions, &self.roster);
                render(
                    &mut self.canvas,
                    snapshot.board_size,
                    &snapshot.positions,
                    &self.roster,
                );
            }
            None => {
                self.scores = aggregate(&[], &[], &self.roster);
                self.canvas.clear();
            }
        }
    }

    /// One-line status: game, round, phase and winner
    pub fn status_line(&self) -> String {
        let name = if self.game_name.is_empty() {
            self.game_id.as_str()
        } else {
            self.game_name.as_str()
        };
        let mut line = format!("{name} | round {} | {}", self.round, self.phase);
        if let Some(winner) = &self.winner {
            line.push_str(&format!(" | winner: {winner}"));
        }
        line
    }
}
