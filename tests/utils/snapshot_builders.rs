use serde_json::{json, Value};

// ============================================================================
// Snapshot Builders
// ============================================================================

/// Builds `GET /games/{id}/state` bodies in the backend's JSON shape
pub struct SnapshotBuilder {
    name: String,
    board_size: u32,
    round: u32,
    winner: String,
    state: String,
    positions: Vec<Value>,
    metrics: Vec<Value>,
}

#[allow(dead_code)]
impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            name: "arena".to_string(),
            board_size: 10,
            round: 0,
            winner: String::new(),
            state: "NOT_STARTED".to_string(),
            positions: vec![],
            metrics: vec![],
        }
    }

    pub fn board_size(mut self, board_size: u32) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn round(mut self, round: u32) -> Self {
        self.round = round;
        self
    }

    pub fn state(mut self, state: &str) -> Self {
        self.state = state.to_string();
        self
    }

    pub fn winner(mut self, winner: &str) -> Self {
        self.winner = winner.to_string();
        self
    }

    pub fn position(mut self, player: &str, x: u32, y: u32) -> Self {
        self.positions
            .push(json!({ "playerName": player, "coordinate": { "x": x, "y": y } }));
        self
    }

    pub fn metric(mut self, player: &str, killing_blows: u32, deaths: u32, invalid_moves: u32) -> Self {
        self.metrics.push(json!({
            "name": player,
            "killingBlows": killing_blows,
            "deaths": deaths,
            "invalidMoves": invalid_moves,
        }));
        self
    }

    /// Two players mid-game: alice holds two cells, bob one
    pub fn with_two_player_match(self) -> Self {
        self.state("RUNNING")
            .round(12)
            .metric("alice", 1, 0, 0)
            .metric("bob", 0, 1, 3)
            .position("alice", 0, 0)
            .position("alice", 1, 0)
            .position("bob", 9, 9)
    }

    pub fn build(self) -> Value {
        json!({
            "name": self.name,
            "boardSize": self.board_size,
            "positions": self.positions,
            "round": self.round,
            "winner": self.winner,
            "state": self.state,
            "metrics": self.metrics,
        })
    }
}
