use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::EnumString;

use crate::color::{color_of, Color};

/// Raw roster entry as reported by `GET /games/{id}/players`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A registered player. The color is the one the backend reports when it is a
/// valid `#rrggbb` value, otherwise the color derived from the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlayerEntry", into = "PlayerEntry")]
pub struct Player {
    pub name: String,
    pub host: Option<String>,
    pub color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let color = color_of(&name);
        Self {
            name,
            host: None,
            color,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl From<PlayerEntry> for Player {
    fn from(entry: PlayerEntry) -> Self {
        let color = entry
            .color
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(|| color_of(&entry.name));

        Self {
            name: entry.name,
            host: entry.host,
            color,
        }
    }
}

impl From<Player> for PlayerEntry {
    fn from(player: Player) -> Self {
        Self {
            name: player.name,
            host: player.host,
            color: Some(player.color.to_string()),
        }
    }
}

/// Body of `POST /games/{id}/players`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub host: String,
    pub color: Color,
}

impl NewPlayer {
    /// Registration request whose color is derived from the player name
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        let name = name.into();
        let color = color_of(&name);
        Self {
            name,
            host: host.into(),
            color,
        }
    }
}

/// Body of `POST /games`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayersResponse {
    #[serde(default)]
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamesResponse {
    #[serde(default)]
    pub games: Vec<GameSummary>,
}

/// Game identifiers come back as numbers or strings depending on the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameId {
    Number(u64),
    Text(String),
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameId::Number(id) => write!(f, "{id}"),
            GameId::Text(id) => f.write_str(id),
        }
    }
}

/// One entry of the lobby listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    #[serde(default)]
    pub id: Option<GameId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A board cell occupied by one unit of a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub player_name: String,
    pub coordinate: Coordinate,
}

impl Position {
    pub fn new(player_name: impl Into<String>, x: u32, y: u32) -> Self {
        Self {
            player_name: player_name.into(),
            coordinate: Coordinate::new(x, y),
        }
    }
}

/// Per-player combat counters, independent of board occupancy
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub name: String,
    #[serde(default)]
    pub killing_blows: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub invalid_moves: u32,
}

impl Metric {
    pub fn new(name: impl Into<String>, killing_blows: u32, deaths: u32, invalid_moves: u32) -> Self {
        Self {
            name: name.into(),
            killing_blows,
            deaths,
            invalid_moves,
        }
    }
}

/// Game phase as reported by the backend. The client never drives it; values
/// it does not recognise are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum GamePhase {
    #[strum(serialize = "NOT_STARTED", serialize = "not-started", serialize = "NotStarted")]
    NotStarted,
    #[strum(serialize = "RUNNING", serialize = "STARTED", serialize = "IN_PROGRESS")]
    Running,
    #[strum(serialize = "FINISHED", serialize = "ENDED")]
    Finished,
    #[strum(default)]
    Other(String),
}

impl GamePhase {
    pub fn label(&self) -> &str {
        match self {
            GamePhase::NotStarted => "not-started",
            GamePhase::Running => "running",
            GamePhase::Finished => "finished",
            GamePhase::Other(raw) => raw,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Finished)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        GamePhase::Other(String::new())
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for GamePhase {
    fn from(raw: String) -> Self {
        raw.parse().unwrap_or(GamePhase::Other(raw))
    }
}

impl From<GamePhase> for String {
    fn from(phase: GamePhase) -> Self {
        phase.label().to_string()
    }
}

impl Serialize for GamePhase {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for GamePhase {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(GamePhase::from).unwrap_or_default())
    }
}

/// One full report of the game at a point in time (`GET /games/{id}/state`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    #[serde(default)]
    pub name: String,
    pub board_size: u32,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub round: u32,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub state: GamePhase,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

impl GameSnapshot {
    /// Winner name, treating the empty string the backend sends before the end as none
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref().filter(|w| !w.is_empty())
    }
}
