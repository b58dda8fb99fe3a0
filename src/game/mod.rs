// Public API
pub use models::{
    Coordinate, CreateGameRequest, GameId, GamePhase, GameSnapshot, GameSummary, GamesResponse,
    Metric, NewPlayer, Player, PlayerEntry, PlayersResponse, Position,
};
pub use roster::Roster;

// Internal modules
mod models;
mod roster;
