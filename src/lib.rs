// Library crate for the Pugna game client
// This file exposes the public API for the binary and integration tests

pub mod api;
pub mod board;
pub mod color;
pub mod commands;
pub mod game;
pub mod score;
pub mod shared;
pub mod sync;

// Re-export commonly used types for easier access in tests
pub use api::{GameApi, HttpGameApi};
pub use board::{Canvas, PixelCanvas};
pub use color::{color_of, Color};
pub use commands::{AddGameForm, AddPlayerForm, CommandClient};
pub use game::{GamePhase, GameSnapshot, Metric, Player, Position, Roster};
pub use score::{aggregate, ScoreRecord};
pub use shared::{AppError, ClientConfig};
pub use sync::{GameStateClient, GameView, PollHandle};
