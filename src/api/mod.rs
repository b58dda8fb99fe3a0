pub use http::HttpGameApi;

mod http;

use async_trait::async_trait;

use crate::game::{GameSnapshot, GameSummary, NewPlayer, Player};
use crate::shared::AppError;

/// Backend operations the client relies on
#[async_trait]
pub trait GameApi: Send + Sync {
    /// `GET /games`
    async fn list_games(&self) -> Result<Vec<GameSummary>, AppError>;

    /// `POST /games`
    async fn create_game(&self, name: &str) -> Result<GameSummary, AppError>;

    /// `GET /games/{id}/players`
    async fn list_players(&self, game_id: &str) -> Result<Vec<Player>, AppError>;

    /// `POST /games/{id}/players`
    async fn add_player(&self, game_id: &str, player: &NewPlayer) -> Result<(), AppError>;

    /// `GET /games/{id}/state`
    async fn game_state(&self, game_id: &str) -> Result<GameSnapshot, AppError>;

    /// `PUT /games/{id}/start`
    async fn start_game(&self, game_id: &str) -> Result<(), AppError>;

    /// `PUT /games/{id}/restart`
    async fn restart_game(&self, game_id: &str) -> Result<(), AppError>;
}
