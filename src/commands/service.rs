use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::api::GameApi;
use crate::game::{GameSummary, NewPlayer};
use crate::shared::AppError;

/// One-shot requests that change games on the backend. Nothing is retried;
/// failures go back to the caller.
#[derive(Clone)]
pub struct CommandClient {
    api: Arc<dyn GameApi>,
}

impl CommandClient {
    pub fn new(api: Arc<dyn GameApi>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn list_games(&self) -> Result<Vec<GameSummary>, AppError> {
        let games = self.api.list_games().await?;
        info!(game_count = games.len(), "Games loaded");
        Ok(games)
    }

    #[instrument(skip(self))]
    pub async fn create_game(&self, name: &str) -> Result<GameSummary, AppError> {
        match self.api.create_game(name).await {
            Ok(game) => {
                info!(game_name = %game.name, "Game created");
                Ok(game)
            }
            Err(e) => {
                error!(error = %e, "Error while adding game");
                Err(e)
            }
        }
    }

    /// Registers a player; the color sent along is derived from the name
    #[instrument(skip(self))]
    pub async fn add_player(
        &self,
        game_id: &str,
        name: &str,
        host: &str,
    ) -> Result<NewPlayer, AppError> {
        let player = NewPlayer::new(name, host);
        match self.api.add_player(game_id, &player).await {
            Ok(()) => {
                info!(color = %player.color, "Player added");
                Ok(player)
            }
            Err(e) => {
                error!(error = %e, "Error while adding a player");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn start_game(&self, game_id: &str) -> Result<(), AppError> {
        match self.api.start_game(game_id).await {
            Ok(()) => {
                info!("Game started");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to start the game");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn restart_game(&self, game_id: &str) -> Result<(), AppError> {
        match self.api.restart_game(game_id).await {
            Ok(()) => {
                info!("Game restarted");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to restart the game");
                Err(e)
            }
        }
    }
}
