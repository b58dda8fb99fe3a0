use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, instrument, warn};

use super::GameApi;
use crate::game::{
    CreateGameRequest, GameSnapshot, GameSummary, GamesResponse, NewPlayer, Player,
    PlayersResponse,
};
use crate::shared::{AppError, ClientConfig};

/// `GameApi` over the backend's JSON HTTP endpoints
#[derive(Debug, Clone)]
pub struct HttpGameApi {
    client: Client,
    base_url: String,
}

impl HttpGameApi {
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Passes success responses through; anything else becomes
    /// `AppError::Rejected` carrying the raw body
    async fn ensure_success(response: Response) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %body, "Backend rejected request");
        Err(AppError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    #[instrument(skip(self))]
    async fn list_games(&self) -> Result<Vec<GameSummary>, AppError> {
        let response = self.client.get(self.url("/games")).send().await?;
        let games: GamesResponse = Self::ensure_success(response).await?.json().await?;

        debug!(game_count = games.games.len(), "Games listed");
        Ok(games.games)
    }

    #[instrument(skip(self))]
    async fn create_game(&self, name: &str) -> Result<GameSummary, AppError> {
        let request = CreateGameRequest {
            name: name.to_string(),
        };
        let response = self
            .client
            .post(self.url("/games"))
            .json(&request)
            .send()
            .await?;
        let body = Self::ensure_success(response).await?.text().await?;

        // The backend may answer with an empty body; the game still exists
        let created = serde_json::from_str(&body).unwrap_or_else(|_| GameSummary {
            id: None,
            name: name.to_string(),
            state: None,
        });

        debug!(game_name = %name, "Game created");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn list_players(&self, game_id: &str) -> Result<Vec<Player>, AppError> {
        let response = self
            .client
            .get(self.url(&format!("/games/{game_id}/players")))
            .send()
            .await?;
        let roster: PlayersResponse = Self::ensure_success(response).await?.json().await?;

        debug!(player_count = roster.players.len(), "Players loaded");
        Ok(roster.players)
    }

    #[instrument(skip(self, player), fields(player_name = %player.name))]
    async fn add_player(&self, game_id: &str, player: &NewPlayer) -> Result<(), AppError> {
        let response = self
            .client
            .post(self.url(&format!("/games/{game_id}/players")))
            .json(player)
            .send()
            .await?;
        Self::ensure_success(response).await?;

        debug!(color = %player.color, "Player added");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn game_state(&self, game_id: &str) -> Result<GameSnapshot, AppError> {
        let response = self
            .client
            .get(self.url(&format!("/games/{game_id}/state")))
            .send()
            .await?;
        let snapshot: GameSnapshot = Self::ensure_success(response).await?.json().await?;

        debug!(
            round = snapshot.round,
            positions = snapshot.positions.len(),
            state = %snapshot.state,
            "Game state fetched"
        );
        Ok(snapshot)
    }

    #[instrument(skip(self))]
    async fn start_game(&self, game_id: &str) -> Result<(), AppError> {
        let response = self
            .client
            .put(self.url(&format!("/games/{game_id}/start")))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn restart_game(&self, game_id: &str) -> Result<(), AppError> {
        let response = self
            .client
            .put(self.url(&format!("/games/{game_id}/restart")))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
