use tracing::debug;

use super::service::CommandClient;
use crate::color::{color_of, Color};
use crate::game::{GameSummary, NewPlayer};
use crate::shared::AppError;

/// Host pre-filled in the add-player form
pub const DEFAULT_PLAYER_HOST: &str = "https://pugna-player2.herokuapp.com";

/// Progress of a form submission: the control is disabled while a request is
/// in flight and an error banner shows the server's message after a failure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub in_flight: bool,
    pub succeeded: bool,
    pub error: Option<String>,
}

impl Submission {
    fn begin(&mut self) {
        self.in_flight = true;
        self.succeeded = false;
        self.error = None;
    }

    fn succeed(&mut self) {
        self.in_flight = false;
        self.succeeded = true;
    }

    fn fail(&mut self, error: &AppError) {
        self.in_flight = false;
        self.error = Some(error.banner_text());
    }
}

/// Create-game form
#[derive(Debug, Clone, Default)]
pub struct AddGameForm {
    pub name: String,
    pub submission: Submission,
}

impl AddGameForm {
    pub const MIN_NAME_LEN: usize = 4;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            submission: Submission::default(),
        }
    }

    pub fn can_submit(&self) -> bool {
        self.name.chars().count() >= Self::MIN_NAME_LEN && !self.submission.in_flight
    }

    /// Creates the game. On success the name is cleared; on failure it is
    /// kept and the error banner set.
    pub async fn submit(&mut self, commands: &CommandClient) -> Result<GameSummary, AppError> {
        if !self.can_submit() {
            return Err(AppError::Validation(format!(
                "game name needs at least {} characters",
                Self::MIN_NAME_LEN
            )));
        }

        self.submission.begin();
        match commands.create_game(&self.name).await {
            Ok(game) => {
                self.name.clear();
                self.submission.succeed();
                Ok(game)
            }
            Err(e) => {
                self.submission.fail(&e);
                Err(e)
            }
        }
    }
}

/// Add-player form for one game
#[derive(Debug, Clone)]
pub struct AddPlayerForm {
    pub game_id: String,
    pub name: String,
    pub host: String,
    pub submission: Submission,
}

impl AddPlayerForm {
    pub fn new(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            name: String::new(),
            host: DEFAULT_PLAYER_HOST.to_string(),
            submission: Submission::default(),
        }
    }

    /// Color the player will be registered with
    pub fn color(&self) -> Color {
        color_of(&self.name)
    }

    pub fn can_submit(&self) -> bool {
        !self.name.is_empty() && !self.host.is_empty() && !self.submission.in_flight
    }

    /// Registers the player and resets the fields for the next one
    pub async fn submit(&mut self, commands: &CommandClient) -> Result<NewPlayer, AppError> {
        if !self.can_submit() {
            return Err(AppError::Validation(
                "player name and host are required".to_string(),
            ));
        }

        self.submission.begin();
        match commands
            .add_player(&self.game_id, &self.name, &self.host)
            .await
        {
            Ok(player) => {
                debug!(player_name = %player.name, "Resetting add-player form");
                self.name.clear();
                self.host = DEFAULT_PLAYER_HOST.to_string();
                self.submission.succeed();
                Ok(player)
            }
            Err(e) => {
                self.submission.fail(&e);
                Err(e)
            }
        }
    }
}
