// Public API
pub use forms::{AddGameForm, AddPlayerForm, Submission, DEFAULT_PLAYER_HOST};
pub use service::CommandClient;

// Internal modules
mod forms;
mod service;
