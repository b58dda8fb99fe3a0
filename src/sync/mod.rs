pub use poller::{GameStateClient, PollHandle};
pub use view::GameView;

mod poller;
mod view;
