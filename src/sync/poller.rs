use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, instrument, warn};

use super::view::GameView;
use crate::api::GameApi;
use crate::board::Canvas;
use crate::game::{GameSnapshot, Player};
use crate::shared::AppError;

/// Result of one request issued by the poll loop
enum Fetched {
    Roster(Result<Vec<Player>, AppError>),
    Snapshot(u64, Result<GameSnapshot, AppError>),
}

/// Keeps a `GameView` in sync with the backend by polling the game state
pub struct GameStateClient {
    api: Arc<dyn GameApi>,
    game_id: String,
    poll_interval: Duration,
}

impl GameStateClient {
    pub fn new(api: Arc<dyn GameApi>, game_id: impl Into<String>, poll_interval: Duration) -> Self {
        Self {
            api,
            game_id: game_id.into(),
            poll_interval,
        }
    }

    /// Loads the roster, then fetches the game state every poll interval
    /// until the returned handle is stopped or dropped
    pub fn start<C>(self, canvas: C) -> PollHandle<C>
    where
        C: Canvas + Send + Sync + 'static,
    {
        let (view_tx, view_rx) = watch::channel(GameView::new(self.game_id.clone(), canvas));
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let task = tokio::spawn(self.run(view_tx, shutdown_rx));

        PollHandle {
            view: view_rx,
            shutdown: Some(shutdown_tx),
            task: Some(task),
        }
    }

    #[instrument(name = "poll_game_state", skip_all, fields(game_id = %self.game_id))]
    async fn run<C>(
        self,
        view_tx: watch::Sender<GameView<C>>,
        mut shutdown: oneshot::Receiver<()>,
    ) where
        C: Canvas + Send + Sync + 'static,
    {
        info!(
            interval_ms = self.poll_interval.as_millis() as u64,
            "Starting game state polling"
        );

        let mut in_flight: FuturesUnordered<BoxFuture<'static, Fetched>> = FuturesUnordered::new();
        in_flight.push(self.fetch_roster());
        let mut roster_pending = true;
        let mut roster_loaded = false;

        let mut ticker = interval_at(Instant::now() + self.poll_interval, self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut sequence: u64 = 0;

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    info!(ticks = sequence, "Stopping game state polling");
                    break;
                }

                _ = ticker.tick() => {
                    sequence += 1;
                    if !roster_loaded && !roster_pending {
                        in_flight.push(self.fetch_roster());
                        roster_pending = true;
                    }
                    in_flight.push(self.fetch_snapshot(sequence));
                }

                Some(fetched) = in_flight.next(), if !in_flight.is_empty() => match fetched {
                    Fetched::Roster(Ok(players)) => {
                        debug!(player_count = players.len(), "Roster loaded");
                        roster_pending = false;
                        roster_loaded = true;
                        view_tx.send_modify(|view| view.set_roster(players));
                    }
                    Fetched::Roster(Err(e)) => {
                        warn!(error = %e, "Failed to load roster, retrying on next tick");
                        roster_pending = false;
                    }
                    Fetched::Snapshot(seq, Ok(snapshot)) => {
                        let applied =
                            view_tx.send_if_modified(|view| view.apply_snapshot(seq, snapshot));
                        if !applied {
                            debug!(seq, "Dropped out-of-date snapshot");
                        }
                    }
                    Fetched::Snapshot(seq, Err(e)) => {
                        warn!(seq, error = %e, "Poll tick failed");
                        view_tx.send_if_modified(|view| {
                            view.record_poll_failure();
                            false
                        });
                    }
                },
            }
        }
    }

    fn fetch_roster(&self) -> BoxFuture<'static, Fetched> {
        let api = Arc::clone(&self.api);
        let game_id = self.game_id.clone();
        async move { Fetched::Roster(api.list_players(&game_id).await) }.boxed()
    }

    fn fetch_snapshot(&self, seq: u64) -> BoxFuture<'static, Fetched> {
        let api = Arc::clone(&self.api);
        let game_id = self.game_id.clone();
        async move { Fetched::Snapshot(seq, api.game_state(&game_id).await) }.boxed()
    }
}

/// Running poll loop. Dropping the handle stops the loop.
pub struct PollHandle<C> {
    view: watch::Receiver<GameView<C>>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl<C> PollHandle<C> {
    /// Receiver notified each time a snapshot or roster is applied
    pub fn subscribe(&self) -> watch::Receiver<GameView<C>> {
        self.view.clone()
    }

    /// Current view. Do not hold the guard across an await point.
    pub fn view(&self) -> watch::Ref<'_, GameView<C>> {
        self.view.borrow()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancels the timer and waits for the loop to exit. Requests still in
    /// flight are abandoned.
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "Poll task ended abnormally");
            }
        }
    }
}

impl<C> Drop for PollHandle<C> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
