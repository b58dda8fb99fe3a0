use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use pugna_client::{ClientConfig, CommandClient, GameApi, GameView, HttpGameApi, PixelCanvas};

use super::backend::FakeBackend;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub backend: FakeBackend,
    pub config: ClientConfig,
    pub api: Arc<dyn GameApi>,
    pub commands: CommandClient,
}

#[allow(dead_code)]
impl TestSetup {
    /// Starts a fake backend and an HTTP client pointed at it
    pub async fn new() -> Self {
        let backend = FakeBackend::new();
        let base_url = backend.spawn().await;
        let config = ClientConfig::default()
            .with_base_url(base_url)
            .with_poll_interval(Duration::from_millis(20))
            .with_request_timeout(Duration::from_secs(2))
            .with_canvas_size(100);

        let api: Arc<dyn GameApi> = Arc::new(HttpGameApi::new(&config).unwrap());
        let commands = CommandClient::new(Arc::clone(&api));

        Self {
            backend,
            config,
            api,
            commands,
        }
    }
}

/// Waits until the view satisfies `done`, failing the test after five seconds
#[allow(dead_code)]
pub async fn wait_for_view<F>(updates: &mut watch::Receiver<GameView<PixelCanvas>>, mut done: F)
where
    F: FnMut(&GameView<PixelCanvas>) -> bool,
{
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if done(&updates.borrow_and_update()) {
                return;
            }
            updates.changed().await.expect("poll loop ended");
        }
    })
    .await
    .expect("view did not reach the expected state in time");
}
