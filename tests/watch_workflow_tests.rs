use serde_json::json;
use std::time::Duration;

use pugna_client::{color_of, GamePhase, GameStateClient, PixelCanvas};

mod utils;

use utils::*;

#[tokio::test]
async fn test_watch_renders_board_and_scores() {
    let setup = TestSetup::new().await;
    setup
        .backend
        .set_players("1", vec![json!({ "name": "alice" }), json!({ "name": "bob" })]);
    setup
        .backend
        .set_snapshot(SnapshotBuilder::new().with_two_player_match().build());

    let handle = GameStateClient::new(setup.api.clone(), "1", setup.config.poll_interval)
        .start(PixelCanvas::new(100));
    let mut updates = handle.subscribe();

    wait_for_view(&mut updates, |view| view.last_applied.is_some()).await;

    {
        let view = updates.borrow();
        assert_eq!(view.game_name, "arena");
        assert_eq!(view.round, 12);
        assert_eq!(view.phase, GamePhase::Running);

        let alice = &view.scores[0];
        assert_eq!((alice.name.as_str(), alice.points), ("alice", 2));
        assert_eq!(alice.color, Some(color_of("alice")));
        assert_eq!(view.scores[1].points, 1);
        assert_eq!(view.scores[1].invalid_moves, 3);

        // alice at (0, 0) sits in the bottom-left cell, bob at (9, 9) top-right
        assert_eq!(view.canvas.pixel(5, 95), Some(color_of("alice")));
        assert_eq!(view.canvas.pixel(95, 5), Some(color_of("bob")));
        assert_eq!(view.canvas.pixel(5, 5), None);
    }

    handle.stop().await;
}

#[tokio::test]
async fn test_bootstrap_scoreboard_before_game_starts() {
    let setup = TestSetup::new().await;
    setup
        .backend
        .set_players("1", vec![json!({ "name": "alice" }), json!({ "name": "bob" })]);
    setup.backend.set_snapshot(SnapshotBuilder::new().build());

    let handle = GameStateClient::new(setup.api.clone(), "1", setup.config.poll_interval)
        .start(PixelCanvas::new(100));
    let mut updates = handle.subscribe();

    wait_for_view(&mut updates, |view| {
        view.last_applied.is_some() && view.roster.len() == 2
    })
    .await;

    {
        let view = updates.borrow();
        assert_eq!(view.phase, GamePhase::NotStarted);
        let names: Vec<&str> = view.scores.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
        assert!(view.scores.iter().all(|s| s.points == 0));
        assert_eq!(view.canvas.painted_count(), 0);
    }

    handle.stop().await;
}

#[tokio::test]
async fn test_polling_recovers_after_backend_errors() {
    let setup = TestSetup::new().await;
    setup.backend.fail_next_state_requests(3);
    setup
        .backend
        .set_snapshot(SnapshotBuilder::new().with_two_player_match().build());

    let handle = GameStateClient::new(setup.api.clone(), "1", setup.config.poll_interval)
        .start(PixelCanvas::new(100));
    let mut updates = handle.subscribe();

    wait_for_view(&mut updates, |view| view.last_applied.is_some()).await;

    assert!(setup.backend.state_requests() >= 4);
    assert!(handle.view().failed_polls >= 1);
    assert_eq!(handle.view().round, 12);
    assert!(handle.is_running());

    handle.stop().await;
}

#[tokio::test]
async fn test_view_follows_backend_updates_until_stopped() {
    let setup = TestSetup::new().await;
    setup
        .backend
        .set_snapshot(SnapshotBuilder::new().state("RUNNING").round(1).build());

    let handle = GameStateClient::new(setup.api.clone(), "1", setup.config.poll_interval)
        .start(PixelCanvas::new(100));
    let mut updates = handle.subscribe();

    wait_for_view(&mut updates, |view| view.round == 1).await;

    setup.backend.set_snapshot(
        SnapshotBuilder::new()
            .state("FINISHED")
            .round(2)
            .winner("alice")
            .build(),
    );
    wait_for_view(&mut updates, |view| view.round == 2).await;
    assert_eq!(handle.view().winner.as_deref(), Some("alice"));
    assert!(handle.view().phase.is_terminal());

    handle.stop().await;
    // let a request written just before the stop reach the server
    tokio::time::sleep(Duration::from_millis(50)).await;
    let requests = setup.backend.state_requests();
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(setup.backend.state_requests(), requests);
}
