use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

// ============================================================================
// Fake Game Server
// ============================================================================

#[derive(Default)]
struct BackendState {
    games: Vec<Value>,
    players: HashMap<String, Vec<Value>>,
    snapshot: Option<Value>,
    failing_state_requests: usize,
    start_rejection: Option<String>,
    state_requests: usize,
    requests: Vec<String>,
}

/// In-process HTTP server speaking the game backend's JSON API
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<BackendState>>,
}

#[allow(dead_code)]
impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves the API on an ephemeral local port and returns its base url
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/games", get(list_games).post(create_game))
            .route("/games/:id/players", get(list_players).post(add_player))
            .route("/games/:id/state", get(game_state))
            .route("/games/:id/start", put(start_game))
            .route("/games/:id/restart", put(restart_game))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }

    pub fn set_snapshot(&self, snapshot: Value) {
        self.state.lock().unwrap().snapshot = Some(snapshot);
    }

    pub fn set_players(&self, game_id: &str, players: Vec<Value>) {
        self.state
            .lock()
            .unwrap()
            .players
            .insert(game_id.to_string(), players);
    }

    /// The next `count` state requests answer 503
    pub fn fail_next_state_requests(&self, count: usize) {
        self.state.lock().unwrap().failing_state_requests = count;
    }

    pub fn reject_start(&self, body: &str) {
        self.state.lock().unwrap().start_rejection = Some(body.to_string());
    }

    pub fn state_requests(&self) -> usize {
        self.state.lock().unwrap().state_requests
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn players(&self, game_id: &str) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .players
            .get(game_id)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, request: String) {
        self.state.lock().unwrap().requests.push(request);
    }
}

async fn list_games(State(backend): State<FakeBackend>) -> Json<Value> {
    backend.record("GET /games".to_string());
    let games = backend.state.lock().unwrap().games.clone();
    Json(json!({ "games": games }))
}

async fn create_game(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    backend.record(format!("POST /games {body}"));
    let name = body["name"].as_str().unwrap_or_default().to_string();

    let mut state = backend.state.lock().unwrap();
    if state.games.iter().any(|g| g["name"] == name.as_str()) {
        return (StatusCode::CONFLICT, "Game name already taken").into_response();
    }
    let game = json!({ "id": state.games.len() + 1, "name": name });
    state.games.push(game.clone());
    Json(game).into_response()
}

async fn list_players(State(backend): State<FakeBackend>, Path(id): Path<String>) -> Json<Value> {
    backend.record(format!("GET /games/{id}/players"));
    Json(json!({ "players": backend.players(&id) }))
}

async fn add_player(
    State(backend): State<FakeBackend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> StatusCode {
    backend.record(format!("POST /games/{id}/players {body}"));
    backend
        .state
        .lock()
        .unwrap()
        .players
        .entry(id)
        .or_default()
        .push(body);
    StatusCode::OK
}

async fn game_state(State(backend): State<FakeBackend>, Path(id): Path<String>) -> Response {
    let mut state = backend.state.lock().unwrap();
    state.state_requests += 1;
    state.requests.push(format!("GET /games/{id}/state"));

    if state.failing_state_requests > 0 {
        state.failing_state_requests -= 1;
        return (StatusCode::SERVICE_UNAVAILABLE, "backend warming up").into_response();
    }

    match &state.snapshot {
        Some(snapshot) => Json(snapshot.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "No such game").into_response(),
    }
}

async fn start_game(State(backend): State<FakeBackend>, Path(id): Path<String>) -> Response {
    backend.record(format!("PUT /games/{id}/start"));
    let rejection = backend.state.lock().unwrap().start_rejection.clone();
    match rejection {
        Some(body) => (StatusCode::BAD_REQUEST, body).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

async fn restart_game(State(backend): State<FakeBackend>, Path(id): Path<String>) -> StatusCode {
    backend.record(format!("PUT /games/{id}/restart"));
    StatusCode::OK
}
