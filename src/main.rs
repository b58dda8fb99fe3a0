use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pugna_client::commands::DEFAULT_PLAYER_HOST;
use pugna_client::{
    AddGameForm, AddPlayerForm, AppError, ClientConfig, CommandClient, GameApi, GameStateClient,
    GameView, HttpGameApi, PixelCanvas,
};

/// Command-line client for a Pugna game server
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Backend address, overrides PUGNA_BASE_URL
    #[clap(long)]
    base_url: Option<String>,

    /// Milliseconds between two state polls, overrides PUGNA_POLL_INTERVAL_MS
    #[clap(long)]
    poll_interval_ms: Option<u64>,

    /// Per-request timeout in milliseconds, overrides PUGNA_REQUEST_TIMEOUT_MS
    #[clap(long)]
    request_timeout_ms: Option<u64>,

    /// Side of the board canvas in pixels, overrides PUGNA_CANVAS_SIZE
    #[clap(long)]
    canvas_size: Option<u32>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the games known to the server
    Games,
    /// Create a new game
    CreateGame { name: String },
    /// Register a player in a game
    AddPlayer {
        game_id: String,
        name: String,
        #[clap(long, default_value = DEFAULT_PLAYER_HOST)]
        host: String,
    },
    /// Start a game
    Start { game_id: String },
    /// Restart a game
    Restart { game_id: String },
    /// Follow a game, printing the scoreboard after every update
    Watch { game_id: String },
}

impl Args {
    fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(ms) = self.poll_interval_ms {
            config = config.with_poll_interval(Duration::from_millis(ms));
        }
        if let Some(ms) = self.request_timeout_ms {
            config = config.with_request_timeout(Duration::from_millis(ms));
        }
        if let Some(size) = self.canvas_size {
            config = config.with_canvas_size(size);
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pugna_client=info,pugna=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = args.config();

    match run(args.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.banner_text());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: ClientConfig) -> Result<(), AppError> {
    config.validate()?;
    info!(base_url = %config.base_url, "Using game server");

    let api: Arc<dyn GameApi> = Arc::new(HttpGameApi::new(&config)?);
    let commands = CommandClient::new(Arc::clone(&api));

    match command {
        Command::Games => {
            for game in commands.list_games().await? {
                let id = game.id.map(|id| id.to_string()).unwrap_or_default();
                println!("{id:>6}  {}", game.name);
            }
        }
        Command::CreateGame { name } => {
            let mut form = AddGameForm::new(name);
            let game = form.submit(&commands).await?;
            println!("Created game {}", game.name);
        }
        Command::AddPlayer {
            game_id,
            name,
            host,
        } => {
            let mut form = AddPlayerForm::new(game_id);
            form.name = name;
            form.host = host;
            let player = form.submit(&commands).await?;
            println!("Added {} ({})", player.name, player.color);
        }
        Command::Start { game_id } => {
            commands.start_game(&game_id).await?;
            println!("Game started");
        }
        Command::Restart { game_id } => {
            commands.restart_game(&game_id).await?;
            println!("Game restarted");
        }
        Command::Watch { game_id } => watch(api, game_id, &config).await,
    }

    Ok(())
}

/// Polls until Ctrl-C, printing the view each time it changes
async fn watch(api: Arc<dyn GameApi>, game_id: String, config: &ClientConfig) {
    let handle = GameStateClient::new(api, game_id, config.poll_interval)
        .start(PixelCanvas::new(config.canvas_size));
    let mut updates = handle.subscribe();

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    error!("Poll loop ended unexpectedly");
                    break;
                }
                print_view(&updates.borrow_and_update());
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, stopping");
                break;
            }
        }
    }

    handle.stop().await;
}

fn print_view(view: &GameView<PixelCanvas>) {
    println!("{}", view.status_line());
    println!(
        "  {:<20} {:>6} {:>6} {:>6} {:>8}  color",
        "player", "points", "kills", "deaths", "invalid"
    );
    for score in &view.scores {
        let color = score.color.map(|c| c.to_string()).unwrap_or_default();
        println!(
            "  {:<20} {:>6} {:>6} {:>6} {:>8}  {}",
            score.name, score.points, score.killing_blows, score.deaths, score.invalid_moves, color
        );
    }
}
