use std::time::Duration;
use thiserror::Error;

/// Default backend address when `PUGNA_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Period between two poll ticks
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 200;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 2000;
/// Side of the square board canvas, in pixels
pub const DEFAULT_CANVAS_SIZE: u32 = 600;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status. `body` is the raw
    /// response text, shown to the user as-is.
    #[error("Server rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Text to put in the error banner of the control that triggered the request
    pub fn banner_text(&self) -> String {
        match self {
            AppError::Rejected { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

/// Client settings shared by the poll loop and the command glue
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub canvas_size: u32,
}

impl ClientConfig {
    /// Reads settings from the environment, falling back to defaults for
    /// anything unset or unparsable
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PUGNA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let poll_interval_ms = std::env::var("PUGNA_POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);

        let request_timeout_ms = std::env::var("PUGNA_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

        let canvas_size = std::env::var("PUGNA_CANVAS_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_CANVAS_SIZE);

        Self {
            base_url,
            poll_interval: Duration::from_millis(poll_interval_ms),
            request_timeout: Duration::from_millis(request_timeout_ms),
            canvas_size,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn with_canvas_size(mut self, canvas_size: u32) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    /// Rejects settings the poll loop cannot run with
    pub fn validate(&self) -> Result<(), AppError> {
        if self.poll_interval.is_zero() {
            return Err(AppError::Config("poll interval must be positive".into()));
        }
        if self.canvas_size == 0 {
            return Err(AppError::Config("canvas size must be positive".into()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "base url must be http(s): {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }
}
