use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc, Mutex};
use trellis_core::{AppConfig, TrellisResult};
use trellis_domain::BoardId;
use uuid::Uuid;

/// Server push notifications the board client reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardStreamEvent {
    /// Board data changed server-side; the client should re-fetch.
    BoardUpdated { board_id: BoardId },
    /// A member was removed from the board.
    MemberRemoved { board_id: BoardId, member_id: Uuid },
    /// The board is gone; the client should leave it.
    BoardDeleted { board_id: BoardId },
}

#[derive(Debug, Clone)]
pub struct StreamConfig {
    pub endpoint: String,
    pub token: Option<String>,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl StreamConfig {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            token: None,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(30),
        }
    }

    pub fn from_app_config(config: &AppConfig) -> Self {
        let mut stream_config = Self::new(config.effective_stream_endpoint());
        stream_config.token = config.api_token.clone();
        stream_config
    }
}

/// Transport behind the event stream (SSE in production). Injected so tests
/// can script event sequences without a server.
#[async_trait]
pub trait StreamTransport: Send + Sync + 'static {
    /// Open the stream, yielding a channel of decoded events. A returned
    /// error or channel closure triggers a backoff reconnect.
    async fn open(&self, config: &StreamConfig) -> TrellisResult<mpsc::Receiver<BoardStreamEvent>>;
}

/// Event-stream client with an explicit lifecycle.
///
/// Owned by the composition root with its configuration injected, so tests
/// can stand up doubles and several independent instances can coexist.
/// Reconnects with capped exponential backoff; consumers subscribe to a
/// broadcast of decoded events.
pub struct EventStreamClient {
    config: StreamConfig,
    tx: broadcast::Sender<BoardStreamEvent>,
    task_handle: Arc<Mutex<Option<tokio::task::JoinHandle<()>>>>,
}

impl EventStreamClient {
    pub fn new(config: StreamConfig) -> Self {
        let (tx, _) = broadcast::channel(32);
        Self {
            config,
            tx,
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BoardStreamEvent> {
        self.tx.subscribe()
    }

    /// Spawn the stream-driving task. Reconnecting an already-connected
    /// client replaces the previous task.
    pub async fn connect(&self, transport: Arc<dyn StreamTransport>) {
        let config = self.config.clone();
        let tx = self.tx.clone();

        let handle = tokio::spawn(async move {
            let mut backoff = config.initial_backoff;
            loop {
                match transport.open(&config).await {
                    Ok(mut rx) => {
                        tracing::info!(endpoint = %config.endpoint, "event stream connected");
                        backoff = config.initial_backoff;
                        while let Some(event) = rx.recv().await {
                            let _ = tx.send(event);
                        }
                        tracing::warn!("event stream closed, reconnecting");
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "event stream connect failed");
                    }
                }
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(config.max_backoff);
            }
        });

        let mut guard = self.task_handle.lock().await;
        if let Some(previous) = guard.replace(handle) {
            previous.abort();
        }
    }

    pub async fn disconnect(&self) {
        let mut guard = self.task_handle.lock().await;
        if let Some(handle) = guard.take() {
            handle.abort();
            tracing::info!("event stream disconnected");
        }
    }

    pub async fn is_connected(&self) -> bool {
        let guard = self.task_handle.lock().await;
        guard.as_ref().map(|h| !h.is_finished()).unwrap_or(false)
    }
}
