use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use reel_logging::{reel_debug, reel_info, reel_warn};
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::sink::EventSink;
use crate::slot::RequestSlot;
use crate::{EngineEvent, FetchError, Listing, RequestId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Thread(#[source] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    Debounce {
        request_id: RequestId,
        delay: Duration,
    },
    Fetch {
        request_id: RequestId,
        listing: Listing,
    },
    CancelAll,
}

/// Runs timers and fetches on a background tokio runtime.
///
/// Every command goes through one [`RequestSlot`]: a new timer or fetch cancels
/// the previous one, and a cancelled task reports nothing to the sink.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(fetcher: Arc<dyn Fetcher>, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("reel-engine-worker")
            .enable_all()
            .build()
            .map_err(EngineError::Runtime)?;

        thread::Builder::new()
            .name("reel-engine".to_string())
            .spawn(move || run_commands(runtime, fetcher, sink, cmd_rx))
            .map_err(EngineError::Thread)?;

        Ok(Self { cmd_tx })
    }

    /// Engine backed by a [`ReqwestFetcher`] built from `settings`.
    pub fn with_settings(
        settings: FetchSettings,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Self::new(Arc::new(fetcher), sink)
    }

    pub fn debounce(&self, request_id: RequestId, delay: Duration) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::Debounce { request_id, delay });
    }

    pub fn fetch(&self, request_id: RequestId, listing: Listing) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::Fetch { request_id, listing });
    }

    pub fn cancel_all(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelAll);
    }
}

fn run_commands(
    runtime: Runtime,
    fetcher: Arc<dyn Fetcher>,
    sink: Arc<dyn EventSink>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
) {
    let mut slot = RequestSlot::new();
    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Debounce { request_id, delay } => {
                let token = slot.arm();
                runtime.spawn(run_timer(request_id, delay, token, sink.clone()));
            }
            EngineCommand::Fetch { request_id, listing } => {
                let token = slot.arm();
                runtime.spawn(run_fetch(
                    request_id,
                    listing,
                    token,
                    fetcher.clone(),
                    sink.clone(),
                ));
            }
            EngineCommand::CancelAll => slot.cancel(),
        }
    }
    slot.cancel();
    reel_info!("engine command channel closed; shutting down");
}

async fn run_timer(
    request_id: RequestId,
    delay: Duration,
    token: CancellationToken,
    sink: Arc<dyn EventSink>,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            reel_debug!("debounce for request {} cancelled", request_id);
        }
        _ = tokio::time::sleep(delay) => {
            sink.emit(EngineEvent::DebounceElapsed { request_id });
        }
    }
}

async fn run_fetch(
    request_id: RequestId,
    listing: Listing,
    token: CancellationToken,
    fetcher: Arc<dyn Fetcher>,
    sink: Arc<dyn EventSink>,
) {
    reel_info!("request {} started: {:?}", request_id, listing);
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            reel_debug!("request {} cancelled", request_id);
        }
        result = fetcher.fetch(&listing) => {
            match &result {
                Ok(movies) => reel_debug!("request {} returned {} movies", request_id, movies.len()),
                Err(err) => reel_warn!("request {} failed: {}", request_id, err),
            }
            sink.emit(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}
