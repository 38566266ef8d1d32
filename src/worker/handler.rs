//! Worker thread for the asynchronous catalog load.
//!
//! The interaction loop must stay responsive while the catalog document is
//! being read or fetched, so the load runs on a dedicated thread and the
//! result comes back over a channel. The worker processes messages until the
//! requesting side hangs up, which in practice means it handles one
//! [`WorkerMessage::LoadCatalog`] and then idles until process exit.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::catalog::CatalogBackend;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Worker state: the catalog backend it loads from.
pub struct CatalogWorker {
    backend: Box<dyn CatalogBackend>,
}

impl CatalogWorker {
    /// Creates a worker over the given catalog backend.
    #[must_use]
    pub fn new(backend: Box<dyn CatalogBackend>) -> Self {
        Self { backend }
    }

    /// Processes a single message and produces its response.
    #[must_use]
    pub fn handle_message(&self, message: &WorkerMessage) -> WorkerResponse {
        match message {
            WorkerMessage::LoadCatalog => self.handle_load_catalog(),
        }
    }

    /// Handles the `LoadCatalog` message.
    ///
    /// Errors are converted into a `LoadFailed` response rather than
    /// propagated; the load-failure path is a UI state, not a crash.
    fn handle_load_catalog(&self) -> WorkerResponse {
        let _span =
            tracing::debug_span!("worker_load_catalog", source = %self.backend.location())
                .entered();

        match self.backend.fetch() {
            Ok(listings) => {
                tracing::debug!(count = listings.len(), "catalog loaded");
                WorkerResponse::CatalogLoaded { listings }
            }
            Err(e) => {
                tracing::debug!(error = %e, "catalog load failed");
                WorkerResponse::LoadFailed { message: e.to_string() }
            }
        }
    }
}

/// Spawns the worker thread and returns its message channels.
///
/// The thread exits when the request sender is dropped. Responses for which
/// the receiver has gone away are discarded silently; that only happens
/// during shutdown.
#[must_use]
pub fn spawn(backend: Box<dyn CatalogBackend>) -> (Sender<WorkerMessage>, Receiver<WorkerResponse>) {
    let (request_tx, request_rx) = mpsc::channel::<WorkerMessage>();
    let (response_tx, response_rx) = mpsc::channel::<WorkerResponse>();

    thread::spawn(move || {
        let worker = CatalogWorker::new(backend);
        for message in request_rx {
            let response = worker.handle_message(&message);
            if response_tx.send(response).is_err() {
                break;
            }
        }
        tracing::debug!("catalog worker exiting");
    });

    (request_tx, response_rx)
}
