//! Background worker for the one-time catalog load.
//!
//! - [`messages`]: request/response protocol types
//! - [`handler`]: worker loop and spawn helper

pub mod handler;
pub mod messages;

pub use handler::{spawn, CatalogWorker};
pub use messages::{WorkerMessage, WorkerResponse};
