//! Actions representing side effects to be executed by the terminal shim.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions bridge pure state transformations and effectful operations the
//! library layer cannot perform itself. A self-contained catalog browser has
//! exactly one such operation left: leaving the event loop.

/// Commands the event handler asks the shim to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Tear down the terminal and exit the application.
    Quit,
}
