pub mod browser;
pub mod showcase;
pub mod smooth_scroll;

use thiserror::Error;

/// A failure reported by one of the external scroll engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct EngineError(pub String);

/// Lifecycle shared by the scroll controllers. `TornDown` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Initializing,
    Running,
    TornDown,
}
