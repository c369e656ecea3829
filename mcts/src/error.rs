use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MCTSError {
    /// The operation was requested on a terminal or otherwise invalid state.
    #[error("Illegal state: {0}")]
    IllegalState(String),

    /// The node was never visited or has not been expanded yet.
    #[error("Node not expanded: {0}")]
    NotExpanded(String),

    /// The game adapter broke its contract, e.g. a non-terminal state without legal moves.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, MCTSError>;
