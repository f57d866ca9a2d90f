/// The only way a search can fail: the move clock ran below the threshold.
///
/// Raised at whichever node notices, propagated untouched through every
/// recursive frame, and handled once by the iterative driver or the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search timed out")]
    Timeout,
}

/// Errors that can occur when validating an agent configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("agent config validation error: {0}")]
    Validation(String),
}
