use thiserror::Error;

/// Failures talking to the Ergast-compatible API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("malformed upstream response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Operation-level failures, converted to a failure envelope at the handler
/// boundary. `RaceNotFound` maps to 404, everything else to 500.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("race not found")]
    RaceNotFound,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
