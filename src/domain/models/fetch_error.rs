use thiserror::Error;

/// Failure of a single request to the plant service. Each variant ends that
/// one attempt only; callers decide whether to log, surface or ignore it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {message}")]
    Network { endpoint: String, message: String },

    #[error("{endpoint} responded with status {status}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("unable to decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn network(endpoint: &str, err: impl ToString) -> FetchError {
        return FetchError::Network {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        };
    }

    pub fn decode(endpoint: &str, source: serde_json::Error) -> FetchError {
        return FetchError::Decode {
            endpoint: endpoint.to_string(),
            source,
        };
    }
}
