use thiserror::Error;

/// Failure reported by a record store adapter.
///
/// Only `Rejected` counts as the store declining a query. The other two
/// variants mean the exchange itself broke down.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record store rejected query with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("record store request failed: {0}")]
    Transport(eyre::Report),

    #[error("malformed record store response: {0}")]
    Malformed(eyre::Report),
}

#[derive(Error, Debug)]
pub enum AlleyError {
    #[error("Missing required parameters")]
    MissingParameters { required: Vec<&'static str> },

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Failed to fetch availability")]
    UpstreamUnavailable(#[source] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] eyre::Report),
}

impl AlleyError {
    /// Wraps a store failure that has no dedicated variant.
    pub fn unexpected(err: StoreError) -> Self {
        AlleyError::Internal(eyre::Report::new(err))
    }
}

pub type AlleyResult<T> = Result<T, AlleyError>;
