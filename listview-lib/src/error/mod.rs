//! Error types

mod api;
mod row;

pub use api::*;
pub use row::*;

/// Top-level error for list view operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The remote endpoint could not be reached or answered with a failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The list view task has stopped and no longer accepts intents.
    #[error("List view has shut down")]
    Closed,
}

impl Error {
    /// Returns the HTTP status code if the server answered with a failure status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(api) => api.status_code(),
            _ => None,
        }
    }

    /// Returns `true` for network level failures (unreachable, reset, timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Api(api) if api.is_transport())
    }

    /// Returns `true` if the server answered with a non-2xx status.
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Api(api) if api.is_server())
    }
}
