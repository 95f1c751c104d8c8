//! Row source abstraction.

use async_trait::async_trait;

use crate::controller::FetchRequest;
use crate::error::Error;
use crate::page::FetchResult;

/// Performs list fetches on behalf of a [`ListView`](crate::ListView).
///
/// [`ListClient`](crate::ListClient) is the HTTP implementation. Each call
/// serves one request; ordering and staleness are handled by the caller.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Fetches the page described by `request`.
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResult, Error>;
}
