//! Shared fixtures for unit tests.

use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::controller::FetchRequest;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Row;
use crate::page::FetchResult;
use crate::source::RowSource;

/// Posts with ids in `ids`, titled like jsonplaceholder's fixtures.
pub fn posts(ids: RangeInclusive<i64>) -> Vec<Row> {
    ids.map(|id| Row::new(id).set("title", format!("post {}", id)))
        .collect()
}

/// A scripted response: delay, then either a page or a server error.
#[derive(Debug, Clone)]
pub enum Reply {
    Page { delay: Duration, total: usize },
    Fail { delay: Duration, status: u16 },
}

/// A recorded call to [`FakeSource::fetch`].
#[derive(Debug, Clone)]
pub struct Call {
    pub at: Instant,
    pub request: FetchRequest,
}

/// Row source that answers from a script and records every call.
///
/// Pages contain the rows the request's pagination asks for. When the script
/// runs out, it answers immediately with a 95-row total.
#[derive(Clone, Default)]
pub struct FakeSource {
    script: Arc<Mutex<VecDeque<Reply>>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeSource {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            script: Arc::new(Mutex::new(replies.into_iter().collect())),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RowSource for FakeSource {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResult, Error> {
        self.calls.lock().unwrap().push(Call {
            at: Instant::now(),
            request: request.clone(),
        });
        let reply = self.script.lock().unwrap().pop_front().unwrap_or(Reply::Page {
            delay: Duration::ZERO,
            total: 95,
        });

        match reply {
            Reply::Page { delay, total } => {
                tokio::time::sleep(delay).await;
                let pagination = request.state().pagination();
                let first = pagination.offset().min(total) + 1;
                let last = pagination
                    .offset()
                    .saturating_add(pagination.page_size())
                    .min(total);
                Ok(FetchResult::new(posts(first as i64..=last as i64), total))
            }
            Reply::Fail { delay, status } => {
                tokio::time::sleep(delay).await;
                Err(ApiError::http(status, "scripted failure").into())
            }
        }
    }
}
