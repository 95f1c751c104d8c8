//! List view task.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::watch;
use tokio::time::Instant;
use tokio::time::sleep_until;
use tokio_util::sync::CancellationToken;

use crate::config::ListConfig;
use crate::controller::FetchController;
use crate::error::Error;
use crate::page::FetchResult;
use crate::source::RowSource;
use crate::state::Intent;

use super::handle::ListViewHandle;
use super::snapshot::DisplaySnapshot;

/// Messages from handles to the view task.
#[derive(Debug)]
pub(crate) enum Command {
    Intent(Intent),
    Refresh,
}

/// Outcome of a spawned fetch, tagged with its request.
struct Completion {
    seq: u64,
    outcome: Result<FetchResult, Error>,
}

/// Entry point for mounting a list view.
///
/// # Example
///
/// ```ignore
/// let view = ListView::spawn(client, ListConfig::default());
/// let mut snapshots = view.subscribe();
///
/// view.search_changed("dolor")?;
///
/// while snapshots.changed().await.is_ok() {
///     let snapshot = snapshots.borrow_and_update().clone();
///     if !snapshot.loading() {
///         println!("{} rows", snapshot.rows().len());
///     }
/// }
/// ```
pub struct ListView;

impl ListView {
    /// Spawns the view task on the current tokio runtime.
    ///
    /// The mount-time state is fetched once through the debounce path. The
    /// task stops when [`ListViewHandle::shutdown`] is called or every handle
    /// has been dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn<S: RowSource + 'static>(source: S, config: ListConfig) -> ListViewHandle {
        Self::spawn_shared(Arc::new(source), config)
    }

    /// Spawns the view task with a shared row source.
    pub fn spawn_shared(source: Arc<dyn RowSource>, config: ListConfig) -> ListViewHandle {
        let controller = FetchController::new(&config);
        let (commands_tx, commands) = mpsc::unbounded_channel();
        let (completions_tx, completions) = mpsc::unbounded_channel();
        let (snapshots, snapshots_rx) = watch::channel(DisplaySnapshot::capture(&controller));
        let cancel = CancellationToken::new();

        let actor = Actor {
            controller,
            source,
            commands,
            completions_tx,
            completions,
            snapshots,
            cancel: cancel.clone(),
        };
        tokio::spawn(actor.run());

        ListViewHandle::new(commands_tx, snapshots_rx, cancel)
    }
}

struct Actor {
    controller: FetchController,
    source: Arc<dyn RowSource>,
    commands: mpsc::UnboundedReceiver<Command>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions: mpsc::UnboundedReceiver<Completion>,
    snapshots: watch::Sender<DisplaySnapshot>,
    cancel: CancellationToken,
}

impl Actor {
    async fn run(mut self) {
        log::debug!("List view mounted");
        self.controller.refresh(Instant::now());
        self.publish();

        loop {
            let deadline = self.controller.timer().deadline();

            tokio::select! {
                _ = self.cancel.cancelled() => {
                    log::debug!("List view shut down");
                    break;
                }
                Some(done) = self.completions.recv() => {
                    if !self.controller.complete(done.seq, done.outcome) {
                        continue;
                    }
                }
                command = self.commands.recv() => match command {
                    Some(Command::Intent(intent)) => {
                        if !self.controller.apply(&intent, Instant::now()) {
                            continue;
                        }
                    }
                    Some(Command::Refresh) => self.controller.refresh(Instant::now()),
                    None => {
                        log::debug!("All list view handles dropped");
                        break;
                    }
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.fire();
                }
            }

            self.publish();
        }
    }

    /// Issues the due request and runs it on its own task.
    fn fire(&mut self) {
        let Some(request) = self.controller.poll(Instant::now()) else {
            return;
        };

        let source = Arc::clone(&self.source);
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let outcome = source.fetch(&request).await;
            // Fails only after shutdown, when nobody wants the result.
            let _ = completions.send(Completion {
                seq: request.seq(),
                outcome,
            });
        });
    }

    fn publish(&self) {
        self.snapshots
            .send_replace(DisplaySnapshot::capture(&self.controller));
    }
}
