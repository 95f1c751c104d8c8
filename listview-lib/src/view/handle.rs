//! Handle to a running list view.

use tokio::sync::mpsc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::error::Error;
use crate::query::SortSpec;
use crate::state::Intent;

use super::actor::Command;
use super::snapshot::DisplaySnapshot;

/// Callbacks and state access for the rendering layer.
///
/// Handles are cheap to clone. Every callback only enqueues an intent; the
/// view task applies intents in arrival order, each one to the state left by
/// the previous one. Callbacks fail with [`Error::Closed`] once the view task
/// has stopped.
#[derive(Clone)]
pub struct ListViewHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<DisplaySnapshot>,
    cancel: CancellationToken,
}

impl ListViewHandle {
    pub(crate) fn new(
        commands: mpsc::UnboundedSender<Command>,
        snapshots: watch::Receiver<DisplaySnapshot>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            commands,
            snapshots,
            cancel,
        }
    }

    /// Sends an intent to the view task.
    pub fn dispatch(&self, intent: Intent) -> Result<(), Error> {
        self.send(Command::Intent(intent))
    }

    /// Search input changed.
    pub fn search_changed(&self, text: impl Into<String>) -> Result<(), Error> {
        self.dispatch(Intent::Search(text.into()))
    }

    /// Filter input changed.
    pub fn filter_changed(&self, text: impl Into<String>) -> Result<(), Error> {
        self.dispatch(Intent::Filter(text.into()))
    }

    /// A zero-based page was selected.
    pub fn page_changed(&self, page_index: usize) -> Result<(), Error> {
        self.dispatch(Intent::Page(page_index))
    }

    /// The page size was changed.
    pub fn page_size_changed(&self, page_size: usize) -> Result<(), Error> {
        self.dispatch(Intent::PageSize(page_size))
    }

    /// A column header was clicked.
    pub fn sort_toggled(&self, column_id: impl Into<String>) -> Result<(), Error> {
        self.dispatch(Intent::ToggleSort {
            column_id: column_id.into(),
            multi: false,
        })
    }

    /// A column header was clicked with multi-sort enabled.
    pub fn sort_toggled_multi(&self, column_id: impl Into<String>) -> Result<(), Error> {
        self.dispatch(Intent::ToggleSort {
            column_id: column_id.into(),
            multi: true,
        })
    }

    /// Replaces the sort specification.
    pub fn sort_changed(&self, sort: SortSpec) -> Result<(), Error> {
        self.dispatch(Intent::Sort(sort))
    }

    pub fn first_page(&self) -> Result<(), Error> {
        self.dispatch(Intent::FirstPage)
    }

    pub fn previous_page(&self) -> Result<(), Error> {
        self.dispatch(Intent::PreviousPage)
    }

    pub fn next_page(&self) -> Result<(), Error> {
        self.dispatch(Intent::NextPage)
    }

    pub fn last_page(&self) -> Result<(), Error> {
        self.dispatch(Intent::LastPage)
    }

    /// Fetches the current view state again after the debounce interval.
    pub fn refresh(&self) -> Result<(), Error> {
        self.send(Command::Refresh)
    }

    /// Returns the latest published snapshot.
    pub fn snapshot(&self) -> DisplaySnapshot {
        self.snapshots.borrow().clone()
    }

    /// Returns a receiver that is notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<DisplaySnapshot> {
        self.snapshots.clone()
    }

    /// Stops the view task. Outstanding fetches are left to finish unobserved.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` once the view task has stopped.
    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }

    /// Waits until the view task has stopped.
    pub async fn closed(&self) {
        self.commands.closed().await;
    }

    fn send(&self, command: Command) -> Result<(), Error> {
        self.commands.send(command).map_err(|_| Error::Closed)
    }
}
