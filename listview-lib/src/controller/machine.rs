//! Fetch controller state machine.

use tokio::time::Instant;

use crate::config::ListConfig;
use crate::error::Error;
use crate::model::Column;
use crate::page::FetchResult;
use crate::query::QueryEncoder;
use crate::state::Bounds;
use crate::state::DisplayState;
use crate::state::Intent;
use crate::state::Pagination;
use crate::state::ViewState;

use super::request::FetchRequest;
use super::timer::DebounceTimer;

/// Where the controller is in its request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing scheduled and nothing received yet.
    Idle,
    /// The debounce timer is armed.
    Debouncing,
    /// The latest request is outstanding.
    Fetching,
    /// The latest request has been answered.
    Settled,
}

/// The latest issued request, while its response is outstanding.
#[derive(Debug, Clone, Copy)]
struct Pending {
    seq: u64,
    pagination: Pagination,
}

/// Owns the view state, the display state and the debounce timer.
///
/// Every method takes the current time explicitly, so the controller can be
/// driven by a tokio task or stepped through by hand.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use listview_lib::ListConfig;
/// use listview_lib::controller::FetchController;
/// use listview_lib::state::Intent;
/// use tokio::time::Instant;
///
/// let mut controller = FetchController::new(&ListConfig::default());
/// let now = Instant::now();
///
/// controller.apply(&Intent::Search("qui".into()), now);
/// assert!(controller.poll(now).is_none());
///
/// let request = controller.poll(now + Duration::from_millis(250)).unwrap();
/// assert_eq!(request.params().get("q"), Some("qui"));
/// ```
#[derive(Debug)]
pub struct FetchController {
    encoder: QueryEncoder,
    columns: Vec<Column>,
    view: ViewState,
    display: DisplayState,
    timer: DebounceTimer,
    next_seq: u64,
    latest_issued: Option<u64>,
    pending: Option<Pending>,
}

impl FetchController {
    /// Creates a controller in its mount-time state.
    pub fn new(config: &ListConfig) -> Self {
        Self {
            encoder: config.encoder(),
            columns: config.columns.clone(),
            view: config.initial_state(),
            display: DisplayState::default(),
            timer: DebounceTimer::new(config.debounce),
            next_seq: 1,
            latest_issued: None,
            pending: None,
        }
    }

    /// Returns the current view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Returns the current display state.
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Returns the debounce timer.
    pub fn timer(&self) -> &DebounceTimer {
        &self.timer
    }

    /// Returns the columns sort toggles are checked against.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the tag of the most recently issued request.
    pub fn latest_issued(&self) -> Option<u64> {
        self.latest_issued
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        if self.timer.is_armed() {
            Phase::Debouncing
        } else if self.pending.is_some() {
            Phase::Fetching
        } else if self.latest_issued.is_some() {
            Phase::Settled
        } else {
            Phase::Idle
        }
    }

    /// Applies a user intent.
    ///
    /// If the view state changes, the debounce timer is re-armed and `true`
    /// is returned. Intents that leave the state as it was do nothing.
    pub fn apply(&mut self, intent: &Intent, now: Instant) -> bool {
        let bounds = Bounds {
            total_count: self.display.known_total_count(),
            columns: &self.columns,
        };
        let next = self.view.compute_next(intent, bounds);
        if next == self.view {
            log::trace!("Intent {:?} left view state unchanged", intent);
            return false;
        }

        self.view = next;
        let deadline = self.timer.rearm(now);
        log::debug!(
            "View state changed by {:?}, fetch due in {:?}",
            intent,
            deadline.saturating_duration_since(now)
        );
        true
    }

    /// Re-arms the debounce timer without changing the view state.
    pub fn refresh(&mut self, now: Instant) {
        self.timer.rearm(now);
    }

    /// Issues a request if the debounce timer is due.
    pub fn poll(&mut self, now: Instant) -> Option<FetchRequest> {
        if !self.timer.take_due(now) {
            return None;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        if let Some(previous) = self.pending {
            log::debug!("Request #{} supersedes outstanding #{}", seq, previous.seq);
        }

        self.latest_issued = Some(seq);
        self.pending = Some(Pending {
            seq,
            pagination: self.view.pagination(),
        });
        self.display.begin_loading();

        let params = self.encoder.encode(&self.view);
        log::debug!("Issuing request #{}: {}", seq, params.to_query_string());
        Some(FetchRequest::new(seq, self.view.clone(), params))
    }

    /// Reconciles the outcome of request `seq` into the display state.
    ///
    /// Responses to anything but the latest issued request are discarded.
    /// Returns `true` if the outcome was applied.
    pub fn complete(&mut self, seq: u64, outcome: Result<FetchResult, Error>) -> bool {
        let pending = match self.pending {
            Some(pending) if pending.seq == seq => pending,
            _ => {
                log::debug!(
                    "Discarding response to request #{} (latest is #{:?})",
                    seq,
                    self.latest_issued
                );
                return false;
            }
        };
        self.pending = None;

        match outcome {
            Ok(result) => {
                log::debug!(
                    "Request #{} returned {} rows of {}",
                    seq,
                    result.len(),
                    result.total_count()
                );
                self.display.apply_result(result, pending.pagination);
            }
            Err(err) => {
                log::warn!("Request #{} failed: {}", seq, err);
                self.display.apply_failure(err);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::ApiError;
    use crate::test_utils::posts;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_rapid_changes_coalesce_into_one_request() {
        let mut controller = FetchController::new(&ListConfig::default());
        let t0 = Instant::now();

        assert!(controller.apply(&Intent::Search("s".into()), t0));
        assert!(controller.apply(&Intent::Search("su".into()), t0 + ms(100)));
        assert!(controller.apply(&Intent::Search("sun".into()), t0 + ms(150)));
        assert_eq!(controller.phase(), Phase::Debouncing);

        assert!(controller.poll(t0 + ms(250)).is_none());
        assert!(controller.poll(t0 + ms(399)).is_none());

        let request = controller.poll(t0 + ms(400)).unwrap();
        assert_eq!(request.seq(), 1);
        assert_eq!(request.state().search_text(), "sun");
        assert_eq!(controller.phase(), Phase::Fetching);
        assert!(controller.display().loading());

        assert!(controller.poll(t0 + ms(800)).is_none());
    }

    #[test]
    fn test_unchanged_intent_does_not_rearm() {
        let mut controller = FetchController::new(&ListConfig::default());
        let t0 = Instant::now();

        assert!(!controller.apply(&Intent::Search(String::new()), t0));
        assert!(!controller.timer().is_armed());
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut controller = FetchController::new(&ListConfig::default());
        let t0 = Instant::now();

        controller.refresh(t0);
        let a = controller.poll(t0 + ms(250)).unwrap();
        assert_eq!(a.state().pagination().page_index(), 0);

        controller.apply(&Intent::Page(1), t0 + ms(300));
        let b = controller.poll(t0 + ms(550)).unwrap();
        assert_eq!(b.state().pagination().page_index(), 1);
        assert!(b.seq() > a.seq());

        assert!(controller.complete(b.seq(), Ok(FetchResult::new(posts(11..=20), 95))));
        assert!(!controller.complete(a.seq(), Ok(FetchResult::new(posts(1..=10), 95))));

        let display = controller.display();
        assert_eq!(display.rows()[0].id().to_string(), "11");
        assert!(!display.loading());
        assert_eq!(controller.phase(), Phase::Settled);
    }

    #[test]
    fn test_superseded_response_does_not_clear_loading() {
        let mut controller = FetchController::new(&ListConfig::default());
        let t0 = Instant::now();

        controller.refresh(t0);
        let a = controller.poll(t0 + ms(250)).unwrap();
        controller.apply(&Intent::NextPage, t0 + ms(260));
        let b = controller.poll(t0 + ms(510)).unwrap();

        assert!(!controller.complete(a.seq(), Ok(FetchResult::new(posts(1..=10), 95))));
        assert!(controller.display().loading());
        assert!(controller.display().rows().is_empty());

        assert!(controller.complete(b.seq(), Ok(FetchResult::new(posts(11..=20), 95))));
        assert!(!controller.display().loading());
    }

    #[test]
    fn test_failure_keeps_previous_rows() {
        let mut controller = FetchController::new(&ListConfig::default());
        let t0 = Instant::now();

        controller.refresh(t0);
        let first = controller.poll(t0 + ms(250)).unwrap();
        controller.complete(first.seq(), Ok(FetchResult::new(posts(1..=10), 95)));

        controller.apply(&Intent::Filter("zzz".into()), t0 + ms(300));
        let second = controller.poll(t0 + ms(550)).unwrap();
        assert!(controller.complete(second.seq(), Err(ApiError::http(502, "bad gateway").into())));

        let display = controller.display();
        assert!(!display.loading());
        assert_eq!(display.rows().len(), 10);
        assert_eq!(display.page_count(), 10);
        assert!(display.error().is_some_and(|e| e.is_server()));
        assert_eq!(controller.view().filter_text(), "zzz");
    }

    #[test]
    fn test_page_count_uses_request_page_size() {
        let mut controller = FetchController::new(&ListConfig::default());
        let t0 = Instant::now();

        controller.refresh(t0);
        let request = controller.poll(t0 + ms(250)).unwrap();
        controller.apply(&Intent::PageSize(50), t0 + ms(260));
        controller.complete(request.seq(), Ok(FetchResult::new(posts(1..=10), 95)));

        assert_eq!(controller.display().page_count(), 10);
        assert_eq!(controller.phase(), Phase::Debouncing);
    }

    #[test]
    fn test_page_jump_clamped_after_first_result() {
        let mut controller = FetchController::new(&ListConfig::default());
        let t0 = Instant::now();

        assert!(controller.apply(&Intent::Page(20), t0));
        assert_eq!(controller.view().pagination().page_index(), 20);

        let request = controller.poll(t0 + ms(250)).unwrap();
        controller.complete(request.seq(), Ok(FetchResult::new(Vec::new(), 95)));

        controller.apply(&Intent::Page(20), t0 + ms(300));
        assert_eq!(controller.view().pagination().page_index(), 9);
    }

    #[test]
    fn test_page_jump_after_resize_uses_new_page_size() {
        let mut controller = FetchController::new(&ListConfig::default());
        let t0 = Instant::now();

        controller.refresh(t0);
        let request = controller.poll(t0 + ms(250)).unwrap();
        controller.complete(request.seq(), Ok(FetchResult::new(posts(1..=10), 95)));

        assert!(controller.apply(&Intent::PageSize(5), t0 + ms(300)));
        assert!(controller.apply(&Intent::Page(15), t0 + ms(310)));
        assert_eq!(controller.view().pagination(), Pagination::new(15, 5));

        controller.apply(&Intent::Page(40), t0 + ms(320));
        assert_eq!(controller.view().pagination().page_index(), 18);
    }
}
