//! # List loaders
//!
//! A loader fetches remote data and replaces a container's contents with the
//! result. [`ListState`] is what the container shows; [`LoadGuard`] hands
//! out generation tickets so a slow, older response cannot overwrite a newer
//! one; [`use_guarded_loader`] ties both to a Dioxus effect.

use std::cell::Cell;
use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;

/// Contents of a loader's container.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    /// Request in flight; the container is empty.
    Loading,
    /// The request succeeded with no items; show the empty-state message.
    Empty,
    /// The request failed; show the error message.
    Failed,
    Ready(Vec<T>),
}

impl<T> ListState<T> {
    /// Classify a fetch result. Failures are logged here and never propagated.
    pub fn from_result<E: Display>(what: &str, result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) if items.is_empty() => ListState::Empty,
            Ok(items) => ListState::Ready(items),
            Err(e) => {
                tracing::error!("failed to load {}: {}", what, e);
                ListState::Failed
            }
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            ListState::Ready(items) => items,
            _ => &[],
        }
    }
}

/// Ticket identifying one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter shared by every load of one container.
#[derive(Debug, Clone, Default)]
pub struct LoadGuard {
    latest: Rc<Cell<u64>>,
}

impl LoadGuard {
    /// Start a new load; every earlier ticket becomes stale.
    pub fn begin(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}

/// Run `load` whenever a signal it reads changes, applying only the newest
/// result.
pub fn use_guarded_loader<T, F, Fut>(mut load: F) -> Signal<ListState<T>>
where
    T: 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ListState<T>> + 'static,
{
    let guard = use_hook(LoadGuard::default);
    let mut state = use_signal(|| ListState::Loading);

    use_effect(move || {
        let ticket = guard.begin();
        let pending = load();
        state.set(ListState::Loading);
        let guard = guard.clone();
        spawn(async move {
            let next = pending.await;
            if guard.is_current(ticket) {
                state.set(next);
            } else {
                tracing::debug!("dropping stale load result");
            }
        });
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let empty: Result<Vec<u8>, String> = Ok(vec![]);
        assert_eq!(ListState::from_result("x", empty), ListState::Empty);

        let full: Result<Vec<u8>, String> = Ok(vec![1, 2]);
        assert_eq!(ListState::from_result("x", full), ListState::Ready(vec![1, 2]));

        let failed: Result<Vec<u8>, String> = Err("boom".into());
        let state = ListState::from_result("x", failed);
        assert_eq!(state, ListState::Failed);
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_newer_ticket_wins() {
        let guard = LoadGuard::default();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_clones_share_generation() {
        let guard = LoadGuard::default();
        let ticket = guard.begin();
        guard.clone().begin();
        assert!(!guard.is_current(ticket));
    }
}
