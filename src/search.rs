//! Debounced autocomplete plumbing.
//!
//! Every keystroke goes through an explicit cancellable task: triggering a
//! slot cancels whatever that slot had scheduled (still waiting out the
//! window or already mid-fetch) before arming the new timer. Nothing relies
//! on implicit cleanup ordering.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::locale::Locale;
use crate::seo::strapi::{Location, StrapiClient};

/// Delay between the last keystroke and the dispatched search.
pub const DEBOUNCE_MS: u64 = 300;

/// Minimum query length before anything is dispatched at all.
const MIN_QUERY_LEN: usize = 2;

/// Cancellable delayed-task scheduler, one pending task per slot. Slots let
/// independent inputs (the "from" and "to" airport fields, the location box)
/// debounce without stepping on each other.
pub struct Debouncer {
    delay: Duration,
    slots: DashMap<String, CancellationToken>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_MS))
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            slots: DashMap::new(),
        }
    }

    /// Schedule `task` to run after the delay, superseding whatever the slot
    /// had pending. Returns the new task's cancellation token.
    pub fn trigger<F, Fut>(&self, slot: &str, task: F) -> CancellationToken
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();

        // cancel the previous timer for this slot before arming a new one
        if let Some(previous) = self.slots.insert(slot.to_string(), token.clone()) {
            previous.cancel();
        }

        let delay = self.delay;
        let run_token = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = run_token.cancelled() => {}
                _ = async {
                    tokio::time::sleep(delay).await;
                    task().await;
                } => {}
            }
        });

        token
    }

    /// Cancel the slot's pending task, if any.
    pub fn cancel(&self, slot: &str) {
        if let Some((_, token)) = self.slots.remove(slot) {
            token.cancel();
        }
    }

    pub fn cancel_all(&self) {
        for entry in self.slots.iter() {
            entry.value().cancel();
        }
        self.slots.clear();
    }
}

/// Debounced CMS location search backing the destination dropdown.
pub struct LocationSearcher {
    client: Arc<StrapiClient>,
    debouncer: Debouncer,
    max_results: usize,
}

impl LocationSearcher {
    pub fn new(client: Arc<StrapiClient>) -> Self {
        Self {
            client,
            debouncer: Debouncer::default(),
            max_results: 10,
        }
    }

    /// Immediate search. Short queries return nothing; a failed fetch
    /// degrades to an empty list with a logged warning, never an error state.
    pub async fn search(&self, query: &str, locale: Locale) -> Vec<Location> {
        let query = query.trim();
        if query.len() < MIN_QUERY_LEN {
            return Vec::new();
        }

        match self
            .client
            .search_locations(query, locale, self.max_results)
            .await
        {
            Ok(locations) => locations,
            Err(err) => {
                log::warn!("location search failed for {query:?}: {err}");
                Vec::new()
            }
        }
    }

    /// Keystroke entry point. Supersedes the slot's pending search and, once
    /// the debounce window passes, delivers results on the channel.
    pub fn on_input(
        self: &Arc<Self>,
        slot: &str,
        query: String,
        locale: Locale,
        results: mpsc::UnboundedSender<Vec<Location>>,
    ) {
        if query.trim().len() < MIN_QUERY_LEN {
            self.debouncer.cancel(slot);
            let _ = results.send(Vec::new());
            return;
        }

        let this = self.clone();
        self.debouncer.trigger(slot, move || async move {
            let found = this.search(&query, locale).await;
            let _ = results.send(found);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_task_runs_after_delay() {
        let debouncer = Debouncer::new(Duration::from_millis(10));
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        debouncer.trigger("q", move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rapid_retrigger_cancels_earlier_task() {
        let debouncer = Debouncer::new(Duration::from_millis(20));
        let hits = Arc::new(AtomicUsize::new(0));

        // five keystrokes inside one debounce window
        for _ in 0..5 {
            let counter = hits.clone();
            debouncer.trigger("q", move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1, "only the last keystroke fires");
    }

    #[tokio::test]
    async fn test_slots_are_independent() {
        let debouncer = Debouncer::new(Duration::from_millis(10));
        let hits = Arc::new(AtomicUsize::new(0));

        for slot in ["from", "to"] {
            let counter = hits.clone();
            debouncer.trigger(slot, move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_explicit_cancel() {
        let debouncer = Debouncer::new(Duration::from_millis(10));
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        debouncer.trigger("q", move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel("q");

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_short_query_clears_without_dispatch() {
        let searcher = Arc::new(LocationSearcher::new(Arc::new(StrapiClient::new(
            "http://localhost:1337",
        ))));
        let (tx, mut rx) = mpsc::unbounded_channel();

        searcher.on_input("dest", "c".into(), Locale::En, tx);
        let delivered = rx.recv().await.unwrap();
        assert!(delivered.is_empty());
    }
}
