//! Debounced search coordinator for the book list screen.
//!
//! [`SearchCoordinator`] owns the screen's [`BookListState`] and turns a
//! rapidly changing query into at most one in-flight repository search.
//!
//! # Architecture
//!
//! ```text
//! set_query ──► watch::Sender<BookListState> ──► observe() streams ──► UI
//!                       │
//!                       ▼
//!                query watcher task  (dedup → debounce → settle)
//!                       │
//!                       ▼
//!                search task  (one at a time, cancelled when superseded)
//! ```
//!
//! The state lives in a `tokio::sync::watch` channel; every change is a single
//! `send_modify`, so observers never see a half-applied update. The watcher is
//! spawned on the first poll of the first `observe()` stream and runs until the
//! coordinator shuts down.
//!
//! # Settle Rules
//!
//! After the query has been stable for the debounce period:
//!
//! - blank query: cancel any search, clear the error, show the cached results
//! - at least `min_query_len` chars: cancel any search and start a new one
//! - anything shorter: leave the screen as it is
//!
//! # Cancellation
//!
//! Each search task carries a [`CancellationToken`] that is a child of the
//! coordinator's session token. A task checks its token under the job lock
//! before every state change, and the job lock is also held while a successor
//! replaces it, so a superseded task can never write after its successor
//! started.

use crate::app::actions::BookListAction;
use crate::app::state::BookListState;
use crate::data::BookRepository;
use crate::domain::{Book, DataError};
use crate::Config;
use futures_util::Stream;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// Quiet period before a query is acted on.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Shortest non-blank query that triggers a search.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Converts a data error into the text shown to the user.
pub type ErrorMapper = Arc<dyn Fn(&DataError) -> String + Send + Sync>;

/// Timing and threshold knobs of the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub debounce: Duration,
    pub min_query_len: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

impl From<&Config> for SearchSettings {
    fn from(config: &Config) -> Self {
        Self {
            debounce: Duration::from_millis(config.debounce_ms),
            min_query_len: config.min_query_len,
        }
    }
}

/// Coordinates debounced searches and publishes state snapshots.
///
/// Cloning is cheap; all clones drive the same session. The session ends on
/// [`shutdown`](Self::shutdown) or when the last handle and the last
/// observer stream are dropped.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use openlib::app::{SearchCoordinator, SearchSettings};
/// use openlib::data::{DefaultBookRepository, HttpRemoteBookDataSource};
/// use openlib::Config;
/// use std::sync::Arc;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::default();
/// let repository = DefaultBookRepository::new(HttpRemoteBookDataSource::new(&config)?);
/// let coordinator = SearchCoordinator::new(Arc::new(repository), SearchSettings::from(&config));
///
/// let mut states = Box::pin(coordinator.observe());
/// coordinator.set_query("dune");
/// while let Some(state) = states.next().await {
///     if !state.is_loading && !state.search_results.is_empty() {
///         break;
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SearchCoordinator {
    inner: Arc<Inner>,
}

struct Inner {
    repository: Arc<dyn BookRepository>,
    settings: SearchSettings,
    error_mapper: ErrorMapper,
    state: watch::Sender<BookListState>,
    /// Last successful result set, restored when the query is cleared.
    cached_books: Mutex<Vec<Book>>,
    /// The current search task. Also serializes search-task state writes.
    search_job: Mutex<Option<SearchJob>>,
    started: AtomicBool,
    session: CancellationToken,
}

struct SearchJob {
    query: String,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl SearchJob {
    fn cancel(self) {
        tracing::debug!(query = %self.query, "cancelling superseded search");
        self.token.cancel();
        self.handle.abort();
    }
}

impl SearchCoordinator {
    /// Creates a coordinator that maps errors with [`crate::ui::text::to_ui_text`].
    #[must_use]
    pub fn new(repository: Arc<dyn BookRepository>, settings: SearchSettings) -> Self {
        Self::with_error_mapper(
            repository,
            settings,
            Arc::new(|error: &DataError| crate::ui::text::to_ui_text(error)),
        )
    }

    /// Creates a coordinator with a custom error-to-text mapping.
    #[must_use]
    pub fn with_error_mapper(
        repository: Arc<dyn BookRepository>,
        settings: SearchSettings,
        error_mapper: ErrorMapper,
    ) -> Self {
        let (state, _) = watch::channel(BookListState::default());

        Self {
            inner: Arc::new(Inner {
                repository,
                settings,
                error_mapper,
                state,
                cached_books: Mutex::new(Vec::new()),
                search_job: Mutex::new(None),
                started: AtomicBool::new(false),
                session: CancellationToken::new(),
            }),
        }
    }

    /// Dispatches a UI action.
    pub fn on_action(&self, action: BookListAction) {
        match action {
            BookListAction::OnBookClick(book) => {
                tracing::debug!(book_id = %book.id, "book selected");
            }
            BookListAction::OnSearchQueryChange(query) => self.set_query(query),
            BookListAction::OnTabSelected(index) => self.select_tab(index),
        }
    }

    /// Replaces the query text. Never performs I/O.
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.inner.state.send_if_modified(|state| {
            if state.search_query == query {
                return false;
            }
            state.search_query = query;
            true
        });
    }

    /// Selects the active tab.
    pub fn select_tab(&self, index: usize) {
        self.inner.state.send_if_modified(|state| {
            let changed = state.selected_tab_index != index;
            state.selected_tab_index = index;
            changed
        });
    }

    /// Replaces the contents of the favorites tab.
    pub fn set_favorite_books(&self, books: Vec<Book>) {
        self.inner.state.send_modify(|state| state.favorite_books = books);
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn state(&self) -> BookListState {
        self.inner.state.borrow().clone()
    }

    /// Streams state snapshots, starting with the current one.
    ///
    /// The stream is lazy: the query watcher is started on its first poll,
    /// at most once per coordinator. Every call returns an independent
    /// stream; intermediate snapshots may be skipped by slow consumers, the
    /// latest one never is. The stream ends when the session shuts down.
    pub fn observe(&self) -> impl Stream<Item = BookListState> + Send + 'static {
        let coordinator = self.clone();
        let receiver = self.inner.state.subscribe();

        futures_util::stream::unfold(
            (coordinator, receiver, true),
            |(coordinator, mut receiver, first)| async move {
                if first {
                    coordinator.ensure_watching();
                    let snapshot = receiver.borrow_and_update().clone();
                    return Some((snapshot, (coordinator, receiver, false)));
                }

                tokio::select! {
                    biased;
                    () = coordinator.inner.session.cancelled() => None,
                    changed = receiver.changed() => {
                        changed.ok()?;
                        let snapshot = receiver.borrow_and_update().clone();
                        Some((snapshot, (coordinator, receiver, false)))
                    }
                }
            },
        )
    }

    /// Ends the session: stops the watcher and cancels any in-flight search.
    pub fn shutdown(&self) {
        tracing::debug!("search coordinator shutting down");
        self.inner.session.cancel();
        if let Some(job) = self.inner.search_job.lock().take() {
            job.cancel();
        }
    }

    fn ensure_watching(&self) {
        if self.inner.started.swap(true, Ordering::SeqCst) {
            return;
        }
        if self.inner.session.is_cancelled() {
            return;
        }

        tracing::debug!(debounce_ms = self.inner.settings.debounce.as_millis(), "starting query watcher");

        let watcher = watch_queries(
            Arc::downgrade(&self.inner),
            self.inner.state.subscribe(),
            self.inner.session.clone(),
            self.inner.settings.debounce,
        );
        tokio::spawn(watcher.instrument(tracing::debug_span!("query_watcher")));
    }
}

impl std::fmt::Debug for SearchCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchCoordinator")
            .field("settings", &self.inner.settings)
            .field("started", &self.inner.started)
            .finish_non_exhaustive()
    }
}

impl Inner {
    /// Acts on a query that has been stable for the debounce period.
    fn settle(self: &Arc<Self>, query: &str) {
        if query.trim().is_empty() {
            let mut job = self.search_job.lock();
            if let Some(previous) = job.take() {
                previous.cancel();
            }
            let cached = self.cached_books.lock().clone();
            tracing::debug!(cached_count = cached.len(), "blank query, restoring cached results");
            self.state.send_modify(|state| {
                state.error_message = None;
                state.search_results = cached;
                state.is_loading = false;
            });
        } else if query.chars().count() >= self.settings.min_query_len {
            self.launch_search(query.to_string());
        } else {
            tracing::debug!(query_len = query.chars().count(), "query too short, leaving results untouched");
        }
    }

    fn launch_search(self: &Arc<Self>, query: String) {
        let mut job = self.search_job.lock();
        if let Some(previous) = job.take() {
            previous.cancel();
        }

        let token = self.session.child_token();
        let span = tracing::debug_span!("search_books", query = %query);
        let task = run_search(
            Arc::downgrade(self),
            Arc::clone(&self.repository),
            query.clone(),
            token.clone(),
        );
        let handle = tokio::spawn(task.instrument(span));

        *job = Some(SearchJob { query, token, handle });
    }

    /// Applies `update` unless `token` has been cancelled.
    fn update_if_current(&self, token: &CancellationToken, update: impl FnOnce(&mut BookListState)) -> bool {
        let _job = self.search_job.lock();
        if token.is_cancelled() {
            return false;
        }
        self.state.send_modify(update);
        true
    }

    fn complete_search(&self, token: &CancellationToken, result: Result<Vec<Book>, DataError>) {
        let _job = self.search_job.lock();
        if token.is_cancelled() {
            tracing::debug!("discarding result of superseded search");
            return;
        }

        match result {
            Ok(books) => {
                tracing::debug!(result_count = books.len(), "search succeeded");
                self.cached_books.lock().clone_from(&books);
                self.state.send_modify(|state| {
                    state.search_results = books;
                    state.error_message = None;
                    state.is_loading = false;
                });
            }
            Err(error) => {
                tracing::debug!(error = %error, "search failed");
                let message = (self.error_mapper)(&error);
                self.state.send_modify(|state| {
                    state.search_results = Vec::new();
                    state.is_loading = false;
                    state.error_message = Some(message);
                });
            }
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.session.cancel();
    }
}

/// Watches the query, debounces it and settles each stable value.
async fn watch_queries(
    inner: Weak<Inner>,
    mut receiver: watch::Receiver<BookListState>,
    session: CancellationToken,
    debounce: Duration,
) {
    let mut query = receiver.borrow_and_update().search_query.clone();

    loop {
        let quiet = tokio::time::sleep(debounce);
        tokio::pin!(quiet);

        loop {
            tokio::select! {
                biased;
                () = session.cancelled() => return,
                () = &mut quiet => break,
                changed = receiver.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    if let Some(latest) = changed_query(&mut receiver, &query) {
                        query = latest;
                        quiet.as_mut().reset(tokio::time::Instant::now() + debounce);
                    }
                }
            }
        }

        match inner.upgrade() {
            Some(inner) => inner.settle(&query),
            None => return,
        }

        loop {
            tokio::select! {
                biased;
                () = session.cancelled() => return,
                changed = receiver.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    if let Some(latest) = changed_query(&mut receiver, &query) {
                        query = latest;
                        break;
                    }
                }
            }
        }
    }
}

/// Returns the new query if it differs from `current`.
fn changed_query(receiver: &mut watch::Receiver<BookListState>, current: &str) -> Option<String> {
    let state = receiver.borrow_and_update();
    (state.search_query != current).then(|| state.search_query.clone())
}

async fn run_search(
    inner: Weak<Inner>,
    repository: Arc<dyn BookRepository>,
    query: String,
    token: CancellationToken,
) {
    let started = inner
        .upgrade()
        .is_some_and(|inner| inner.update_if_current(&token, |state| state.is_loading = true));
    if !started {
        return;
    }

    let result = tokio::select! {
        biased;
        () = token.cancelled() => return,
        result = repository.search_books(&query) => result,
    };

    if let Some(inner) = inner.upgrade() {
        inner.complete_search(&token, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RemoteError;
    use async_trait::async_trait;
    use futures_util::StreamExt;
    use std::collections::HashMap;

    /// Repository replaying scripted responses, with optional latency.
    #[derive(Default)]
    struct ScriptedRepository {
        responses: Mutex<HashMap<String, (Duration, Result<Vec<Book>, DataError>)>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedRepository {
        fn respond(&self, query: &str, result: Result<Vec<Book>, DataError>) {
            self.respond_after(query, Duration::ZERO, result);
        }

        fn respond_after(&self, query: &str, delay: Duration, result: Result<Vec<Book>, DataError>) {
            self.responses.lock().insert(query.to_string(), (delay, result));
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl BookRepository for ScriptedRepository {
        async fn search_books(&self, query: &str) -> Result<Vec<Book>, DataError> {
            self.calls.lock().push(query.to_string());
            let scripted = self.responses.lock().get(query).cloned();
            let (delay, result) = scripted.unwrap_or((Duration::ZERO, Ok(Vec::new())));
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            result
        }

        async fn get_book_description(&self, _book_id: &str) -> Result<Option<String>, DataError> {
            Ok(None)
        }
    }

    fn books(titles: &[&str]) -> Vec<Book> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| Book::new(format!("OL{i}W"), *title))
            .collect()
    }

    async fn started(repository: &Arc<ScriptedRepository>) -> SearchCoordinator {
        let coordinator = SearchCoordinator::new(repository.clone(), SearchSettings::default());
        let mut states = Box::pin(coordinator.observe());
        assert!(states.next().await.is_some());
        settle().await;
        coordinator
    }

    /// Sleeps past the debounce window and lets spawned tasks finish.
    async fn settle() {
        tokio::time::sleep(DEFAULT_DEBOUNCE + Duration::from_millis(100)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn set_query_without_observer_does_not_search() {
        let repository = Arc::new(ScriptedRepository::default());
        let coordinator = SearchCoordinator::new(repository.clone(), SearchSettings::default());

        coordinator.set_query("dune");
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(repository.calls().is_empty());
        assert!(!coordinator.state().is_loading);

        let mut states = Box::pin(coordinator.observe());
        assert!(states.next().await.is_some());
        settle().await;
        assert_eq!(repository.calls(), vec!["dune".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn initial_blank_query_makes_no_network_call() {
        let repository = Arc::new(ScriptedRepository::default());
        let coordinator = started(&repository).await;

        assert!(repository.calls().is_empty());
        let state = coordinator.state();
        assert!(state.search_results.is_empty());
        assert!(!state.is_loading);
        assert!(state.error_message.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn successful_search_publishes_results() {
        let repository = Arc::new(ScriptedRepository::default());
        repository.respond("dune", Ok(books(&["Dune", "Dune Messiah"])));
        let coordinator = started(&repository).await;

        coordinator.set_query("dune");
        settle().await;

        let state = coordinator.state();
        assert_eq!(state.search_results, books(&["Dune", "Dune Messiah"]));
        assert!(!state.is_loading);
        assert!(state.error_message.is_none());
        assert_eq!(repository.calls(), ["dune"]);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_edits_only_search_the_latest_query() {
        let repository = Arc::new(ScriptedRepository::default());
        let coordinator = started(&repository).await;

        for query in ["d", "du", "dun", "dune"] {
            coordinator.set_query(query);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        settle().await;

        assert_eq!(repository.calls(), ["dune"]);
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_query_within_window_never_reaches_network() {
        let repository = Arc::new(ScriptedRepository::default());
        repository.respond("abc", Ok(books(&["Alphabet"])));
        let coordinator = started(&repository).await;

        coordinator.set_query("ab");
        tokio::time::sleep(Duration::from_millis(200)).await;
        coordinator.set_query("abc");
        settle().await;

        assert_eq!(repository.calls(), ["abc"]);
        assert_eq!(coordinator.state().search_results, books(&["Alphabet"]));
    }

    #[tokio::test(start_paused = true)]
    async fn repeating_the_same_query_settles_once() {
        let repository = Arc::new(ScriptedRepository::default());
        let coordinator = started(&repository).await;

        coordinator.set_query("dune");
        settle().await;
        coordinator.set_query("dune");
        settle().await;

        assert_eq!(repository.calls(), ["dune"]);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_clears_results_and_keeps_cache() {
        let repository = Arc::new(ScriptedRepository::default());
        repository.respond("dune", Ok(books(&["Dune", "Dune Messiah"])));
        repository.respond("xx", Err(RemoteError::NoInternet.into()));
        let coordinator = started(&repository).await;

        coordinator.set_query("dune");
        settle().await;
        coordinator.set_query("xx");
        settle().await;

        let state = coordinator.state();
        assert!(state.search_results.is_empty());
        assert!(!state.is_loading);
        assert_eq!(
            state.error_message,
            Some(crate::ui::text::to_ui_text(&RemoteError::NoInternet.into()))
        );

        coordinator.set_query("");
        settle().await;

        let state = coordinator.state();
        assert_eq!(state.search_results, books(&["Dune", "Dune Messiah"]));
        assert!(state.error_message.is_none());
        assert_eq!(repository.calls(), ["dune", "xx"]);
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_the_query_restores_cached_results() {
        let repository = Arc::new(ScriptedRepository::default());
        repository.respond("dune", Ok(books(&["Dune", "Dune Messiah"])));
        repository.respond("emma", Ok(Vec::new()));
        let coordinator = started(&repository).await;

        coordinator.set_query("dune");
        settle().await;
        coordinator.set_query("   ");
        settle().await;

        assert_eq!(coordinator.state().search_results, books(&["Dune", "Dune Messiah"]));

        // An empty success still replaces the cache.
        coordinator.set_query("emma");
        settle().await;
        coordinator.set_query("");
        settle().await;

        assert!(coordinator.state().search_results.is_empty());
        assert_eq!(repository.calls(), ["dune", "emma"]);
    }

    #[tokio::test(start_paused = true)]
    async fn single_character_query_leaves_results_untouched() {
        let repository = Arc::new(ScriptedRepository::default());
        repository.respond("dune", Ok(books(&["Dune"])));
        let coordinator = started(&repository).await;

        coordinator.set_query("dune");
        settle().await;
        coordinator.set_query("d");
        settle().await;

        let state = coordinator.state();
        assert_eq!(state.search_results, books(&["Dune"]));
        assert!(!state.is_loading);
        assert_eq!(repository.calls(), ["dune"]);
    }

    #[tokio::test(start_paused = true)]
    async fn newer_search_discards_in_flight_result() {
        let repository = Arc::new(ScriptedRepository::default());
        repository.respond_after("slow", Duration::from_secs(2), Ok(books(&["Slow"])));
        repository.respond("fast", Ok(books(&["Fast"])));
        let coordinator = started(&repository).await;

        coordinator.set_query("slow");
        settle().await;
        assert!(coordinator.state().is_loading);

        coordinator.set_query("fast");
        settle().await;
        tokio::time::sleep(Duration::from_secs(3)).await;

        let state = coordinator.state();
        assert_eq!(state.search_results, books(&["Fast"]));
        assert!(!state.is_loading);
        assert_eq!(repository.calls(), ["slow", "fast"]);
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_during_a_search_cancels_it() {
        let repository = Arc::new(ScriptedRepository::default());
        repository.respond_after("slow", Duration::from_secs(2), Ok(books(&["Slow"])));
        let coordinator = started(&repository).await;

        coordinator.set_query("slow");
        settle().await;
        coordinator.set_query("");
        settle().await;
        tokio::time::sleep(Duration::from_secs(3)).await;

        let state = coordinator.state();
        assert!(state.search_results.is_empty());
        assert!(!state.is_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn watcher_starts_once_for_many_observers() {
        let repository = Arc::new(ScriptedRepository::default());
        let coordinator = started(&repository).await;

        let mut second = Box::pin(coordinator.observe());
        let mut third = Box::pin(coordinator.clone().observe());
        assert!(second.next().await.is_some());
        assert!(third.next().await.is_some());

        coordinator.set_query("dune");
        settle().await;

        assert_eq!(repository.calls(), ["dune"]);
    }

    #[tokio::test(start_paused = true)]
    async fn observers_see_the_latest_snapshot() {
        let repository = Arc::new(ScriptedRepository::default());
        repository.respond("dune", Ok(books(&["Dune"])));
        let coordinator = started(&repository).await;

        let mut states = Box::pin(coordinator.observe());
        assert!(states.next().await.is_some());

        coordinator.set_query("dune");
        settle().await;

        let latest = states.next().await.unwrap();
        assert_eq!(latest.search_query, "dune");
        assert_eq!(latest.search_results, books(&["Dune"]));
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_searching_and_ends_streams() {
        let repository = Arc::new(ScriptedRepository::default());
        let coordinator = started(&repository).await;
        let mut states = Box::pin(coordinator.observe());
        assert!(states.next().await.is_some());

        coordinator.shutdown();
        coordinator.set_query("dune");
        settle().await;

        assert!(repository.calls().is_empty());
        assert!(states.next().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn actions_update_query_and_tab() {
        let repository = Arc::new(ScriptedRepository::default());
        let coordinator = started(&repository).await;

        coordinator.on_action(BookListAction::OnTabSelected(1));
        coordinator.on_action(BookListAction::OnSearchQueryChange("dune".to_string()));
        coordinator.on_action(BookListAction::OnBookClick(Book::new("OL1W", "Dune")));

        let state = coordinator.state();
        assert_eq!(state.selected_tab_index, 1);
        assert_eq!(state.search_query, "dune");
    }

    #[tokio::test(start_paused = true)]
    async fn favorites_do_not_touch_search_results() {
        let repository = Arc::new(ScriptedRepository::default());
        repository.respond("dune", Ok(vec![Book::new("OL1W", "Dune")]));
        let coordinator = started(&repository).await;

        coordinator.set_query("dune");
        settle().await;
        coordinator.set_favorite_books(vec![Book::new("OL2W", "Emma")]);
        coordinator.select_tab(crate::app::FAVORITES_TAB);

        let state = coordinator.state();
        assert_eq!(state.visible_books()[0].title, "Emma");
        assert_eq!(state.search_results[0].title, "Dune");
        assert_eq!(repository.calls(), vec!["dune".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_error_mapper_is_used() {
        let repository = Arc::new(ScriptedRepository::default());
        repository.respond("xx", Err(RemoteError::Server.into()));
        let coordinator = SearchCoordinator::with_error_mapper(
            repository.clone(),
            SearchSettings::default(),
            Arc::new(|error: &DataError| format!("mapped: {error}")),
        );
        let mut states = Box::pin(coordinator.observe());
        assert!(states.next().await.is_some());

        coordinator.set_query("xx");
        settle().await;

        assert_eq!(coordinator.state().error_message.as_deref(), Some("mapped: server error"));
    }

    #[test]
    fn settings_follow_config() {
        let config = Config {
            debounce_ms: 250,
            min_query_len: 3,
            ..Config::default()
        };
        let settings = SearchSettings::from(&config);
        assert_eq!(settings.debounce, Duration::from_millis(250));
        assert_eq!(settings.min_query_len, 3);
    }
}
