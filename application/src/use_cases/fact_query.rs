//! Fact query layer
//!
//! Exposes retrieval as keyed queries with observable
//! [`QueryState::Pending`] / [`QueryState::Success`] / [`QueryState::Error`]
//! states.
//!
//! - Identical concurrent queries (same request and mode) share one
//!   execution; later callers observe the first caller's result.
//! - Settled successes for non-random requests are cached for the configured
//!   TTL.
//! - In [`QueryMode::Resilient`] a failed retrieval is replaced by a
//!   synthetic fact from the fallback pool; [`QueryMode::Strict`] surfaces
//!   the classified error. Cancellation is never masked.

use super::fact_service::FactService;
use crate::ports::fetch_logger::{FetchEvent, FetchLogger, NoFetchLogger};
use crate::ports::fetch_progress::{FetchProgressNotifier, NoFetchProgress};
use facts_domain::{
    ClassifiedError, FactCategory, FactRequest, NumberFact, QueryConfig, QueryMode, RawFailure,
    category_facts, classify, synthetic_fact,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Observable state of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState {
    Pending,
    Success(NumberFact),
    Error(ClassifiedError),
}

impl QueryState {
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }
}

/// Handle to a (possibly shared) query execution.
pub struct QueryHandle {
    request: FactRequest,
    mode: QueryMode,
    receiver: watch::Receiver<QueryState>,
}

impl QueryHandle {
    fn new(request: FactRequest, mode: QueryMode, receiver: watch::Receiver<QueryState>) -> Self {
        Self {
            request,
            mode,
            receiver,
        }
    }

    fn settled_with(request: FactRequest, mode: QueryMode, state: QueryState) -> Self {
        let (_tx, receiver) = watch::channel(state);
        Self {
            request,
            mode,
            receiver,
        }
    }

    pub fn request(&self) -> &FactRequest {
        &self.request
    }

    /// Current state snapshot
    pub fn state(&self) -> QueryState {
        self.receiver.borrow().clone()
    }

    /// Wait until the query leaves the pending state.
    pub async fn settled(mut self) -> Result<NumberFact, ClassifiedError> {
        let state = match self.receiver.wait_for(|s| !s.is_pending()).await {
            Ok(state) => state.clone(),
            // The executing task went away without publishing a result
            Err(_) => QueryState::Pending,
        };

        match state {
            QueryState::Success(fact) => Ok(fact),
            QueryState::Error(err) => Err(err),
            QueryState::Pending => self.abandoned(),
        }
    }

    fn abandoned(&self) -> Result<NumberFact, ClassifiedError> {
        let err = classify(&RawFailure::Opaque);
        match self.mode {
            QueryMode::Strict => Err(err),
            QueryMode::Resilient => {
                warn!("Query for {} ended without a result, using fallback", self.request);
                Ok(synthetic_fact(&self.request, &mut rand::thread_rng()).stamped(now_millis()))
            }
        }
    }
}

struct CachedFact {
    fact: NumberFact,
    stored_at: Instant,
}

type QueryKey = (FactRequest, QueryMode);

#[derive(Default)]
struct QueryTable {
    in_flight: HashMap<QueryKey, watch::Receiver<QueryState>>,
    cache: HashMap<FactRequest, CachedFact>,
}

/// Request-keyed query client over [`FactService`].
pub struct FactQueryClient {
    service: Arc<FactService>,
    config: QueryConfig,
    progress: Arc<dyn FetchProgressNotifier>,
    fetch_logger: Arc<dyn FetchLogger>,
    shutdown: CancellationToken,
    table: Arc<Mutex<QueryTable>>,
}

impl FactQueryClient {
    pub fn new(service: Arc<FactService>, config: QueryConfig) -> Self {
        Self {
            service,
            config,
            progress: Arc::new(NoFetchProgress),
            fetch_logger: Arc::new(NoFetchLogger),
            shutdown: CancellationToken::new(),
            table: Arc::new(Mutex::new(QueryTable::default())),
        }
    }

    /// Create with a progress notifier.
    pub fn with_progress(mut self, progress: Arc<dyn FetchProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Create with a fetch logger.
    pub fn with_fetch_logger(mut self, logger: Arc<dyn FetchLogger>) -> Self {
        self.fetch_logger = logger;
        self
    }

    pub fn default_mode(&self) -> QueryMode {
        self.config.default_mode
    }

    /// Query using the configured default mode.
    pub fn query(&self, request: FactRequest) -> QueryHandle {
        self.query_with_mode(request, self.config.default_mode)
    }

    /// Query a fact about a number chosen by the source.
    pub fn random_fact(&self, category: FactCategory, mode: QueryMode) -> QueryHandle {
        self.query_with_mode(FactRequest::random(category), mode)
    }

    /// Start (or join) a query.
    ///
    /// Must be called from within a tokio runtime.
    pub fn query_with_mode(&self, request: FactRequest, mode: QueryMode) -> QueryHandle {
        let mut table = lock(&self.table);

        if let Some(fact) = self.cached(&mut table, &request) {
            debug!("Cache hit for {}", request);
            return QueryHandle::settled_with(request, mode, QueryState::Success(fact));
        }

        let key = (request.clone(), mode);
        if let Some(receiver) = table.in_flight.get(&key) {
            debug!("Joining in-flight query for {}", request);
            return QueryHandle::new(request, mode, receiver.clone());
        }

        let (tx, rx) = watch::channel(QueryState::Pending);
        table.in_flight.insert(key.clone(), rx.clone());
        drop(table);

        let task = QueryTask {
            service: self.service.clone(),
            progress: self.progress.clone(),
            fetch_logger: self.fetch_logger.clone(),
            table: self.table.clone(),
            cancel: self.shutdown.child_token(),
            cacheable: !request.is_random() && !self.config.cache_ttl.is_zero(),
            key,
            tx,
        };
        tokio::spawn(task.run());

        QueryHandle::new(request, mode, rx)
    }

    /// Facts for a whole category.
    ///
    /// No configured source serves lists, so these come from the category's
    /// fallback pool, numbered from 1.
    pub fn facts_by_category(&self, category: FactCategory) -> Vec<NumberFact> {
        let stamp = now_millis();
        let facts: Vec<_> = category_facts(category)
            .into_iter()
            .map(|fact| fact.stamped(stamp))
            .collect();
        debug!("Listing {} facts for {}", facts.len(), category);
        facts
    }

    /// Cancel every in-flight query.
    pub fn cancel_all(&self) {
        self.shutdown.cancel();
    }

    /// Number of queries currently executing
    pub fn in_flight(&self) -> usize {
        lock(&self.table).in_flight.len()
    }

    fn cached(&self, table: &mut QueryTable, request: &FactRequest) -> Option<NumberFact> {
        if request.is_random() || self.config.cache_ttl.is_zero() {
            return None;
        }
        let entry = table.cache.get(request)?;
        if entry.stored_at.elapsed() < self.config.cache_ttl {
            return Some(entry.fact.clone());
        }
        table.cache.remove(request);
        None
    }
}

struct QueryTask {
    service: Arc<FactService>,
    progress: Arc<dyn FetchProgressNotifier>,
    fetch_logger: Arc<dyn FetchLogger>,
    table: Arc<Mutex<QueryTable>>,
    cancel: CancellationToken,
    cacheable: bool,
    key: QueryKey,
    tx: watch::Sender<QueryState>,
}

impl QueryTask {
    async fn run(self) {
        let (request, mode) = &self.key;

        let outcome = self
            .service
            .get_number_fact_with_progress(request, &self.cancel, self.progress.as_ref())
            .await;

        let (state, fetched) = match outcome {
            Ok(fact) => (QueryState::Success(fact.stamped(now_millis())), true),
            Err(err) if self.cancel.is_cancelled() => {
                debug!("Query for {} cancelled", request);
                (QueryState::Error(err), false)
            }
            Err(err) => match mode {
                QueryMode::Strict => (QueryState::Error(err), false),
                QueryMode::Resilient => {
                    warn!("All providers failed for {} ({}), using fallback", request, err.kind);
                    (QueryState::Success(self.fallback(request, &err)), false)
                }
            },
        };

        let _ = self.tx.send(state.clone());

        if fetched
            && self.cacheable
            && let QueryState::Success(fact) = state
        {
            lock(&self.table).cache.insert(
                request.clone(),
                CachedFact {
                    fact,
                    stored_at: Instant::now(),
                },
            );
        }
    }

    fn fallback(&self, request: &FactRequest, err: &ClassifiedError) -> NumberFact {
        let fact = synthetic_fact(request, &mut rand::thread_rng()).stamped(now_millis());
        self.progress.on_fallback_used(request);
        self.fetch_logger.log(FetchEvent::new(
            "fallback_used",
            json!({
                "request": request.to_string(),
                "error_kind": err.kind,
                "number": fact.number,
            }),
        ));
        fact
    }
}

impl Drop for QueryTask {
    // Runs on every exit, including a panicking provider, so the key is never
    // left pointing at a dead channel.
    fn drop(&mut self) {
        lock(&self.table).in_flight.remove(&self.key);
    }
}

fn lock(table: &Mutex<QueryTable>) -> MutexGuard<'_, QueryTable> {
    table.lock().unwrap_or_else(|e| e.into_inner())
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::fact_provider::{FactProvider, ProviderError};
    use crate::use_cases::orchestrator::FactOrchestrator;
    use crate::use_cases::orchestrator::tests::MockProvider;
    use async_trait::async_trait;
    use facts_domain::{ErrorKind, fallback_pool};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;

    // -- Gated provider: blocks its fetch until released -----------------------

    struct GatedProvider {
        gate: Arc<Notify>,
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl FactProvider for GatedProvider {
        fn name(&self) -> &str {
            "gated"
        }

        fn base_url(&self) -> &str {
            "mock"
        }

        async fn is_available(&self, _cancel: &CancellationToken) -> bool {
            true
        }

        async fn get_number_fact(
            &self,
            request: &FactRequest,
            _cancel: &CancellationToken,
        ) -> Result<NumberFact, ProviderError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(NumberFact::new(request.number(), request.category(), "gated fact"))
        }
    }

    // -- Provider whose first fetch panics ----------------------------------------

    #[derive(Default)]
    struct PanicOnceProvider {
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl FactProvider for PanicOnceProvider {
        fn name(&self) -> &str {
            "panic-once"
        }

        fn base_url(&self) -> &str {
            "mock"
        }

        async fn is_available(&self, _cancel: &CancellationToken) -> bool {
            true
        }

        async fn get_number_fact(
            &self,
            request: &FactRequest,
            _cancel: &CancellationToken,
        ) -> Result<NumberFact, ProviderError> {
            if self.fetches.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("provider crashed");
            }
            Ok(NumberFact::new(request.number(), request.category(), "recovered"))
        }
    }

    // -- Helpers ---------------------------------------------------------------

    fn client_with(providers: Vec<Arc<dyn FactProvider>>, config: QueryConfig) -> FactQueryClient {
        let orchestrator = Arc::new(FactOrchestrator::new(providers));
        FactQueryClient::new(Arc::new(FactService::new(orchestrator)), config)
    }

    fn failing_chain() -> Vec<Arc<dyn FactProvider>> {
        vec![
            Arc::new(MockProvider::failing(
                "NumbersAPI",
                ProviderError::Http {
                    status: 500,
                    reason: "Internal Server Error".into(),
                },
            )),
            Arc::new(MockProvider::unavailable("MathFactsAPI")),
            Arc::new(MockProvider::failing(
                "LocalFacts",
                ProviderError::Timeout {
                    operation: "fetch",
                    after: Duration::from_secs(10),
                },
            )),
        ]
    }

    // -- Modes -----------------------------------------------------------------

    #[tokio::test]
    async fn resilient_mode_masks_total_failure() {
        let client = client_with(failing_chain(), QueryConfig::default());

        let fact = client
            .query_with_mode(FactRequest::new("42", FactCategory::Math), QueryMode::Resilient)
            .settled()
            .await
            .unwrap();

        assert_eq!(fact.category, FactCategory::Math);
        assert_eq!(fact.number, "42");
        assert!(fallback_pool(FactCategory::Math).contains(&fact.fact.as_str()));
        assert!(fact.timestamp().is_some());
    }

    #[tokio::test]
    async fn strict_mode_surfaces_last_failure_kind() {
        let client = client_with(failing_chain(), QueryConfig::default());

        let err = client
            .query_with_mode(FactRequest::new("42", FactCategory::Math), QueryMode::Strict)
            .settled()
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Timeout);
    }

    #[tokio::test]
    async fn resilient_random_request_gets_a_number() {
        let client = client_with(failing_chain(), QueryConfig::default());

        let fact = client
            .random_fact(FactCategory::Date, QueryMode::Resilient)
            .settled()
            .await
            .unwrap();

        let n: u32 = fact.number.parse().unwrap();
        assert!((1..=100).contains(&n));
        assert_eq!(fact.category, FactCategory::Date);
    }

    #[tokio::test]
    async fn success_is_timestamped() {
        let provider = MockProvider::ok("only", NumberFact::new("7", FactCategory::Trivia, "x"));
        let client = client_with(vec![Arc::new(provider)], QueryConfig::default());

        let fact = client
            .query(FactRequest::new("7", FactCategory::Trivia))
            .settled()
            .await
            .unwrap();

        assert!(fact.timestamp().is_some());
    }

    // -- Deduplication ---------------------------------------------------------

    #[tokio::test]
    async fn identical_concurrent_queries_share_one_execution() {
        let gate = Arc::new(Notify::new());
        let provider = Arc::new(GatedProvider {
            gate: gate.clone(),
            fetches: AtomicUsize::new(0),
        });
        let client = client_with(vec![provider.clone()], QueryConfig::default());
        let request = FactRequest::new("42", FactCategory::Trivia);

        let first = client.query(request.clone());
        let second = client.query(request.clone());
        assert!(first.state().is_pending());
        assert_eq!(client.in_flight(), 1);

        // Let the single task reach the gate, then release it
        while provider.fetches.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        gate.notify_one();

        let a = first.settled().await.unwrap();
        let b = second.settled().await.unwrap();
        assert_eq!(a, b);
        assert_eq!(provider.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn different_keys_run_separately() {
        let provider = Arc::new(MockProvider::ok(
            "only",
            NumberFact::new("1", FactCategory::Trivia, "x"),
        ));
        let client = client_with(vec![provider.clone()], QueryConfig::default());

        let a = client.query(FactRequest::new("1", FactCategory::Trivia));
        let b = client.query(FactRequest::new("1", FactCategory::Math));
        a.settled().await.unwrap();
        b.settled().await.unwrap();

        assert_eq!(provider.fetches.load(Ordering::SeqCst), 2);
    }

    // -- Cache -----------------------------------------------------------------

    #[tokio::test]
    async fn settled_success_is_served_from_cache() {
        let provider = Arc::new(MockProvider::ok(
            "only",
            NumberFact::new("13", FactCategory::Date, "x"),
        ));
        let client = client_with(vec![provider.clone()], QueryConfig::default());
        let request = FactRequest::new("13", FactCategory::Date);

        let first = client.query(request.clone()).settled().await.unwrap();
        while client.in_flight() > 0 {
            tokio::task::yield_now().await;
        }
        let second = client.query(request);

        assert_eq!(second.state(), QueryState::Success(first));
        assert_eq!(provider.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn random_requests_are_never_cached() {
        let provider = Arc::new(MockProvider::ok(
            "only",
            NumberFact::new("9", FactCategory::Math, "x"),
        ));
        let client = client_with(vec![provider.clone()], QueryConfig::default());

        client
            .random_fact(FactCategory::Math, QueryMode::Strict)
            .settled()
            .await
            .unwrap();
        while client.in_flight() > 0 {
            tokio::task::yield_now().await;
        }
        client
            .random_fact(FactCategory::Math, QueryMode::Strict)
            .settled()
            .await
            .unwrap();

        assert_eq!(provider.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn zero_ttl_disables_cache() {
        let provider = Arc::new(MockProvider::ok(
            "only",
            NumberFact::new("5", FactCategory::Trivia, "x"),
        ));
        let config = QueryConfig {
            cache_ttl: Duration::ZERO,
            ..Default::default()
        };
        let client = client_with(vec![provider.clone()], config);
        let request = FactRequest::new("5", FactCategory::Trivia);

        client.query(request.clone()).settled().await.unwrap();
        while client.in_flight() > 0 {
            tokio::task::yield_now().await;
        }
        client.query(request).settled().await.unwrap();

        assert_eq!(provider.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn fallback_facts_are_not_cached() {
        let client = client_with(failing_chain(), QueryConfig::default());
        let request = FactRequest::new("42", FactCategory::Trivia);

        client
            .query_with_mode(request.clone(), QueryMode::Resilient)
            .settled()
            .await
            .unwrap();
        while client.in_flight() > 0 {
            tokio::task::yield_now().await;
        }

        let err = client
            .query_with_mode(request, QueryMode::Strict)
            .settled()
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Timeout);
    }

    // -- Cancellation ----------------------------------------------------------

    #[tokio::test]
    async fn cancel_all_settles_strict_queries_with_error() {
        let client = client_with(
            vec![Arc::new(MockProvider::ok(
                "only",
                NumberFact::new("1", FactCategory::Trivia, "x"),
            ))],
            QueryConfig::default(),
        );
        client.cancel_all();

        let err = client
            .query_with_mode(FactRequest::new("1", FactCategory::Trivia), QueryMode::Strict)
            .settled()
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::ApiError);
        assert_eq!(err.message, "Request cancelled");
    }

    #[tokio::test]
    async fn cancel_all_is_not_masked_in_resilient_mode() {
        let client = client_with(failing_chain(), QueryConfig::default());
        client.cancel_all();

        let err = client
            .query_with_mode(FactRequest::new("1", FactCategory::Trivia), QueryMode::Resilient)
            .settled()
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::ApiError);
        assert_eq!(err.message, "Request cancelled");
    }

    // -- Crashed executions ----------------------------------------------------

    #[tokio::test]
    async fn crashed_query_releases_its_key() {
        let provider = Arc::new(PanicOnceProvider::default());
        let client = client_with(vec![provider.clone()], QueryConfig::default());
        let request = FactRequest::new("8", FactCategory::Math);

        let err = client
            .query_with_mode(request.clone(), QueryMode::Strict)
            .settled()
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unknown);
        assert_eq!(client.in_flight(), 0);

        let fact = client
            .query_with_mode(request, QueryMode::Strict)
            .settled()
            .await
            .unwrap();
        assert_eq!(fact.fact, "recovered");
        assert_eq!(provider.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn crashed_query_is_masked_in_resilient_mode() {
        let client = client_with(
            vec![Arc::new(PanicOnceProvider::default())],
            QueryConfig::default(),
        );

        let fact = client
            .query_with_mode(FactRequest::new("8", FactCategory::Math), QueryMode::Resilient)
            .settled()
            .await
            .unwrap();

        assert_eq!(fact.number, "8");
        assert!(fallback_pool(FactCategory::Math).contains(&fact.fact.as_str()));
    }

    // -- Category listing ------------------------------------------------------

    #[tokio::test]
    async fn facts_by_category_lists_the_pool() {
        let client = client_with(failing_chain(), QueryConfig::default());

        let facts = client.facts_by_category(FactCategory::Trivia);

        assert_eq!(facts.len(), 5);
        assert_eq!(facts[0].number, "1");
        assert_eq!(facts[4].number, "5");
        assert!(facts.iter().all(|f| f.timestamp().is_some()));
        assert_eq!(client.in_flight(), 0);
    }
}
