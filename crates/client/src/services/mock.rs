//! In-memory backend double for accessor tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use invoicr_core::auth::{self, AuthClient, AuthError, AuthSession, AuthUser, Credentials};
use invoicr_core::factory::{ClientFactory, InitError};
use invoicr_core::storage::{self, DataClient, Filter, Order, StorageError};
use serde_json::Value;

#[derive(Default)]
struct Inner {
    user: Option<AuthUser>,
    user_error: Option<AuthError>,
    single: Option<storage::Result<Value>>,
    many: Option<storage::Result<Vec<Value>>>,
    queries: Vec<(String, Filter)>,
}

/// Scripted backend. Clones share state so tests can inspect it afterwards.
#[derive(Clone, Default)]
pub(crate) struct MockBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MockBackend {
    pub(crate) fn anonymous() -> Self {
        Self::default()
    }

    pub(crate) fn signed_in(user_id: &str) -> Self {
        let backend = Self::default();
        backend.inner.lock().unwrap().user = Some(AuthUser::with_id(user_id));
        backend
    }

    pub(crate) fn with_user_error(self, error: AuthError) -> Self {
        self.inner.lock().unwrap().user_error = Some(error);
        self
    }

    pub(crate) fn with_single(self, result: storage::Result<Value>) -> Self {
        self.inner.lock().unwrap().single = Some(result);
        self
    }

    pub(crate) fn with_many(self, result: storage::Result<Vec<Value>>) -> Self {
        self.inner.lock().unwrap().many = Some(result);
        self
    }

    pub(crate) fn query_count(&self) -> usize {
        self.inner.lock().unwrap().queries.len()
    }

    pub(crate) fn last_query(&self) -> Option<(String, Filter)> {
        self.inner.lock().unwrap().queries.last().cloned()
    }

    fn record(&self, table: &str, filter: &Filter) {
        self.inner
            .lock()
            .unwrap()
            .queries
            .push((table.to_string(), filter.clone()));
    }
}

#[async_trait]
impl AuthClient for MockBackend {
    async fn sign_in_with_password(&self, _credentials: &Credentials) -> auth::Result<AuthSession> {
        Err(AuthError::Transport("not scripted".to_string()))
    }

    async fn current_user(&self) -> auth::Result<Option<AuthUser>> {
        let inner = self.inner.lock().unwrap();
        match &inner.user_error {
            Some(error) => Err(error.clone()),
            None => Ok(inner.user.clone()),
        }
    }
}

#[async_trait]
impl DataClient for MockBackend {
    async fn select_single(&self, table: &str, filter: &Filter) -> storage::Result<Value> {
        self.record(table, filter);
        self.inner
            .lock()
            .unwrap()
            .single
            .clone()
            .unwrap_or_else(|| Err(StorageError::ConnectionFailed("not scripted".to_string())))
    }

    async fn select_many(
        &self,
        table: &str,
        filter: &Filter,
        _order: Option<&Order>,
    ) -> storage::Result<Vec<Value>> {
        self.record(table, filter);
        self.inner
            .lock()
            .unwrap()
            .many
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Hands out clones of one [`MockBackend`] and counts how many were made.
#[derive(Clone)]
pub(crate) struct MockFactory {
    backend: MockBackend,
    created: Arc<AtomicUsize>,
    failure: Option<InitError>,
}

impl MockFactory {
    pub(crate) fn new(backend: MockBackend) -> Self {
        Self {
            backend,
            created: Arc::new(AtomicUsize::new(0)),
            failure: None,
        }
    }

    pub(crate) fn failing(mut self, error: InitError) -> Self {
        self.failure = Some(error);
        self
    }

    pub(crate) fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClientFactory for MockFactory {
    type Client = MockBackend;

    async fn create(&self) -> Result<MockBackend, InitError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(self.backend.clone())
    }
}
