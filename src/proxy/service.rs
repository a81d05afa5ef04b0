//! Executor service abstraction layer.
//!
//! Routes hold the executor as a trait object so tests can script outcomes
//! without touching the network.

use super::executor::{prepare_spec, HttpExecutor};
use super::outcome::Outcome;
use super::types::{HeaderEntry, HttpMethod, RequestSpec};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Trait for services that execute a resolved request.
pub trait RequestExecutor: Send + Sync {
    /// Executes `spec` once and returns its normalized outcome.
    fn execute(&self, spec: RequestSpec) -> Pin<Box<dyn Future<Output = Outcome> + Send + '_>>;
}

impl RequestExecutor for HttpExecutor {
    fn execute(&self, spec: RequestSpec) -> Pin<Box<dyn Future<Output = Outcome> + Send + '_>> {
        Box::pin(HttpExecutor::execute(self, spec))
    }
}

impl HttpExecutor {
    /// Creates a new `HttpExecutor` wrapped in an `Arc`.
    pub fn arc() -> Result<Arc<Self>, reqwest::Error> {
        Ok(Arc::new(Self::new()?))
    }
}

/// Extension trait for `RequestExecutor` that works from raw editor input.
pub trait RequestExecutorExt: RequestExecutor {
    /// Normalizes headers, resolves the body, then executes.
    fn execute_input(
        &self,
        url: &str,
        method: HttpMethod,
        headers: &[HeaderEntry],
        raw_body: &str,
    ) -> Pin<Box<dyn Future<Output = Outcome> + Send + '_>> {
        self.execute(prepare_spec(url, method, headers, raw_body))
    }
}

impl<T: RequestExecutor + ?Sized> RequestExecutorExt for T {}
