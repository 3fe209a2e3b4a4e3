//! Cached query results, refreshed after the mutations that affect them.

use std::fmt;
use std::future::Future;

use tokio::sync::RwLock;

/// Identifies a cached query, e.g. `Poll/all/localnet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryKey {
    pub entity: &'static str,
    pub scope: &'static str,
    pub cluster: String,
}

impl QueryKey {
    pub fn all(entity: &'static str, cluster: impl Into<String>) -> Self {
        Self {
            entity,
            scope: "all",
            cluster: cluster.into(),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.entity, self.scope, self.cluster)
    }
}

pub struct QueryCache<T> {
    key: QueryKey,
    value: RwLock<Option<T>>,
}

impl<T: Clone> QueryCache<T> {
    pub fn new(key: QueryKey) -> Self {
        Self {
            key,
            value: RwLock::new(None),
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Returns the cached value, running `fetch` only on a miss.
    pub async fn get_or_fetch<F, Fut, E>(&self, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.value.read().await.as_ref() {
            return Ok(value.clone());
        }
        self.refetch(fetch).await
    }

    /// Runs `fetch` and replaces the cached value. A failed fetch leaves the
    /// previous value in place.
    pub async fn refetch<F, Fut, E>(&self, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let value = fetch().await?;
        *self.value.write().await = Some(value.clone());
        tracing::debug!(query = %self.key, "Query refetched");
        Ok(value)
    }

    #[cfg(test)]
    pub async fn invalidate(&self) {
        *self.value.write().await = None;
    }

    #[cfg(test)]
    pub async fn cached(&self) -> Option<T> {
        self.value.read().await.clone()
    }
}
