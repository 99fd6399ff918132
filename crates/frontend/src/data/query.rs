//! Explicit query cache and fetch lifecycle for metric payloads.
//!
//! Replaces an ambient global cache with a `QueryClient` owned by the view
//! layer: entries are keyed by `(domain, company id, filter)`, so a filter or
//! company change addresses a different entry and triggers a fresh fetch.
//!
//! Every fetch run by [`use_metrics_query`] carries a per-view sequence
//! token; a resolution whose token is no longer current is discarded, so
//! rapid navigation or filter changes supersede in-flight requests instead
//! of racing them.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use contracts::metrics::{MetricsDomain, MetricsFilter};

use super::provider::{MetricsProvider, ProviderError};

/// Cache key for one metrics fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryKey {
    pub domain: MetricsDomain,
    /// `None` for portfolio-wide queries.
    pub company_id: Option<String>,
    pub filter: MetricsFilter,
}

impl QueryKey {
    pub fn company(domain: MetricsDomain, company_id: String, filter: MetricsFilter) -> Self {
        Self {
            domain,
            company_id: Some(company_id),
            filter,
        }
    }

    pub fn portfolio(filter: MetricsFilter) -> Self {
        Self {
            domain: MetricsDomain::Portfolio,
            company_id: None,
            filter,
        }
    }
}

/// A view renders exactly one of these at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    /// Collapsed failure: views show one generic message, the detail is only
    /// carried for logging.
    Error(String),
    Ready(T),
}

/// App-wide query client: the injected provider plus the payload cache.
///
/// Payloads are stored as JSON values so one map serves every domain; they
/// round-trip through the same serde contracts the wire uses.
#[derive(Clone)]
pub struct QueryClient {
    provider: Arc<dyn MetricsProvider + Send + Sync>,
    cache: Arc<Mutex<HashMap<QueryKey, serde_json::Value>>>,
}

impl QueryClient {
    pub fn new(provider: Arc<dyn MetricsProvider + Send + Sync>) -> Self {
        Self {
            provider,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn provider(&self) -> Arc<dyn MetricsProvider + Send + Sync> {
        self.provider.clone()
    }

    pub fn cached(&self, key: &QueryKey) -> Option<serde_json::Value> {
        self.cache.lock().expect("query cache lock").get(key).cloned()
    }

    pub fn insert(&self, key: QueryKey, value: serde_json::Value) {
        self.cache.lock().expect("query cache lock").insert(key, value);
    }

    pub fn invalidate(&self, key: &QueryKey) {
        self.cache.lock().expect("query cache lock").remove(key);
    }

    pub fn clear(&self) {
        self.cache.lock().expect("query cache lock").clear();
    }
}

/// Reactive metrics query.
///
/// `key_fn` reads the reactive inputs (route param, filter signal); whenever
/// the key changes the hook re-runs: cache hit resolves synchronously,
/// otherwise the provider is called and the result cached. Stale resolutions
/// are dropped via the sequence token.
pub fn use_metrics_query<T, KeyFn, Fetch, Fut>(key_fn: KeyFn, fetch: Fetch) -> ReadSignal<QueryState<T>>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    KeyFn: Fn() -> QueryKey + Send + Sync + 'static,
    Fetch: Fn(Arc<dyn MetricsProvider + Send + Sync>, QueryKey) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ProviderError>> + 'static,
{
    let client = use_context::<QueryClient>().expect("QueryClient context not found");
    let (state, set_state) = signal(QueryState::<T>::Loading);
    let epoch = StoredValue::new(0u64);

    Effect::new(move |_| {
        let key = key_fn();
        let seq = epoch.get_value() + 1;
        epoch.set_value(seq);

        if let Some(cached) = client.cached(&key) {
            match serde_json::from_value::<T>(cached) {
                Ok(payload) => {
                    set_state.set(QueryState::Ready(payload));
                    return;
                }
                Err(err) => {
                    log::warn!("dropping undecodable cache entry for {:?}: {}", key, err);
                    client.invalidate(&key);
                }
            }
        }

        set_state.set(QueryState::Loading);

        let client = client.clone();
        let fetch = fetch.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch(client.provider(), key.clone()).await;
            if epoch.get_value() != seq {
                // Superseded by a newer navigation or filter change.
                return;
            }
            match result {
                Ok(payload) => {
                    match serde_json::to_value(&payload) {
                        Ok(value) => client.insert(key, value),
                        Err(err) => log::warn!("failed to cache payload for {:?}: {}", key, err),
                    }
                    set_state.set(QueryState::Ready(payload));
                }
                Err(err) => {
                    log::error!("metrics fetch failed for {:?}: {}", key, err);
                    set_state.set(QueryState::Error(err.to_string()));
                }
            }
        });
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock::MockMetricsProvider;
    use contracts::metrics::TimeRange;

    fn client() -> QueryClient {
        QueryClient::new(Arc::new(MockMetricsProvider::with_delay(0)))
    }

    fn key(domain: MetricsDomain, company: Option<&str>, range: TimeRange) -> QueryKey {
        QueryKey {
            domain,
            company_id: company.map(|c| c.to_string()),
            filter: MetricsFilter::new(range, "USD"),
        }
    }

    #[test]
    fn test_key_distinguishes_domain_company_and_filter() {
        let base = key(MetricsDomain::Overview, Some("comp_1"), TimeRange::Last90Days);
        assert_eq!(
            base,
            key(MetricsDomain::Overview, Some("comp_1"), TimeRange::Last90Days)
        );
        assert_ne!(base, key(MetricsDomain::Revenue, Some("comp_1"), TimeRange::Last90Days));
        assert_ne!(base, key(MetricsDomain::Overview, Some("comp_2"), TimeRange::Last90Days));
        assert_ne!(base, key(MetricsDomain::Overview, Some("comp_1"), TimeRange::Last30Days));
        assert_ne!(base, key(MetricsDomain::Portfolio, None, TimeRange::Last90Days));
    }

    #[test]
    fn test_cache_insert_hit_and_invalidate() {
        let client = client();
        let key = key(MetricsDomain::Portfolio, None, TimeRange::Last12Months);
        assert_eq!(client.cached(&key), None);

        client.insert(key.clone(), serde_json::json!({ "totalArr": 5_000_000.0 }));
        assert!(client.cached(&key).is_some());

        // A different filter addresses a different entry.
        let other = QueryKey::portfolio(MetricsFilter::new(TimeRange::Last30Days, "USD"));
        assert_eq!(client.cached(&other), None);

        client.invalidate(&key);
        assert_eq!(client.cached(&key), None);
    }

    #[test]
    fn test_clear_empties_every_entry() {
        let client = client();
        client.insert(
            key(MetricsDomain::Overview, Some("comp_1"), TimeRange::Last90Days),
            serde_json::json!(1),
        );
        client.insert(
            key(MetricsDomain::Billing, Some("comp_2"), TimeRange::Last30Days),
            serde_json::json!(2),
        );
        client.clear();
        assert_eq!(
            client.cached(&key(MetricsDomain::Overview, Some("comp_1"), TimeRange::Last90Days)),
            None
        );
    }
}
