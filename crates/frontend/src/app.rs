use std::sync::Arc;

use leptos::prelude::*;

use crate::data::mock::MockMetricsProvider;
use crate::data::query::QueryClient;
use crate::routes::AppRoutes;

#[component]
pub fn App() -> impl IntoView {
    // Provide the query client to the whole app via context.
    // Mock provider today; swap in `HttpMetricsProvider` once a backend exists.
    provide_context(QueryClient::new(Arc::new(MockMetricsProvider::new())));

    view! {
        <AppRoutes />
    }
}
