// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::web_app::model::*;

/// Run a search against one integrated source.
///
/// This is the `/api/<source>` boundary: the client posts the query and
/// the server dispatches to the provider layer. A subscription-gated
/// provider answer comes back as a [`SearchOutcome`] value so the page
/// can render the upsell state instead of a generic error.
#[server(SearchSource, "/api")]
pub async fn search_source(
    source: Source,
    query: String,
    search_type: SearchType,
    options: BTreeMap<String, bool>,
) -> Result<SearchOutcome, ServerFnError> {
    use crate::web_app::api::providers;

    let request_id = uuid::Uuid::new_v4();
    tracing::info!(
        %request_id,
        source = source.slug(),
        search_type = search_type.slug(),
        "search request"
    );

    let search = SearchQuery {
        source,
        text: query,
        search_type,
        options,
    };
    // Pages validate before submitting; re-check here since the route
    // is reachable without them.
    search
        .validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    match providers::run_search(&search).await {
        Ok(SearchOutcome::Results(results)) => {
            tracing::info!(
                %request_id,
                records = results.record_count(),
                "search successful"
            );
            Ok(SearchOutcome::Results(results))
        }
        Ok(other) => Ok(other),
        Err(SearchError::SubscriptionRequired { message }) => {
            tracing::info!(%request_id, "subscription required");
            Ok(SearchOutcome::SubscriptionRequired { message })
        }
        Err(e) => {
            tracing::error!(%request_id, error = %e, "search failed");
            Err(ServerFnError::new(e.to_string()))
        }
    }
}
