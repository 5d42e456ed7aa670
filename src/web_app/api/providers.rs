// web_app/api/providers.rs - Upstream OSINT provider calls
//
// One shared reqwest client behind a OnceLock, one request per search.
// Lookup-style providers take GET with query parameters; the breach
// databases take POST with a JSON body. Non-2xx answers run through
// the classifier in the model so the 403/"subscription" case surfaces
// as its own outcome.

use std::sync::OnceLock;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::web_app::api::config::{self, ProviderConfig};
use crate::web_app::model::{
    classify_upstream, extract_records, SearchError, SearchOutcome, SearchQuery, Source,
    SourceResults,
};
use crate::web_app::ulp;

// Every upstream request is bounded; providers occasionally hang.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// The process-wide upstream HTTP client.
pub fn http_client() -> &'static reqwest::Client {
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("tracked/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    })
}

// JSON body for the POST-style providers: { query, type, ...options }.
#[derive(Serialize)]
struct UpstreamRequest<'a> {
    query: &'a str,
    #[serde(rename = "type")]
    search_type: &'a str,
    #[serde(flatten)]
    options: &'a std::collections::BTreeMap<String, bool>,
}

// Lookup-style providers queried with GET parameters.
fn uses_get(source: Source) -> bool {
    matches!(
        source,
        Source::CallerId
            | Source::PhoneLookup
            | Source::PropertyRecords
            | Source::DomainIntel
            | Source::BreachDirectory
    )
}

/// Execute one search against the query's source.
pub async fn run_search(query: &SearchQuery) -> Result<SearchOutcome, SearchError> {
    let cfg = config::provider_config(query.source);
    let payload = fetch_payload(query, &cfg).await?;

    let mut records = extract_records(&payload);
    // ULP providers return flat dump lines; parse them into
    // url/login/password records before they reach the table.
    if query.source == Source::Ulp {
        records = ulp::refine_records(records);
    }

    tracing::debug!(
        source = query.source.slug(),
        records = records.len(),
        "provider response decoded"
    );

    Ok(SearchOutcome::Results(SourceResults::new(
        query.source,
        query.text.clone(),
        records,
    )))
}

async fn fetch_payload(query: &SearchQuery, cfg: &ProviderConfig) -> Result<Value, SearchError> {
    let client = http_client();
    let url = format!("{}/search", cfg.base_url.trim_end_matches('/'));

    let mut request = if uses_get(query.source) {
        client.get(&url).query(&[
            ("q", query.text.as_str()),
            ("type", query.search_type.slug()),
        ])
    } else {
        client.post(&url).json(&UpstreamRequest {
            query: &query.text,
            search_type: query.search_type.slug(),
            options: &query.options,
        })
    };

    if let Some(key) = cfg.api_key.as_deref().filter(|k| !k.is_empty()) {
        request = request.header("X-Api-Key", key);
    }

    let response = request
        .send()
        .await
        .map_err(|e| SearchError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| SearchError::Transport(e.to_string()))?;

    if !(200..300).contains(&status) {
        return Err(classify_upstream(status, &body));
    }

    serde_json::from_str(&body).map_err(|e| SearchError::Decode(e.to_string()))
}
