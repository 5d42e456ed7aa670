// web_app/model/mod.rs - Shared data models for client and server
//
// These types are used throughout the application for type-safe
// communication between the browser and the server functions.
// Every search page works against the same small vocabulary:
// a Source, a SearchQuery, and a SearchOutcome.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Integrated OSINT data source
///
/// One variant per dashboard page. Each source carries a URL slug,
/// a display label, the search types it accepts, and the preferred
/// column ordering for its result table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    LeakCheck,
    HackCheck,
    Npd,
    Snusbase,
    IntelVault,
    Ulp,
    CallerId,
    PhoneLookup,
    PropertyRecords,
    TelegramScanner,
    BreachDirectory,
    DomainIntel,
}

impl Source {
    /// Every integrated source, in sidebar order.
    pub const ALL: [Source; 12] = [
        Source::LeakCheck,
        Source::HackCheck,
        Source::Npd,
        Source::Snusbase,
        Source::IntelVault,
        Source::Ulp,
        Source::CallerId,
        Source::PhoneLookup,
        Source::PropertyRecords,
        Source::TelegramScanner,
        Source::BreachDirectory,
        Source::DomainIntel,
    ];

    /// URL slug, used both for routing and for export file names.
    pub fn slug(self) -> &'static str {
        match self {
            Source::LeakCheck => "leakcheck",
            Source::HackCheck => "hackcheck",
            Source::Npd => "npd",
            Source::Snusbase => "snusbase",
            Source::IntelVault => "intelvault",
            Source::Ulp => "ulp",
            Source::CallerId => "callerid",
            Source::PhoneLookup => "phonelookup",
            Source::PropertyRecords => "property",
            Source::TelegramScanner => "telegram",
            Source::BreachDirectory => "breachdirectory",
            Source::DomainIntel => "domainintel",
        }
    }

    /// Reverse of [`Source::slug`], used by routing.
    pub fn from_slug(slug: &str) -> Option<Source> {
        Source::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// Human-readable page title.
    pub fn label(self) -> &'static str {
        match self {
            Source::LeakCheck => "LeakCheck",
            Source::HackCheck => "HackCheck",
            Source::Npd => "NPD Breach",
            Source::Snusbase => "Snusbase",
            Source::IntelVault => "IntelVault",
            Source::Ulp => "ULP Lookup",
            Source::CallerId => "Caller ID",
            Source::PhoneLookup => "Phone Lookup",
            Source::PropertyRecords => "Property Records",
            Source::TelegramScanner => "Telegram Scanner",
            Source::BreachDirectory => "Breach Directory",
            Source::DomainIntel => "Domain Intel",
        }
    }

    /// Search types this source accepts. The first entry is the
    /// default selection on its page.
    pub fn search_types(self) -> &'static [SearchType] {
        use SearchType::*;
        match self {
            Source::LeakCheck => &[Email, Username, Phone, Domain, Password],
            Source::HackCheck => &[Email, Username, Domain, Ip],
            Source::Npd => &[Name, Address, Phone],
            Source::Snusbase => &[Email, Username, Password, Hash, Ip],
            Source::IntelVault => &[Email, Username, Phone, Name],
            Source::Ulp => &[Domain, Email, Query],
            Source::CallerId => &[Phone],
            Source::PhoneLookup => &[Phone, Name],
            Source::PropertyRecords => &[Address, Name],
            Source::TelegramScanner => &[Username, Phone, Query],
            Source::BreachDirectory => &[Email, Username, Phone],
            Source::DomainIntel => &[Domain, Ip],
        }
    }

    /// Preferred column ordering for the result table. Columns found in
    /// the response but not listed here follow in first-seen order.
    pub fn preferred_columns(self) -> &'static [&'static str] {
        match self {
            Source::LeakCheck => &["email", "username", "password", "breach", "date"],
            Source::HackCheck => &["email", "username", "password", "hash", "breach"],
            Source::Npd => &["name", "address", "city", "state", "zip", "phone", "ssn"],
            Source::Snusbase => &["email", "username", "password", "hash", "salt", "breach"],
            Source::IntelVault => &["email", "username", "phone", "name", "breach"],
            Source::Ulp => &["url", "login", "password"],
            Source::CallerId => &["phone", "name", "carrier", "line_type", "location"],
            Source::PhoneLookup => &["phone", "name", "address", "carrier"],
            Source::PropertyRecords => &["address", "owner", "value", "year_built", "sale_date"],
            Source::TelegramScanner => &["username", "user_id", "group", "message", "date"],
            Source::BreachDirectory => &["email", "password", "sha1", "breach"],
            Source::DomainIntel => &["domain", "ip", "registrar", "created", "expires"],
        }
    }

    /// Optional boolean toggles this source's page exposes, as
    /// (key, label) pairs. Keys are forwarded verbatim to the provider.
    pub fn options(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Source::LeakCheck | Source::Snusbase => &[("wildcard", "Wildcard match")],
            Source::Ulp => &[("exact", "Exact domain only")],
            Source::TelegramScanner => &[("include_media", "Include media posts")],
            _ => &[],
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Kind of value being searched for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchType {
    #[default]
    Email,
    Username,
    Phone,
    Domain,
    Ip,
    Name,
    Address,
    Password,
    Hash,
    Query,
}

impl SearchType {
    /// Wire value sent to upstream providers.
    pub fn slug(self) -> &'static str {
        match self {
            SearchType::Email => "email",
            SearchType::Username => "username",
            SearchType::Phone => "phone",
            SearchType::Domain => "domain",
            SearchType::Ip => "ip",
            SearchType::Name => "name",
            SearchType::Address => "address",
            SearchType::Password => "password",
            SearchType::Hash => "hash",
            SearchType::Query => "query",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchType::Email => "Email",
            SearchType::Username => "Username",
            SearchType::Phone => "Phone",
            SearchType::Domain => "Domain",
            SearchType::Ip => "IP Address",
            SearchType::Name => "Name",
            SearchType::Address => "Address",
            SearchType::Password => "Password",
            SearchType::Hash => "Hash",
            SearchType::Query => "Free text",
        }
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single search request as entered on a page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub source: Source,
    pub text: String,
    pub search_type: SearchType,
    pub options: BTreeMap<String, bool>,
}

impl SearchQuery {
    pub fn new(source: Source, text: impl Into<String>) -> Self {
        let search_type = source.search_types().first().copied().unwrap_or_default();
        SearchQuery {
            source,
            text: text.into(),
            search_type,
            options: BTreeMap::new(),
        }
    }

    /// Local validation, performed before any network call.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.text.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(())
    }
}

/// Errors surfaced by the search pipeline
///
/// Serializable so server functions can hand them to the client intact.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SearchError {
    #[error("Please enter a query")]
    EmptyQuery,

    #[error("Subscription required: {message}")]
    SubscriptionRequired { message: String },

    #[error("Provider error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unreadable provider response: {0}")]
    Decode(String),
}

/// Classify a non-2xx upstream response
///
/// Providers answer failures with a JSON body `{ "error": "..." }`.
/// An HTTP 403 whose error text mentions "subscription" is a distinct
/// case: the page renders an upsell panel instead of the error panel.
pub fn classify_upstream(status: u16, body: &str) -> SearchError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("provider returned HTTP {status}")
            } else {
                trimmed.to_string()
            }
        });

    if status == 403 && message.to_lowercase().contains("subscription") {
        SearchError::SubscriptionRequired { message }
    } else {
        SearchError::Upstream { status, message }
    }
}

/// Decoded result set for one search
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceResults {
    pub source: Source,
    pub query: String,
    pub records: Vec<Map<String, Value>>,
    pub fetched_at: chrono::DateTime<chrono::Utc>,
}

impl SourceResults {
    pub fn new(source: Source, query: impl Into<String>, records: Vec<Map<String, Value>>) -> Self {
        SourceResults {
            source,
            query: query.into(),
            records,
            fetched_at: chrono::Utc::now(),
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// Outcome of a search, as returned by the server function
///
/// The subscription case is a value rather than an error so the client
/// can render it as a dedicated UI state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    Results(SourceResults),
    SubscriptionRequired { message: String },
}

// Wrapper keys providers use around their actual payload, probed in order.
const WRAPPER_KEYS: [&str; 7] = [
    "data", "result", "results", "records", "entries", "items", "sources",
];

/// Flatten an arbitrary provider payload into table-ready records
///
/// Response shapes vary per source: a bare array of records, a wrapper
/// object (`data`, `results`, ...), a map keyed by breach name, or a
/// single object. Anything scalar becomes a one-row `{"value": ...}`
/// record so nothing is silently dropped.
pub fn extract_records(payload: &Value) -> Vec<Map<String, Value>> {
    match payload {
        Value::Array(items) => items.iter().flat_map(extract_records).collect(),
        Value::Object(map) => {
            for key in WRAPPER_KEYS {
                if let Some(inner) = map.get(key) {
                    if inner.is_array() || inner.is_object() {
                        return extract_records(inner);
                    }
                }
            }

            // A map whose values are all arrays is a breach-name index:
            // flatten each bucket and tag its rows with the breach name.
            if !map.is_empty() && map.values().all(Value::is_array) {
                let mut records = Vec::new();
                for (breach, bucket) in map {
                    for mut record in extract_records(bucket) {
                        record
                            .entry("breach".to_string())
                            .or_insert_with(|| Value::String(breach.clone()));
                        records.push(record);
                    }
                }
                return records;
            }

            vec![map.clone()]
        }
        Value::Null => Vec::new(),
        scalar => {
            let mut record = Map::new();
            record.insert("value".to_string(), scalar.clone());
            vec![record]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_slug_roundtrip() {
        for source in Source::ALL {
            assert_eq!(Source::from_slug(source.slug()), Some(source));
        }
        assert_eq!(Source::from_slug("nope"), None);
    }

    #[test]
    fn test_every_source_has_search_types() {
        for source in Source::ALL {
            assert!(
                !source.search_types().is_empty(),
                "{} must accept at least one search type",
                source
            );
            assert!(
                !source.preferred_columns().is_empty(),
                "{} must declare preferred columns",
                source
            );
        }
    }

    #[test]
    fn test_query_validation() {
        let query = SearchQuery::new(Source::LeakCheck, "user@example.com");
        assert!(query.validate().is_ok());

        let empty = SearchQuery::new(Source::LeakCheck, "   ");
        assert_eq!(empty.validate(), Err(SearchError::EmptyQuery));
    }

    #[test]
    fn test_default_search_type_is_first_allowed() {
        let query = SearchQuery::new(Source::CallerId, "15555550100");
        assert_eq!(query.search_type, SearchType::Phone);
    }

    #[test]
    fn test_classify_subscription() {
        let err = classify_upstream(403, r#"{"error":"Active subscription required"}"#);
        assert_eq!(
            err,
            SearchError::SubscriptionRequired {
                message: "Active subscription required".to_string()
            }
        );
    }

    #[test]
    fn test_classify_403_without_subscription_text() {
        let err = classify_upstream(403, r#"{"error":"forbidden"}"#);
        assert_eq!(
            err,
            SearchError::Upstream {
                status: 403,
                message: "forbidden".to_string()
            }
        );
    }

    #[test]
    fn test_classify_non_json_body() {
        let err = classify_upstream(500, "upstream exploded");
        assert_eq!(
            err,
            SearchError::Upstream {
                status: 500,
                message: "upstream exploded".to_string()
            }
        );
    }

    #[test]
    fn test_classify_empty_body() {
        let err = classify_upstream(502, "");
        match err {
            SearchError::Upstream { status, message } => {
                assert_eq!(status, 502);
                assert!(message.contains("502"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_extract_records_bare_array() {
        let payload = json!([{"email": "a@b.c"}, {"email": "d@e.f"}]);
        let records = extract_records(&payload);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["email"], "a@b.c");
    }

    #[test]
    fn test_extract_records_wrapped() {
        let payload = json!({"success": true, "data": [{"phone": "123"}]});
        let records = extract_records(&payload);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["phone"], "123");
    }

    #[test]
    fn test_extract_records_breach_map() {
        let payload = json!({
            "results": {
                "MegaBreach2021": [{"email": "a@b.c"}],
                "OtherDump": [{"email": "d@e.f", "breach": "kept"}]
            }
        });
        let mut records = extract_records(&payload);
        records.sort_by_key(|r| r["email"].as_str().unwrap().to_string());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["breach"], "MegaBreach2021");
        // An existing breach field wins over the map key.
        assert_eq!(records[1]["breach"], "kept");
    }

    #[test]
    fn test_extract_records_single_object() {
        let payload = json!({"owner": "J. Doe", "value": 250000});
        let records = extract_records(&payload);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["owner"], "J. Doe");
    }

    #[test]
    fn test_extract_records_scalar_fallback() {
        let payload = json!(["https://a.b:user:pass", "plainline"]);
        let records = extract_records(&payload);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["value"], "https://a.b:user:pass");
    }

    #[test]
    fn test_extract_records_null() {
        assert!(extract_records(&Value::Null).is_empty());
    }

    #[test]
    fn test_outcome_serde_roundtrip() {
        let outcome = SearchOutcome::Results(SourceResults::new(
            Source::HackCheck,
            "a@b.c",
            extract_records(&json!([{"email": "a@b.c"}])),
        ));
        let encoded = serde_json::to_string(&outcome).unwrap();
        let decoded: SearchOutcome = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, outcome);
    }
}
