// web_app/api/config.rs - Upstream provider configuration
//
// Providers are configured through environment variables, loaded via
// dotenv in main.rs:
//   TRACKED_<PROVIDER>_API_KEY   credential for the provider
//   TRACKED_<PROVIDER>_BASE_URL  override, mainly for tests
// A missing key is not an error at startup; the search fails with a
// provider error only when that source is actually queried.

use std::env;

use crate::web_app::model::Source;

/// Resolved configuration for one provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl ProviderConfig {
    pub fn has_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// Environment variable prefix for a source, e.g. `TRACKED_LEAKCHECK`.
pub fn env_prefix(source: Source) -> String {
    format!("TRACKED_{}", source.slug().to_uppercase())
}

/// Default upstream endpoint for a source.
pub fn default_base_url(source: Source) -> &'static str {
    match source {
        Source::LeakCheck => "https://leakcheck.io/api/v2",
        Source::HackCheck => "https://api.hackcheck.io/search",
        Source::Npd => "https://api.npdbreach.com/v1",
        Source::Snusbase => "https://api.snusbase.com/data",
        Source::IntelVault => "https://api.intelvault.net/v1",
        Source::Ulp => "https://api.ulplookup.io/v1",
        Source::CallerId => "https://api.calleridapi.com/v2",
        Source::PhoneLookup => "https://api.phonelookup.dev/v1",
        Source::PropertyRecords => "https://api.propertyrecords.io/v1",
        Source::TelegramScanner => "https://api.tgscan.dev/v1",
        Source::BreachDirectory => "https://breachdirectory.org/api",
        Source::DomainIntel => "https://api.domainintel.io/v1",
    }
}

/// Read the configuration for one provider from the environment.
pub fn provider_config(source: Source) -> ProviderConfig {
    let prefix = env_prefix(source);
    let api_key = env::var(format!("{prefix}_API_KEY")).ok();
    let base_url = env::var(format!("{prefix}_BASE_URL"))
        .unwrap_or_else(|_| default_base_url(source).to_string());
    ProviderConfig { api_key, base_url }
}

/// Sources that currently have an API key configured.
///
/// Logged at startup so a misconfigured deployment is visible early.
pub fn configured_sources() -> Vec<Source> {
    Source::ALL
        .into_iter()
        .filter(|s| provider_config(*s).has_key())
        .collect()
}
