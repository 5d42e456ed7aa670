// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - SourceSearchPage: the generic search page, instantiated per source

pub mod search;

// Re-export page components
pub use search::SourceSearchPage;
