// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Badge, Modal, Loading, etc.)
// - search.rs: Search-related components (SearchBar, ResultsTable, etc.)

pub mod common;
pub mod search;

// Re-export commonly used components for convenience
pub use common::*;
pub use search::*;
