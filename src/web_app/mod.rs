// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: shared data types (used by both client and server)
// - results.rs: pure result-table derivation (filter, columns, paging)
// - export.rs: pure export rendering (json/csv/user:pass formats)
// - ulp.rs: heuristic URL:login:password line parser
// - server_fns.rs: server function declarations (both client and server)
// - api/: upstream provider calls and configuration (server only)
// - components/: reusable UI components (both SSR and hydrate)
// - pages/: page-level components (both SSR and hydrate)
// - app.rs: root application component with routing (both SSR and hydrate)

use cfg_if::cfg_if;

pub mod model;

// Pure derivation modules - shared by client, server, and tests
pub mod export;
pub mod results;
pub mod ulp;

cfg_if! {
    // Everything with a Leptos surface compiles for both server and
    // client. server_fns must be in both: the #[server] macro generates
    // the implementation on ssr and an HTTP stub on hydrate.
    if #[cfg(any(feature = "ssr", feature = "hydrate"))] {
        pub mod server_fns;
        pub mod components;
        pub mod pages;
        pub mod app;

        // Re-export main app component for convenience
        pub use app::App;
    }
}

cfg_if! {
    // Upstream provider calls never compile into the WASM bundle.
    if #[cfg(feature = "provider-tools")] {
        pub mod api;
    }
}
