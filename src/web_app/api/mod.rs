// web_app/api/mod.rs - API module for server-side logic
//
// This module contains the upstream provider calls and their
// configuration. It never compiles into the WASM bundle; the gate
// lives in web_app/mod.rs.

pub mod config;
pub mod providers;
