// DeedFinder - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, chrono, serde, and walkdir/glob for
// directory listing only.
// Must NOT depend on: ui, platform, app, or spreadsheet parsing.

pub mod aggregate;
pub mod discovery;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod schema;
