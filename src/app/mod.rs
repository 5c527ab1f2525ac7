// DeedFinder - app/mod.rs
//
// Application layer: per-submission pipeline orchestration and state.
// Dependencies: core layer, platform workbook loader.
// Must NOT depend on: ui.

pub mod search;
pub mod state;
