// DeedFinder - platform/mod.rs
//
// Platform abstraction layer: configuration directories and spreadsheet I/O.
// Dependencies: core model types, directories, calamine.
// Must NOT depend on: app, ui.

pub mod config;
pub mod workbook;
