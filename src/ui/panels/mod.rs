// DeedFinder - ui/panels/mod.rs

pub mod diagnostics;
pub mod results;
pub mod search_form;
pub mod summary;
