//! Library entry for marketiq exposing the search screen building blocks for integration tests.

pub mod app;
pub mod args;
pub mod debounce;
pub mod events;
pub mod history;
pub mod prefs;
pub mod state;
pub mod store;
pub mod suggest;
pub mod theme;
pub mod ui;
