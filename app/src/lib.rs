#![recursion_limit = "256"]

pub mod components;
pub mod debounce;
pub mod error;
pub mod loader;
pub mod search;
pub mod store;
pub mod types;
pub mod view_model;
