//! Browser glue: credential storage, snapshot persistence, configuration,
//! and shared auth redirect behavior.

pub mod auth;
pub mod config;
pub mod storage;
pub mod token_store;
