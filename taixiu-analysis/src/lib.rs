pub mod classify;
pub mod config;
pub mod engine;
pub mod histogram;
pub mod predict;
pub mod recency;
pub mod streak;
