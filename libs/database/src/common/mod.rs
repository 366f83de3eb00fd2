//! Common utilities shared across all database implementations

pub mod retry;

pub use retry::{RetryConfig, retry, retry_with_backoff};
