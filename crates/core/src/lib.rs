//! Core types and shared functionality for pingward.
//!
//! This crate provides:
//! - Liveness check result types and their wire format
//! - Cache abstraction with an in-memory TTL backend
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod check;
pub mod config;
pub mod error;

pub use cache::{Cache, CacheEntry, MemoryCache};
pub use check::{CheckResult, CheckStatus};
pub use config::AppConfig;
pub use error::Error;
