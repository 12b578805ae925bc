//! Client code for pingward.
//!
//! This crate provides URL validation, the outbound reachability probe,
//! and the cache-fronted liveness checker shared by the server.

pub mod checker;
pub mod probe;

pub use checker::LivenessChecker;
pub use probe::{ProbeClient, ProbeConfig, ProbeOutcome, UrlError, validate};
