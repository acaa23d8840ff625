//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - Scripted console (queued input lines) for tests and replays
//! - Demo data provider for onboarding
//!
//! The interactive terminal adapter lives in the CLI crate.

pub mod demo;
pub mod scripted;
