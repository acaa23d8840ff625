//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The session
//! dispatcher depends only on these traits, not on a real terminal.

mod console;

pub use console::{Console, Output};
