//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod demo;
pub mod directory;
pub mod dispatcher;
pub mod logging;
pub mod menu;

pub use demo::{DemoSeed, DemoService};
pub use directory::{Directory, UserHandle};
pub use dispatcher::{parse_amount, Dispatcher};
pub use logging::{EntryPoint, LogEntry, LogEvent, LogStats, LoggingService};
pub use menu::{transition, Event, MainMenuChoice, Menu, SessionState, UserMenuChoice};
