// ============================================================================
// Interfaces Module
// Seams between the economy core and the surrounding game
// ============================================================================

mod event_handler;

pub use event_handler::{EconomyEvent, EventHandler, LoggingEventHandler, NoOpEventHandler};
