//! Repository implementations
//!
//! Implementations of the `EventRepository` trait defined in hook-core.

mod error;
mod event;
mod memory;

pub use event::PgEventRepository;
pub use memory::MemoryEventRepository;
