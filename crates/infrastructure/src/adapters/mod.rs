//! Port adapters.

mod memory_ui;
mod system_clock;

pub use memory_ui::{ElementState, MemoryUi};
pub use system_clock::SystemClock;
