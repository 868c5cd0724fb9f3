// Adapters layer: concrete `Page` implementations.

pub mod console;
pub mod memory;

pub use console::ConsolePage;
pub use memory::MemoryPage;
