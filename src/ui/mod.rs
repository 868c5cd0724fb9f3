//! Page widgets that react to single DOM events.

pub mod animations;
pub mod faq;
pub mod focus;
pub mod konami;
pub mod lazy;
pub mod loader;
pub mod menu;
pub mod scroll;
pub mod stats;
pub mod timing;
