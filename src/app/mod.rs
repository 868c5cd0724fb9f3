pub mod site;

pub use site::{PageLayout, Site};
