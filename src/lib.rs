pub mod adapters;
pub mod analytics;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod platform;
pub mod ui;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SiteConfig;

pub use adapters::{ConsolePage, MemoryPage};
pub use app::{PageLayout, Site};
pub use core::pipeline::{SubmissionPipeline, SubmissionState};
pub use domain::model::{FormSnapshot, SubmissionReceipt};
pub use utils::error::{Result, SiteError, SubmissionError, ValidationError};
