pub mod compose;
pub mod cooldown;
pub mod form;
pub mod notify;
pub mod pipeline;

pub use crate::domain::model::{FormSnapshot, SubmissionReceipt, ValidatedSubmission};
pub use crate::domain::ports::Page;
pub use crate::utils::error::Result;
