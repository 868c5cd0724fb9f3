use crate::utils::error::SubmissionError;
use std::time::Duration;
use tokio::time::Instant;

/// 上次成功送出的時間；只在單一頁面工作階段內有效
#[derive(Debug, Clone)]
pub struct Cooldown {
    interval: Duration,
    last_commit: Option<Instant>,
}

impl Cooldown {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_commit: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_commit(&self) -> Option<Instant> {
        self.last_commit
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_commit {
            Some(last) => self.interval.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    pub fn check(&self, now: Instant) -> Result<(), SubmissionError> {
        let remaining = self.remaining(now);
        if remaining.is_zero() {
            Ok(())
        } else {
            Err(SubmissionError::RateLimited {
                remaining_ms: remaining.as_millis() as u64,
            })
        }
    }

    pub fn commit(&mut self, now: Instant) {
        self.last_commit = Some(now);
    }
}
