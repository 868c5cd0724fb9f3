use crate::domain::model::ElementRef;
use crate::domain::ports::Page;
use crate::utils::guard::spawn_logged;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

pub const FRAME: Duration = Duration::from_millis(16);
pub const REVEAL_DELAY: Duration = Duration::from_millis(300);
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    /// `98%`
    Percent,
    /// `+500`
    Plus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatValue {
    pub format: StatFormat,
    pub value: u64,
}

impl StatValue {
    pub fn initial_text(&self) -> &'static str {
        match self.format {
            StatFormat::Percent => "0%",
            StatFormat::Plus => "0",
        }
    }

    pub fn final_text(&self) -> String {
        match self.format {
            StatFormat::Percent => format!("{}%", self.value),
            StatFormat::Plus => format!("+{}", self.value),
        }
    }
}

/// 開頭的十進位數字；沒有數字時為 None
fn leading_integer(text: &str) -> Option<u64> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

pub fn parse_stat(text: &str) -> Option<StatValue> {
    if text.contains('%') {
        leading_integer(text).map(|value| StatValue {
            format: StatFormat::Percent,
            value,
        })
    } else if text.contains('+') {
        leading_integer(&text.replace('+', "")).map(|value| StatValue {
            format: StatFormat::Plus,
            value,
        })
    } else {
        None
    }
}

/// Count-up frames, one every 16 ms, ending exactly on the target.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration) -> Self {
        let frames = (duration.as_millis() as f64 / FRAME.as_millis() as f64).max(1.0);
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
            finished: false,
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as u64)
        }
    }
}

/// The stats band. Animates once, the first time it becomes half visible.
pub struct StatsSection<P: Page + 'static> {
    page: Arc<P>,
    stats: Vec<(usize, String)>,
    duration: Duration,
    revealed: bool,
}

impl<P: Page + 'static> StatsSection<P> {
    pub fn new(page: Arc<P>, stats: Vec<String>, duration: Duration) -> Self {
        Self {
            page,
            stats: stats.into_iter().enumerate().collect(),
            duration,
            revealed: false,
        }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn on_intersect(&mut self, visible_ratio: f64) {
        if self.revealed || visible_ratio < VISIBILITY_THRESHOLD {
            return;
        }
        self.revealed = true;

        for (index, text) in &self.stats {
            let Some(stat) = parse_stat(text) else {
                continue;
            };
            let page = Arc::clone(&self.page);
            let element = ElementRef::StatNumber(*index);
            let duration = self.duration;
            spawn_logged("stat-counter", async move {
                animate_stat(page.as_ref(), &element, stat, duration).await;
                Ok::<(), Infallible>(())
            });
        }
    }
}

pub async fn animate_stat<P: Page>(page: &P, element: &ElementRef, stat: StatValue, duration: Duration) {
    page.set_text(element, stat.initial_text());
    tokio::time::sleep(REVEAL_DELAY).await;

    let started = Instant::now();
    let mut ticker = tokio::time::interval(FRAME);
    ticker.tick().await;
    for frame in CounterAnimation::new(stat.value, duration) {
        ticker.tick().await;
        page.set_text(element, &frame.to_string());
    }

    tokio::time::sleep_until(started + duration).await;
    page.set_text(element, &stat.final_text());
}
