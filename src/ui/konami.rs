use std::collections::VecDeque;

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

pub const KONAMI_TOAST: &str = "🎉 ¡Has encontrado el código secreto! 🚀";

/// Watches the last ten key presses for the Konami code.
#[derive(Debug, Default)]
pub struct KonamiDetector {
    recent: VecDeque<String>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 回傳 true 表示剛好完成整組序列（之後重新計算）
    pub fn on_key(&mut self, key: &str) -> bool {
        self.recent.push_back(key.to_string());
        while self.recent.len() > KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }

        let matched = self.recent.len() == KONAMI_SEQUENCE.len()
            && self
                .recent
                .iter()
                .zip(KONAMI_SEQUENCE)
                .all(|(got, want)| got == want);
        if matched {
            self.recent.clear();
        }
        matched
    }
}
