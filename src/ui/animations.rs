//! Animate-on-scroll setup.

use crate::config::TimingConfig;
use crate::domain::model::ScrollAnimationSettings;
use crate::domain::ports::Page;
use crate::platform::PlatformCapabilities;

pub const EASING: &str = "ease-out";
pub const TRIGGER_OFFSET: u32 = 100;

pub fn scroll_animation_settings(
    timing: &TimingConfig,
    capabilities: &PlatformCapabilities,
) -> ScrollAnimationSettings {
    ScrollAnimationSettings {
        duration_ms: timing.animation_duration().as_millis() as u64,
        easing: EASING.to_string(),
        once: true,
        offset: TRIGGER_OFFSET,
        disabled: capabilities.prefers_reduced_motion,
    }
}

/// 函式庫未載入時略過；回傳是否有初始化
pub fn init_scroll_animations<P: Page>(
    page: &P,
    timing: &TimingConfig,
    capabilities: &PlatformCapabilities,
) -> bool {
    if !capabilities.scroll_animations.is_available() {
        tracing::debug!("AOS not loaded, skipping scroll animations");
        return false;
    }
    let settings = scroll_animation_settings(timing, capabilities);
    page.init_scroll_animations(&settings);
    true
}
