//! Event tracking. Events always go to the log; an external sink (gtag and
//! friends) receives them only when the page exposes one.

use crate::domain::ports::AnalyticsSink;
use crate::platform::Capability;
use crate::utils::error::Result;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub event_category: String,
    pub action: String,
    pub event_label: String,
}

impl AnalyticsEvent {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Clone)]
pub struct Analytics {
    sink: Capability<Arc<dyn AnalyticsSink>>,
}

impl Analytics {
    pub fn new(sink: Capability<Arc<dyn AnalyticsSink>>) -> Self {
        Self { sink }
    }

    pub fn disabled() -> Self {
        Self::new(Capability::Unavailable)
    }

    pub fn track_event(&self, category: &str, action: &str, label: &str) -> AnalyticsEvent {
        let event = AnalyticsEvent {
            event_category: category.to_string(),
            action: action.to_string(),
            event_label: label.to_string(),
        };

        if let Capability::Available(sink) = &self.sink {
            sink.send_event(category, action, label);
        }
        tracing::info!("📊 Event tracked: {} - {} - {}", category, action, label);
        event
    }

    /// CTA 按鈕點擊
    pub fn track_cta(&self, button_text: &str) -> AnalyticsEvent {
        self.track_event("CTA", "click", button_text.trim())
    }
}

pub fn welcome_banner(business_name: &str, version: &str) -> String {
    let title = format!("{} - v{}", business_name.to_uppercase(), version);
    let width = 39;
    let mut lines = vec![
        "¡Hola Desarrollador! 👋".to_string(),
        "Si encuentras algún bug o tienes sugerencias, ¡contáctanos!".to_string(),
        format!("{} - Hecho con ❤️ en Concordia, Sinaloa", business_name),
        format!("╔{}╗", "═".repeat(width)),
    ];
    for row in [title.as_str(), "Optimizado para rendimiento", "y accesibilidad"] {
        let pad = width.saturating_sub(row.chars().count() + 3);
        lines.push(format!("║   {}{}║", row, " ".repeat(pad)));
    }
    lines.push(format!("╚{}╝", "═".repeat(width)));
    lines.join("\n")
}

pub fn log_welcome_message(business_name: &str) {
    for line in welcome_banner(business_name, env!("CARGO_PKG_VERSION")).lines() {
        tracing::info!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<(String, String, String)>>,
    }

    impl AnalyticsSink for RecordingSink {
        fn send_event(&self, category: &str, action: &str, label: &str) {
            self.events.lock().unwrap().push((
                category.to_string(),
                action.to_string(),
                label.to_string(),
            ));
        }
    }

    #[test]
    fn test_track_event_reaches_sink() {
        let sink = Arc::new(RecordingSink::default());
        let analytics = Analytics::new(Capability::Available(sink.clone()));

        let event = analytics.track_cta("  Contáctanos  ");

        assert_eq!(event.event_label, "Contáctanos");
        assert_eq!(
            sink.events.lock().unwrap().as_slice(),
            &[(
                "CTA".to_string(),
                "click".to_string(),
                "Contáctanos".to_string()
            )]
        );
    }

    #[test]
    fn test_track_event_without_sink() {
        let event = Analytics::disabled().track_event("Social", "share", "Web Share API");
        let json = event.to_json().unwrap();
        assert!(json.contains("\"event_category\":\"Social\""));
        assert!(json.contains("\"event_label\":\"Web Share API\""));
    }

    #[test]
    fn test_welcome_banner_box_is_aligned() {
        let banner = welcome_banner("Concordia Digital", "2.0.0");
        let boxed: Vec<&str> = banner.lines().skip(3).collect();
        let width = boxed[0].chars().count();
        assert!(boxed.iter().all(|l| l.chars().count() == width));
        assert!(banner.contains("CONCORDIA DIGITAL - v2.0.0"));
    }
}
