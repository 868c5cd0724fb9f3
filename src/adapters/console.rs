use crate::domain::model::{
    ElementRef, MessageKind, ScrollAnimationSettings, SubmitControl, ToastId,
};
use crate::domain::ports::Page;
use url::Url;

/// Headless page for the CLI: mutations go to the log, the hand-off link is
/// printed to stdout instead of opened.
#[derive(Debug, Default)]
pub struct ConsolePage;

impl ConsolePage {
    pub fn new() -> Self {
        Self
    }
}

impl Page for ConsolePage {
    fn set_form_message(&self, text: &str, kind: MessageKind) {
        match kind {
            MessageKind::Error => tracing::warn!("📝 {}", text),
            _ => tracing::info!("📝 {}", text),
        }
    }

    fn clear_form_message(&self) {
        tracing::debug!("Form message cleared");
    }

    fn has_toast_container(&self) -> bool {
        true
    }

    fn append_toast(&self, id: ToastId, text: &str, kind: MessageKind) {
        tracing::info!("🔔 [{}] {} ({:?})", kind, text, id);
    }

    fn set_toast_visible(&self, _id: ToastId, _visible: bool) {}

    fn remove_toast(&self, id: ToastId) {
        tracing::debug!("Toast {:?} removed", id);
    }

    fn set_submit_control(&self, control: &SubmitControl) {
        tracing::debug!(
            "Submit control: {} (disabled: {})",
            control.label,
            control.disabled
        );
    }

    fn reset_form(&self) {
        tracing::debug!("Form reset");
    }

    fn open_in_new_context(&self, url: &Url) {
        tracing::info!("🔗 Opening WhatsApp hand-off");
        println!("{}", url);
    }

    fn set_class(&self, element: &ElementRef, class: &str, present: bool) {
        tracing::debug!("{:?}: class '{}' = {}", element, class, present);
    }

    fn set_attribute(&self, element: &ElementRef, name: &str, value: &str) {
        tracing::debug!("{:?}: {}=\"{}\"", element, name, value);
    }

    fn set_text(&self, element: &ElementRef, text: &str) {
        tracing::debug!("{:?}: text '{}'", element, text);
    }

    fn set_body_scroll_locked(&self, locked: bool) {
        tracing::debug!("Body scroll locked: {}", locked);
    }

    fn section_top(&self, _anchor: &str) -> Option<f64> {
        None
    }

    fn page_offset(&self) -> f64 {
        0.0
    }

    fn scroll_to(&self, top: f64) {
        tracing::debug!("Scroll to {}", top);
    }

    fn focus(&self, element: &ElementRef) {
        tracing::debug!("Focus {:?}", element);
    }

    fn init_scroll_animations(&self, settings: &ScrollAnimationSettings) {
        tracing::debug!("Scroll animations: {:?}", settings);
    }
}
