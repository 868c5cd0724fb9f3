use crate::config::TimingConfig;
use crate::domain::model::{MessageKind, ToastId};
use crate::domain::ports::Page;
use crate::utils::guard::spawn_logged;
use std::convert::Infallible;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct NotifyTiming {
    message_duration: Duration,
    toast_enter: Duration,
    toast_duration: Duration,
    toast_exit: Duration,
}

/// Inline form message plus toast notifications, each dismissed on a timer.
pub struct Notifier<P: Page + 'static> {
    page: Arc<P>,
    timing: NotifyTiming,
    next_toast: Arc<AtomicU64>,
    message_generation: Arc<AtomicU64>,
}

impl<P: Page + 'static> Clone for Notifier<P> {
    fn clone(&self) -> Self {
        Self {
            page: Arc::clone(&self.page),
            timing: self.timing,
            next_toast: Arc::clone(&self.next_toast),
            message_generation: Arc::clone(&self.message_generation),
        }
    }
}

impl<P: Page + 'static> Notifier<P> {
    pub fn new(page: Arc<P>, timing: &TimingConfig) -> Self {
        Self {
            page,
            timing: NotifyTiming {
                message_duration: timing.message_duration(),
                toast_enter: timing.toast_enter_delay(),
                toast_duration: timing.toast_duration(),
                toast_exit: timing.toast_exit_delay(),
            },
            next_toast: Arc::new(AtomicU64::new(1)),
            message_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn page(&self) -> &Arc<P> {
        &self.page
    }

    /// 顯示表單訊息，message_duration 後自動隱藏（較新的訊息不受影響）
    pub fn show_message(&self, text: &str, kind: MessageKind) {
        let generation = self.message_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.page.set_form_message(text, kind);
        tracing::debug!("Form message [{}]: {}", kind, text);

        let page = Arc::clone(&self.page);
        let current = Arc::clone(&self.message_generation);
        let delay = self.timing.message_duration;
        spawn_logged("form-message-hide", async move {
            tokio::time::sleep(delay).await;
            if current.load(Ordering::SeqCst) == generation {
                page.clear_form_message();
            }
            Ok::<(), Infallible>(())
        });
    }

    pub fn clear_message(&self) {
        self.message_generation.fetch_add(1, Ordering::SeqCst);
        self.page.clear_form_message();
    }

    /// 建立 toast；頁面沒有 toast 容器時不做任何事
    pub fn show_toast(&self, text: &str, kind: MessageKind) -> Option<ToastId> {
        if !self.page.has_toast_container() {
            tracing::debug!("No toast container, dropping toast: {}", text);
            return None;
        }

        let id = ToastId(self.next_toast.fetch_add(1, Ordering::SeqCst));
        self.page.append_toast(id, text, kind);
        tracing::debug!("Toast {:?} [{}]: {}", id, kind, text);

        let page = Arc::clone(&self.page);
        let timing = self.timing;
        spawn_logged("toast-lifecycle", async move {
            tokio::time::sleep(timing.toast_enter).await;
            page.set_toast_visible(id, true);

            // 隱藏時間從建立時起算
            tokio::time::sleep(timing.toast_duration.saturating_sub(timing.toast_enter)).await;
            page.set_toast_visible(id, false);

            tokio::time::sleep(timing.toast_exit).await;
            page.remove_toast(id);
            Ok::<(), Infallible>(())
        });

        Some(id)
    }

    pub fn info(&self, text: &str) -> Option<ToastId> {
        self.show_toast(text, MessageKind::Info)
    }

    pub fn success(&self, text: &str) -> Option<ToastId> {
        self.show_toast(text, MessageKind::Success)
    }

    pub fn error(&self, text: &str) -> Option<ToastId> {
        self.show_toast(text, MessageKind::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryPage;

    fn notifier(page: &Arc<MemoryPage>) -> Notifier<MemoryPage> {
        Notifier::new(Arc::clone(page), &TimingConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_lifecycle() {
        let page = Arc::new(MemoryPage::new());
        let notifier = notifier(&page);

        let id = notifier.success("¡Redirigiendo a WhatsApp!").unwrap();
        let toast = page.toast(id).unwrap();
        assert_eq!(toast.class_name(), "toast toast-success");
        assert!(!toast.visible);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(page.toast(id).unwrap().visible);

        tokio::time::sleep(Duration::from_millis(2900)).await;
        let toast = page.toast(id).unwrap();
        assert!(!toast.visible, "hidden after 3000ms but still in the DOM");

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(page.toast(id).is_none());
        assert!(page.toasts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_without_container_is_noop() {
        let page = Arc::new(MemoryPage::without_toast_container());
        let notifier = notifier(&page);

        assert!(notifier.error("Sin conexión a internet").is_none());
        assert!(page.toasts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_auto_hides() {
        let page = Arc::new(MemoryPage::new());
        let notifier = notifier(&page);

        notifier.show_message("Por favor ingresa un nombre válido.", MessageKind::Error);
        assert_eq!(page.form_message().class_name, "form-message error");

        tokio::time::sleep(Duration::from_millis(5001)).await;
        assert_eq!(page.form_message().class_name, "form-message");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_hide_keeps_newer_message() {
        let page = Arc::new(MemoryPage::new());
        let notifier = notifier(&page);

        notifier.show_message("primero", MessageKind::Error);
        tokio::time::sleep(Duration::from_millis(4000)).await;
        notifier.show_message("segundo", MessageKind::Success);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        let message = page.form_message();
        assert_eq!(message.text, "segundo");
        assert_eq!(message.class_name, "form-message success");

        tokio::time::sleep(Duration::from_millis(4000)).await;
        assert_eq!(page.form_message().class_name, "form-message");
    }
}
