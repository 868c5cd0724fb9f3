use crate::config::{SiteConfig, TimingConfig};
use crate::core::compose;
use crate::core::cooldown::Cooldown;
use crate::core::form;
use crate::core::notify::Notifier;
use crate::domain::model::{
    FormSnapshot, MessageKind, ServiceCatalog, SubmissionReceipt, SubmitControl,
};
use crate::domain::ports::Page;
use crate::utils::error::{Result, SubmissionError};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tokio::time::{sleep, Instant};
use url::Url;

pub const MESSAGE_PREPARED: &str = "¡Mensaje preparado! Te redirigiremos a WhatsApp...";
pub const TOAST_REDIRECTING: &str = "¡Redirigiendo a WhatsApp!";

/// 提交流程的狀態，依序前進
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    AwaitingRedirect,
    Cleanup,
}

/// Contact form pipeline: cooldown, validation, composition and the
/// WhatsApp hand-off. `submit` borrows the pipeline mutably, so a single
/// instance never has two submissions in flight.
pub struct SubmissionPipeline<P: Page + 'static> {
    page: Arc<P>,
    notifier: Notifier<P>,
    cooldown: Cooldown,
    timing: TimingConfig,
    services: ServiceCatalog,
    handoff_base: Url,
    state: watch::Sender<SubmissionState>,
    transitions: broadcast::Sender<SubmissionState>,
}

impl<P: Page + 'static> SubmissionPipeline<P> {
    pub fn new(page: Arc<P>, config: &SiteConfig) -> Result<Self> {
        let notifier = Notifier::new(Arc::clone(&page), &config.timing);
        Self::with_notifier(notifier, config)
    }

    /// 與其他元件共用同一個 Notifier（toast 編號不重複）
    pub fn with_notifier(notifier: Notifier<P>, config: &SiteConfig) -> Result<Self> {
        let handoff_base = config.handoff_base()?;
        let (transitions, _) = broadcast::channel(16);
        let (state, _) = watch::channel(SubmissionState::Idle);

        Ok(Self {
            page: Arc::clone(notifier.page()),
            notifier,
            cooldown: Cooldown::new(config.timing.submit_cooldown()),
            timing: config.timing.clone(),
            services: config.services.clone(),
            handoff_base,
            state,
            transitions,
        })
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    /// 目前狀態；接收端只看到最新值，不會落後
    pub fn watch_state(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// 完整的轉換紀錄；接收端落後超過 16 筆時會收到 `Lagged`
    pub fn subscribe(&self) -> broadcast::Receiver<SubmissionState> {
        self.transitions.subscribe()
    }

    pub fn cooldown(&self) -> &Cooldown {
        &self.cooldown
    }

    pub fn notifier(&self) -> &Notifier<P> {
        &self.notifier
    }

    fn transition(&mut self, next: SubmissionState) {
        let previous = self.state.send_replace(next);
        tracing::debug!("Submission state: {:?} -> {:?}", previous, next);
        // 沒有訂閱者時送出會失敗，可忽略
        let _ = self.transitions.send(next);
    }

    /// 檢查並組出訊息，不改變任何狀態（供 dry run 使用）
    pub fn preview(&self, snapshot: &FormSnapshot) -> std::result::Result<String, SubmissionError> {
        let submission = form::validate_form(snapshot)?;
        Ok(compose::compose_message(&submission, &self.services))
    }

    pub async fn submit(
        &mut self,
        snapshot: &FormSnapshot,
    ) -> std::result::Result<SubmissionReceipt, SubmissionError> {
        if let Err(e) = self.cooldown.check(Instant::now()) {
            tracing::warn!("⏳ {}", e);
            self.notifier.error(e.user_message());
            return Err(e);
        }

        self.transition(SubmissionState::Validating);
        let submission = match form::validate_form(snapshot) {
            Ok(submission) => submission,
            Err(e) => {
                tracing::info!("❌ Form rejected: {}", e);
                self.notifier.show_message(e.user_message(), MessageKind::Error);
                self.notifier.error(e.user_message());
                self.transition(SubmissionState::Idle);
                return Err(e.into());
            }
        };

        self.page.set_submit_control(&SubmitControl::busy());
        self.transition(SubmissionState::Submitting);
        sleep(self.timing.processing_delay()).await;

        let payload = compose::compose_message(&submission, &self.services);
        let handoff_url = compose::handoff_url(&self.handoff_base, &payload);
        tracing::debug!("Composed hand-off message ({} chars)", payload.chars().count());

        self.notifier.show_message(MESSAGE_PREPARED, MessageKind::Success);
        self.notifier.success(TOAST_REDIRECTING);

        self.cooldown.commit(Instant::now());
        let committed_at = Utc::now();

        self.transition(SubmissionState::AwaitingRedirect);
        sleep(self.timing.redirect_delay()).await;

        self.page.open_in_new_context(&handoff_url);
        self.page.reset_form();
        self.page.set_submit_control(&SubmitControl::idle());
        tracing::info!("✅ Handed off to {}", self.handoff_base);

        self.transition(SubmissionState::Cleanup);
        sleep(self.timing.cleanup_delay()).await;
        self.notifier.clear_message();
        self.transition(SubmissionState::Idle);

        Ok(SubmissionReceipt {
            payload,
            handoff_url,
            committed_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryPage;
    use crate::utils::error::ValidationError;
    use std::time::Duration;

    fn ana() -> FormSnapshot {
        FormSnapshot {
            name: "Ana".to_string(),
            phone: "669 123 4567".to_string(),
            email: String::new(),
            service: "reparacion".to_string(),
            message: "Necesito ayuda con mi laptop".to_string(),
        }
    }

    fn pipeline() -> (Arc<MemoryPage>, SubmissionPipeline<MemoryPage>) {
        let page = Arc::new(MemoryPage::new());
        let pipeline = SubmissionPipeline::new(Arc::clone(&page), &SiteConfig::default()).unwrap();
        (page, pipeline)
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_submission_hands_off() {
        let (page, mut pipeline) = pipeline();
        let started = Instant::now();

        let receipt = pipeline.submit(&ana()).await.unwrap();

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(4500) && elapsed < Duration::from_millis(4510));
        assert_eq!(page.opened_urls(), vec![receipt.handoff_url.clone()]);
        assert!(receipt
            .handoff_url
            .as_str()
            .starts_with("https://wa.me/526691517346?text=Hola!%20Soy%20Ana."));
        assert!(receipt.payload.contains("Reparación de PC"));
        assert_eq!(page.form_resets(), 1);
        assert_eq!(
            page.submit_history(),
            vec![SubmitControl::busy(), SubmitControl::idle()]
        );
        assert_eq!(page.form_message().class_name, "form-message");
        assert_eq!(pipeline.state(), SubmissionState::Idle);
        let committed = pipeline.cooldown().last_commit().unwrap() - started;
        assert!(committed >= Duration::from_millis(1000) && committed < Duration::from_millis(1010));
    }

    #[tokio::test(start_paused = true)]
    async fn test_validation_failure_leaves_cooldown_untouched() {
        let (page, mut pipeline) = pipeline();
        let mut snapshot = ana();
        snapshot.phone = "123-456".to_string();

        let err = pipeline.submit(&snapshot).await.unwrap_err();

        assert_eq!(err, SubmissionError::Validation(ValidationError::PhoneTooShort));
        assert!(pipeline.cooldown().last_commit().is_none());
        assert!(page.submit_history().is_empty());
        assert!(page.opened_urls().is_empty());
        let message = page.form_message();
        assert_eq!(message.text, "El teléfono debe tener al menos 10 dígitos.");
        assert_eq!(message.class_name, "form-message error");
        assert_eq!(page.toasts().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_transitions_are_observable() {
        let (_page, mut pipeline) = pipeline();
        let mut rx = pipeline.subscribe();

        pipeline.submit(&ana()).await.unwrap();

        let mut seen = Vec::new();
        while let Ok(state) = rx.try_recv() {
            seen.push(state);
        }
        assert_eq!(
            seen,
            vec![
                SubmissionState::Validating,
                SubmissionState::Submitting,
                SubmissionState::AwaitingRedirect,
                SubmissionState::Cleanup,
                SubmissionState::Idle,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_validation_returns_to_idle() {
        let (_page, mut pipeline) = pipeline();
        let mut rx = pipeline.subscribe();
        let mut snapshot = ana();
        snapshot.name = String::new();

        assert!(pipeline.submit(&snapshot).await.is_err());
        assert_eq!(rx.try_recv().unwrap(), SubmissionState::Validating);
        assert_eq!(rx.try_recv().unwrap(), SubmissionState::Idle);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_preview_does_not_touch_page() {
        let (page, pipeline) = pipeline();
        let text = pipeline.preview(&ana()).unwrap();

        assert!(text.starts_with("Hola! Soy Ana."));
        assert!(page.toasts().is_empty());
        assert!(pipeline.cooldown().last_commit().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_watcher_never_lags() {
        let (_page, mut pipeline) = pipeline();
        let mut state_rx = pipeline.watch_state();
        let mut log_rx = pipeline.subscribe();

        for _ in 0..4 {
            pipeline.submit(&ana()).await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        }

        assert!(state_rx.has_changed().unwrap());
        assert_eq!(*state_rx.borrow_and_update(), SubmissionState::Idle);
        assert!(matches!(
            log_rx.try_recv(),
            Err(broadcast::error::TryRecvError::Lagged(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_watcher_sees_awaiting_redirect() {
        let (_page, mut pipeline) = pipeline();
        let state_rx = pipeline.watch_state();

        let handle = tokio::spawn(async move {
            pipeline.submit(&ana()).await.unwrap();
            pipeline
        });

        tokio::time::sleep(Duration::from_millis(1200)).await;
        assert_eq!(*state_rx.borrow(), SubmissionState::AwaitingRedirect);

        let pipeline = handle.await.unwrap();
        assert_eq!(pipeline.state(), SubmissionState::Idle);
    }
}
