use crate::domain::model::{
    ElementRef, MessageKind, ScrollAnimationSettings, SubmitControl, ToastId,
};
use async_trait::async_trait;
use url::Url;

/// The HTML document as seen by the scripts. Every mutation is synchronous;
/// timing lives on the caller's side.
pub trait Page: Send + Sync {
    /// `#formMessage`：設定文字與 `form-message {kind}` 樣式
    fn set_form_message(&self, text: &str, kind: MessageKind);
    /// 將樣式還原成單純的 `form-message`
    fn clear_form_message(&self);

    /// 頁面上是否有 `#toastContainer`
    fn has_toast_container(&self) -> bool;
    fn append_toast(&self, id: ToastId, text: &str, kind: MessageKind);
    fn set_toast_visible(&self, id: ToastId, visible: bool);
    fn remove_toast(&self, id: ToastId);

    fn set_submit_control(&self, control: &SubmitControl);
    fn reset_form(&self);
    /// 以新的瀏覽情境開啟（`_blank`）
    fn open_in_new_context(&self, url: &Url);

    fn set_class(&self, element: &ElementRef, class: &str, present: bool);
    fn set_attribute(&self, element: &ElementRef, name: &str, value: &str);
    fn set_text(&self, element: &ElementRef, text: &str);
    fn set_body_scroll_locked(&self, locked: bool);

    /// 區段相對於視窗頂端的位置；找不到時為 None
    fn section_top(&self, anchor: &str) -> Option<f64>;
    fn page_offset(&self) -> f64;
    fn scroll_to(&self, top: f64);
    fn focus(&self, element: &ElementRef);

    /// 啟動捲動動畫函式庫（AOS）
    fn init_scroll_animations(&self, settings: &ScrollAnimationSettings);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    /// 使用者取消分享
    #[error("share aborted by user")]
    Aborted,
    #[error("share failed: {0}")]
    Failed(String),
}

#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn share(&self, data: &ShareData) -> std::result::Result<(), ShareError>;
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> std::result::Result<(), String>;
}

/// 外部分析服務（例如 gtag）
pub trait AnalyticsSink: Send + Sync {
    fn send_event(&self, category: &str, action: &str, label: &str);
}
