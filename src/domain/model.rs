use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// 表單送出當下的原始欄位值（未修剪）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub service: String,
    pub message: String,
}

/// 通過所有檢查的提交內容；文字欄位已修剪
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedSubmission {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
    labels: BTreeMap<String, String>,
}

impl ServiceCatalog {
    pub fn new(labels: BTreeMap<String, String>) -> Self {
        Self { labels }
    }

    /// 未知代碼直接回傳原值
    pub fn label_for<'a>(&'a self, code: &'a str) -> &'a str {
        self.labels.get(code).map(String::as_str).unwrap_or(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        let labels = [
            ("reparacion", "Reparación de PC"),
            ("mantenimiento", "Mantenimiento Preventivo"),
            ("software", "Instalación de Software"),
            ("soporte", "Soporte Técnico"),
            ("recuperacion", "Recuperación de Datos"),
            ("redes", "Configuración de Redes"),
            ("otro", "Otro servicio"),
        ]
        .into_iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect();
        Self { labels }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Info,
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: String,
}

impl SubmitControl {
    pub const IDLE_LABEL: &'static str = "Enviar Mensaje";
    pub const BUSY_LABEL: &'static str = "Enviando...";

    pub fn idle() -> Self {
        Self {
            disabled: false,
            label: Self::IDLE_LABEL.to_string(),
        }
    }

    pub fn busy() -> Self {
        Self {
            disabled: true,
            label: Self::BUSY_LABEL.to_string(),
        }
    }
}

/// 頁面上可被操作的元素
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementRef {
    Document,
    Body,
    Header,
    Nav,
    MenuToggle,
    ScrollToTop,
    MainContent,
    Section(String),
    FaqItem(usize),
    FaqQuestion(usize),
    StatNumber(usize),
    /// `#pageLoader`
    PageLoader,
    /// 第 n 個 `img[loading="lazy"]`
    LazyImage(usize),
}

/// Options handed to the animate-on-scroll library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollAnimationSettings {
    pub duration_ms: u64,
    pub easing: String,
    pub once: bool,
    pub offset: u32,
    /// 使用者偏好減少動態時為 true
    pub disabled: bool,
}

/// 成功交接後的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub payload: String,
    pub handoff_url: Url,
    pub committed_at: DateTime<Utc>,
}
