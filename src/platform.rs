//! Browser capabilities, resolved once when the page boots.

use crate::analytics::Analytics;
use crate::core::notify::Notifier;
use crate::domain::model::ElementRef;
use crate::domain::ports::{Clipboard, Page, ShareData, ShareError, ShareTarget};
use std::sync::Arc;

pub const LOW_MEMORY_GB: f64 = 4.0;
pub const LOW_CPU_CORES: u32 = 4;

pub const TOAST_LINK_COPIED: &str = "¡Enlace copiado al portapapeles!";
pub const TOAST_ONLINE: &str = "Conexión restaurada";
pub const TOAST_OFFLINE: &str = "Sin conexión a internet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability<T> {
    Available(T),
    Unavailable,
}

impl<T> Capability<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available(_))
    }
}

impl<T> From<Option<T>> for Capability<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Capability::Available(value),
            None => Capability::Unavailable,
        }
    }
}

/// Network Information API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub effective_type: String,
    pub save_data: bool,
}

#[derive(Clone)]
pub struct PlatformCapabilities {
    pub connection: Capability<ConnectionInfo>,
    pub device_memory_gb: Capability<f64>,
    pub hardware_concurrency: Capability<u32>,
    pub share: Capability<Arc<dyn ShareTarget>>,
    pub clipboard: Capability<Arc<dyn Clipboard>>,
    /// 目前只偵測，不註冊
    pub service_worker: Capability<()>,
    /// 頁面是否載入了 AOS
    pub scroll_animations: Capability<()>,
    /// `prefers-reduced-motion: reduce`
    pub prefers_reduced_motion: bool,
    /// 瀏覽器原生支援 `loading="lazy"`
    pub native_lazy_loading: bool,
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self::none()
    }
}

impl PlatformCapabilities {
    pub fn none() -> Self {
        Self {
            connection: Capability::Unavailable,
            device_memory_gb: Capability::Unavailable,
            hardware_concurrency: Capability::Unavailable,
            share: Capability::Unavailable,
            clipboard: Capability::Unavailable,
            service_worker: Capability::Unavailable,
            scroll_animations: Capability::Unavailable,
            prefers_reduced_motion: false,
            native_lazy_loading: false,
        }
    }

    pub fn with_share(mut self, share: Arc<dyn ShareTarget>) -> Self {
        self.share = Capability::Available(share);
        self
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = Capability::Available(clipboard);
        self
    }

    pub fn with_connection(mut self, connection: ConnectionInfo) -> Self {
        self.connection = Capability::Available(connection);
        self
    }

    pub fn with_device(mut self, memory_gb: Option<f64>, cores: Option<u32>) -> Self {
        self.device_memory_gb = memory_gb.into();
        self.hardware_concurrency = cores.into();
        self
    }

    pub fn with_scroll_animations(mut self) -> Self {
        self.scroll_animations = Capability::Available(());
        self
    }

    pub fn with_reduced_motion(mut self, reduce: bool) -> Self {
        self.prefers_reduced_motion = reduce;
        self
    }

    pub fn with_native_lazy_loading(mut self, native: bool) -> Self {
        self.native_lazy_loading = native;
        self
    }

    pub fn is_low_end_device(&self) -> bool {
        let constrained_network = match &self.connection {
            Capability::Available(c) => {
                c.save_data || matches!(c.effective_type.as_str(), "slow-2g" | "2g")
            }
            Capability::Unavailable => false,
        };
        let low_memory = matches!(self.device_memory_gb, Capability::Available(gb) if gb < LOW_MEMORY_GB);
        let slow_cpu =
            matches!(self.hardware_concurrency, Capability::Available(n) if n < LOW_CPU_CORES);

        constrained_network || low_memory || slow_cpu
    }
}

/// 低效能裝置時在 <html> 加上 reduce-animations
pub fn apply_performance_mode<P: Page>(page: &P, capabilities: &PlatformCapabilities) -> bool {
    let low_end = capabilities.is_low_end_device();
    if low_end {
        page.set_class(&ElementRef::Document, "reduce-animations", true);
        tracing::info!("🔋 Modo de bajo rendimiento activado");
    }
    if capabilities.service_worker.is_available() {
        tracing::debug!("Service worker API present; registration is disabled");
    }
    low_end
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Cancelled,
    CopiedLink,
    Failed,
    Unsupported,
}

/// Web Share API first, clipboard as the fallback. Never fails outward.
pub async fn share_website<P: Page + 'static>(
    capabilities: &PlatformCapabilities,
    notifier: &Notifier<P>,
    analytics: &Analytics,
    data: &ShareData,
) -> ShareOutcome {
    if let Capability::Available(share) = &capabilities.share {
        return match share.share(data).await {
            Ok(()) => {
                analytics.track_event("Social", "share", "Web Share API");
                ShareOutcome::Shared
            }
            Err(ShareError::Aborted) => ShareOutcome::Cancelled,
            Err(e) => {
                tracing::error!("Error al compartir: {}", e);
                ShareOutcome::Failed
            }
        };
    }

    match &capabilities.clipboard {
        Capability::Available(clipboard) => match clipboard.write_text(&data.url).await {
            Ok(()) => {
                notifier.success(TOAST_LINK_COPIED);
                ShareOutcome::CopiedLink
            }
            Err(e) => {
                tracing::error!("Error al copiar: {}", e);
                ShareOutcome::Failed
            }
        },
        Capability::Unavailable => {
            tracing::debug!("Neither share nor clipboard is available");
            ShareOutcome::Unsupported
        }
    }
}

pub fn on_connectivity_change<P: Page + 'static>(notifier: &Notifier<P>, online: bool) {
    if online {
        notifier.success(TOAST_ONLINE);
    } else {
        notifier.error(TOAST_OFFLINE);
    }
}
