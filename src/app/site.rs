use crate::analytics::{self, Analytics};
use crate::config::SiteConfig;
use crate::core::notify::Notifier;
use crate::core::pipeline::SubmissionPipeline;
use crate::domain::model::{FormSnapshot, SubmissionReceipt};
use crate::domain::ports::{Page, ShareData};
use crate::platform::{self, PlatformCapabilities, ShareOutcome};
use crate::ui::animations;
use crate::ui::faq::FaqAccordion;
use crate::ui::focus::FocusTracker;
use crate::ui::konami::{KonamiDetector, KONAMI_TOAST};
use crate::ui::lazy::LazyImages;
use crate::ui::loader::PageLoader;
use crate::ui::menu::NavMenu;
use crate::ui::scroll::{self, ScrollTracker};
use crate::ui::stats::StatsSection;
use crate::utils::error::{Result, SubmissionError};
use crate::utils::guard;
use std::sync::Arc;

/// 頁面上需要的結構資訊
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub faq_items: usize,
    pub stats: Vec<String>,
    /// 是否有 `#pageLoader`
    pub has_loader: bool,
    /// 每張 lazy 圖片的 `data-src`
    pub lazy_images: Vec<Option<String>>,
}

/// Everything the landing page wires up on `DOMContentLoaded`. Each `on_*`
/// method is the reaction to one DOM event.
pub struct Site<P: Page + 'static> {
    page: Arc<P>,
    config: SiteConfig,
    notifier: Notifier<P>,
    pipeline: SubmissionPipeline<P>,
    capabilities: PlatformCapabilities,
    analytics: Analytics,
    menu: NavMenu<P>,
    faq: FaqAccordion<P>,
    focus: FocusTracker<P>,
    konami: KonamiDetector,
    scroll: ScrollTracker<P>,
    stats: StatsSection<P>,
    loader: PageLoader<P>,
    lazy_images: LazyImages<P>,
}

impl<P: Page + 'static> Site<P> {
    pub fn init(
        page: Arc<P>,
        config: SiteConfig,
        layout: PageLayout,
        capabilities: PlatformCapabilities,
        analytics: Analytics,
    ) -> Result<Self> {
        guard::install_panic_hook();

        let notifier = Notifier::new(Arc::clone(&page), &config.timing);
        let pipeline = SubmissionPipeline::with_notifier(notifier.clone(), &config)?;

        platform::apply_performance_mode(page.as_ref(), &capabilities);
        animations::init_scroll_animations(page.as_ref(), &config.timing, &capabilities);
        analytics::log_welcome_message(&config.business.name);

        Ok(Self {
            menu: NavMenu::new(Arc::clone(&page)),
            faq: FaqAccordion::new(Arc::clone(&page), layout.faq_items),
            focus: FocusTracker::new(Arc::clone(&page)),
            konami: KonamiDetector::new(),
            scroll: ScrollTracker::new(Arc::clone(&page)),
            stats: StatsSection::new(
                Arc::clone(&page),
                layout.stats,
                config.timing.counter_duration(),
            ),
            loader: PageLoader::new(Arc::clone(&page), layout.has_loader),
            lazy_images: LazyImages::new(
                Arc::clone(&page),
                layout.lazy_images,
                capabilities.native_lazy_loading,
            ),
            page,
            config,
            notifier,
            pipeline,
            capabilities,
            analytics,
        })
    }

    pub fn page(&self) -> &Arc<P> {
        &self.page
    }

    pub fn pipeline(&self) -> &SubmissionPipeline<P> {
        &self.pipeline
    }

    pub fn menu(&self) -> &NavMenu<P> {
        &self.menu
    }

    pub fn faq(&self) -> &FaqAccordion<P> {
        &self.faq
    }

    /// window `load`
    pub fn on_load(&self) {
        self.loader.on_load();
    }

    pub fn on_image_visible(&mut self, index: usize) -> bool {
        self.lazy_images.on_visible(index)
    }

    pub async fn on_submit(
        &mut self,
        snapshot: &FormSnapshot,
    ) -> std::result::Result<SubmissionReceipt, SubmissionError> {
        self.pipeline.submit(snapshot).await
    }

    pub fn on_menu_toggle(&mut self) {
        self.menu.toggle();
    }

    pub fn on_document_click(&mut self, inside_header: bool) {
        self.menu.on_document_click(inside_header);
    }

    /// 所有 keydown：Escape 關選單、Tab 顯示焦點框、彩蛋序列
    pub fn on_key(&mut self, key: &str) {
        if key == "Escape" {
            self.menu.on_escape();
        }
        self.focus.on_key(key);
        if self.konami.on_key(key) {
            self.notifier.success(KONAMI_TOAST);
        }
    }

    pub fn on_mouse_down(&mut self) {
        self.focus.on_mouse_down();
    }

    pub fn on_faq_click(&mut self, index: usize) {
        self.faq.toggle(index);
    }

    pub fn on_faq_key(&mut self, index: usize, key: &str) -> bool {
        self.faq.on_key(index, key)
    }

    pub fn on_anchor_click(&mut self, href: &str) -> bool {
        scroll::navigate_to_anchor(self.page.as_ref(), &mut self.menu, href)
    }

    pub fn on_scroll_to_top(&self) {
        scroll::scroll_to_top(self.page.as_ref());
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scroll.on_scroll(offset);
    }

    pub fn on_stats_visible(&mut self, visible_ratio: f64) {
        self.stats.on_intersect(visible_ratio);
    }

    pub fn on_cta_click(&self, button_text: &str) {
        self.analytics.track_cta(button_text);
    }

    pub fn on_connectivity_change(&self, online: bool) {
        platform::on_connectivity_change(&self.notifier, online);
    }

    pub async fn on_share(&self) -> ShareOutcome {
        let data = ShareData {
            title: self.config.business.name.clone(),
            text: self.config.business.share_text.clone(),
            url: self.config.business.site_url.clone(),
        };
        platform::share_website(&self.capabilities, &self.notifier, &self.analytics, &data).await
    }
}
