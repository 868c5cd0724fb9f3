use crate::domain::model::ElementRef;
use crate::domain::ports::Page;
use crate::ui::menu::NavMenu;
use crate::ui::timing::Debouncer;
use std::sync::Arc;
use std::time::Duration;

/// Height of the fixed header.
pub const HEADER_OFFSET: f64 = 80.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;
pub const HEADER_SCROLLED_THRESHOLD: f64 = 100.0;
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(66);

pub fn anchor_offset(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - HEADER_OFFSET
}

/// 平滑捲動到 `#anchor`，關閉行動選單並把焦點移到該區段
pub fn navigate_to_anchor<P: Page>(page: &P, menu: &mut NavMenu<P>, href: &str) -> bool {
    let Some(top) = page.section_top(href) else {
        tracing::debug!("Anchor target not found: {}", href);
        return false;
    };

    page.scroll_to(anchor_offset(top, page.page_offset()));
    menu.close();

    let section = ElementRef::Section(href.trim_start_matches('#').to_string());
    page.set_attribute(&section, "tabindex", "-1");
    page.focus(&section);
    true
}

pub fn scroll_to_top<P: Page>(page: &P) {
    page.scroll_to(0.0);
    page.set_attribute(&ElementRef::MainContent, "tabindex", "-1");
    page.focus(&ElementRef::MainContent);
}

/// Header shadow follows every scroll event; the back-to-top button only
/// updates once scrolling settles.
pub struct ScrollTracker<P: Page + 'static> {
    page: Arc<P>,
    debouncer: Debouncer,
}

impl<P: Page + 'static> ScrollTracker<P> {
    pub fn new(page: Arc<P>) -> Self {
        Self {
            page,
            debouncer: Debouncer::new(SCROLL_DEBOUNCE),
        }
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.page
            .set_class(&ElementRef::Header, "scrolled", offset > HEADER_SCROLLED_THRESHOLD);

        let page = Arc::clone(&self.page);
        self.debouncer.call(async move {
            page.set_class(
                &ElementRef::ScrollToTop,
                "visible",
                offset > SCROLL_TOP_THRESHOLD,
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryPage;

    #[test]
    fn test_anchor_offset_accounts_for_header() {
        assert_eq!(anchor_offset(500.0, 120.0), 540.0);
        assert_eq!(anchor_offset(40.0, 0.0), -40.0);
    }

    #[test]
    fn test_navigate_to_anchor_closes_menu_and_focuses() {
        let page = Arc::new(MemoryPage::new().with_section("servicios", 900.0));
        page.set_page_offset(100.0);
        let mut menu = NavMenu::new(Arc::clone(&page));
        menu.toggle();

        assert!(navigate_to_anchor(page.as_ref(), &mut menu, "#servicios"));

        assert_eq!(page.scroll_positions(), vec![920.0]);
        assert!(!menu.is_open());
        let section = ElementRef::Section("servicios".to_string());
        assert_eq!(page.focused(), Some(section.clone()));
        assert_eq!(page.attribute(&section, "tabindex").as_deref(), Some("-1"));
    }

    #[test]
    fn test_navigate_to_missing_anchor_is_noop() {
        let page = Arc::new(MemoryPage::new());
        let mut menu = NavMenu::new(Arc::clone(&page));
        menu.toggle();

        assert!(!navigate_to_anchor(page.as_ref(), &mut menu, "#nada"));
        assert!(menu.is_open());
        assert!(page.scroll_positions().is_empty());
    }

    #[test]
    fn test_scroll_to_top_focuses_main() {
        let page = MemoryPage::new();
        scroll_to_top(&page);
        assert_eq!(page.scroll_positions(), vec![0.0]);
        assert_eq!(page.focused(), Some(ElementRef::MainContent));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_tracker_debounces_button() {
        let page = Arc::new(MemoryPage::new());
        let mut tracker = ScrollTracker::new(Arc::clone(&page));

        tracker.on_scroll(150.0);
        assert!(page.has_class(&ElementRef::Header, "scrolled"));

        tracker.on_scroll(450.0);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(!page.has_class(&ElementRef::ScrollToTop, "visible"));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(page.has_class(&ElementRef::ScrollToTop, "visible"));

        tracker.on_scroll(20.0);
        assert!(!page.has_class(&ElementRef::Header, "scrolled"));
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!page.has_class(&ElementRef::ScrollToTop, "visible"));
    }
}
