use crate::domain::model::ElementRef;
use crate::domain::ports::Page;
use std::sync::Arc;

/// Mobile navigation drawer.
pub struct NavMenu<P: Page> {
    page: Arc<P>,
    open: bool,
}

impl<P: Page> NavMenu<P> {
    pub fn new(page: Arc<P>) -> Self {
        Self { page, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        let open = !self.open;
        self.apply(open);
    }

    pub fn close(&mut self) {
        self.apply(false);
    }

    /// Escape 鍵；有關閉選單時回傳 true
    pub fn on_escape(&mut self) -> bool {
        if self.open {
            self.close();
            true
        } else {
            false
        }
    }

    /// 點擊 header 以外的地方時關閉
    pub fn on_document_click(&mut self, inside_header: bool) -> bool {
        if !inside_header && self.open {
            self.close();
            true
        } else {
            false
        }
    }

    fn apply(&mut self, open: bool) {
        self.open = open;
        self.page.set_class(&ElementRef::Nav, "active", open);
        self.page.set_class(&ElementRef::MenuToggle, "active", open);
        self.page
            .set_attribute(&ElementRef::MenuToggle, "aria-expanded", &open.to_string());
        // 選單開啟時鎖住背景捲動
        self.page.set_body_scroll_locked(open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryPage;

    #[test]
    fn test_toggle_opens_and_closes() {
        let page = Arc::new(MemoryPage::new());
        let mut menu = NavMenu::new(Arc::clone(&page));

        menu.toggle();
        assert!(menu.is_open());
        assert!(page.has_class(&ElementRef::Nav, "active"));
        assert!(page.has_class(&ElementRef::MenuToggle, "active"));
        assert_eq!(
            page.attribute(&ElementRef::MenuToggle, "aria-expanded").as_deref(),
            Some("true")
        );
        assert!(page.body_scroll_locked());

        menu.toggle();
        assert!(!menu.is_open());
        assert!(!page.has_class(&ElementRef::Nav, "active"));
        assert!(!page.body_scroll_locked());
    }

    #[test]
    fn test_escape_and_outside_click() {
        let page = Arc::new(MemoryPage::new());
        let mut menu = NavMenu::new(Arc::clone(&page));

        assert!(!menu.on_escape());
        menu.toggle();
        assert!(!menu.on_document_click(true));
        assert!(menu.is_open());
        assert!(menu.on_document_click(false));
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.on_escape());
        assert_eq!(
            page.attribute(&ElementRef::MenuToggle, "aria-expanded").as_deref(),
            Some("false")
        );
    }
}
