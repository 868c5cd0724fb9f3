use crate::domain::model::ElementRef;
use crate::domain::ports::Page;
use std::sync::Arc;

/// Accordion FAQ. At most one item is open at any time.
pub struct FaqAccordion<P: Page> {
    page: Arc<P>,
    items: usize,
    active: Option<usize>,
}

impl<P: Page> FaqAccordion<P> {
    pub fn new(page: Arc<P>, items: usize) -> Self {
        Self {
            page,
            items,
            active: None,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn toggle(&mut self, index: usize) {
        if index >= self.items {
            tracing::debug!("FAQ item {} does not exist ({} items)", index, self.items);
            return;
        }
        let was_active = self.active == Some(index);

        for item in 0..self.items {
            self.page.set_class(&ElementRef::FaqItem(item), "active", false);
            self.page
                .set_attribute(&ElementRef::FaqQuestion(item), "aria-expanded", "false");
        }
        self.active = None;

        if !was_active {
            self.page.set_class(&ElementRef::FaqItem(index), "active", true);
            self.page
                .set_attribute(&ElementRef::FaqQuestion(index), "aria-expanded", "true");
            self.active = Some(index);
        }
    }

    /// Enter 或空白鍵切換；回傳是否攔截了按鍵
    pub fn on_key(&mut self, index: usize, key: &str) -> bool {
        match key {
            "Enter" | " " => {
                self.toggle(index);
                true
            }
            _ => false,
        }
    }
}
