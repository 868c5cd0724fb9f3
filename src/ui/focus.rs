use crate::domain::model::ElementRef;
use crate::domain::ports::Page;
use std::sync::Arc;

/// Shows focus rings only while the visitor navigates with the keyboard.
pub struct FocusTracker<P: Page> {
    page: Arc<P>,
    using_keyboard: bool,
}

impl<P: Page> FocusTracker<P> {
    pub fn new(page: Arc<P>) -> Self {
        Self {
            page,
            using_keyboard: false,
        }
    }

    pub fn using_keyboard(&self) -> bool {
        self.using_keyboard
    }

    pub fn on_key(&mut self, key: &str) {
        if key == "Tab" {
            self.using_keyboard = true;
            self.page.set_class(&ElementRef::Body, "using-keyboard", true);
        }
    }

    pub fn on_mouse_down(&mut self) {
        self.using_keyboard = false;
        self.page.set_class(&ElementRef::Body, "using-keyboard", false);
    }
}
