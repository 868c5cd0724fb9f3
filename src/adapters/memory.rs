use crate::domain::model::{
    ElementRef, MessageKind, ScrollAnimationSettings, SubmitControl, ToastId,
};
use crate::domain::ports::Page;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub class_name: String,
}

impl Default for FormMessage {
    fn default() -> Self {
        Self {
            text: String::new(),
            class_name: "form-message".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastNode {
    pub text: String,
    pub kind: MessageKind,
    pub visible: bool,
    pub role: &'static str,
    pub aria_live: &'static str,
}

impl ToastNode {
    pub fn class_name(&self) -> String {
        if self.visible {
            format!("toast toast-{} show", self.kind)
        } else {
            format!("toast toast-{}", self.kind)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
}

#[derive(Debug)]
struct PageState {
    form_message: FormMessage,
    toast_container: bool,
    toasts: BTreeMap<ToastId, ToastNode>,
    submit_control: SubmitControl,
    submit_history: Vec<SubmitControl>,
    form_resets: usize,
    opened: Vec<Url>,
    elements: BTreeMap<ElementRef, ElementState>,
    body_scroll_locked: bool,
    sections: HashMap<String, f64>,
    page_offset: f64,
    scroll_positions: Vec<f64>,
    focused: Option<ElementRef>,
    scroll_animations: Option<ScrollAnimationSettings>,
}

/// In-memory document used by tests and headless runs. Records every
/// mutation so callers can assert on the resulting page state.
#[derive(Debug)]
pub struct MemoryPage {
    state: Mutex<PageState>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PageState {
                form_message: FormMessage::default(),
                toast_container: true,
                toasts: BTreeMap::new(),
                submit_control: SubmitControl::idle(),
                submit_history: Vec::new(),
                form_resets: 0,
                opened: Vec::new(),
                elements: BTreeMap::new(),
                body_scroll_locked: false,
                sections: HashMap::new(),
                page_offset: 0.0,
                scroll_positions: Vec::new(),
                focused: None,
                scroll_animations: None,
            }),
        }
    }

    pub fn without_toast_container() -> Self {
        let page = Self::new();
        page.lock().toast_container = false;
        page
    }

    /// `#contacto` 與 `contacto` 視為同一個區段
    pub fn with_section(self, anchor: &str, top: f64) -> Self {
        self.lock()
            .sections
            .insert(anchor.trim_start_matches('#').to_string(), top);
        self
    }

    pub fn set_page_offset(&self, offset: f64) {
        self.lock().page_offset = offset;
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn form_message(&self) -> FormMessage {
        self.lock().form_message.clone()
    }

    pub fn toast(&self, id: ToastId) -> Option<ToastNode> {
        self.lock().toasts.get(&id).cloned()
    }

    pub fn toasts(&self) -> Vec<ToastNode> {
        self.lock().toasts.values().cloned().collect()
    }

    pub fn submit_control(&self) -> SubmitControl {
        self.lock().submit_control.clone()
    }

    pub fn submit_history(&self) -> Vec<SubmitControl> {
        self.lock().submit_history.clone()
    }

    pub fn form_resets(&self) -> usize {
        self.lock().form_resets
    }

    pub fn opened_urls(&self) -> Vec<Url> {
        self.lock().opened.clone()
    }

    pub fn element(&self, element: &ElementRef) -> ElementState {
        self.lock().elements.get(element).cloned().unwrap_or_default()
    }

    pub fn has_class(&self, element: &ElementRef, class: &str) -> bool {
        self.lock()
            .elements
            .get(element)
            .is_some_and(|e| e.classes.contains(class))
    }

    pub fn attribute(&self, element: &ElementRef, name: &str) -> Option<String> {
        self.lock()
            .elements
            .get(element)
            .and_then(|e| e.attributes.get(name).cloned())
    }

    pub fn text(&self, element: &ElementRef) -> String {
        self.element(element).text
    }

    pub fn body_scroll_locked(&self) -> bool {
        self.lock().body_scroll_locked
    }

    pub fn scroll_positions(&self) -> Vec<f64> {
        self.lock().scroll_positions.clone()
    }

    pub fn focused(&self) -> Option<ElementRef> {
        self.lock().focused.clone()
    }

    pub fn scroll_animations(&self) -> Option<ScrollAnimationSettings> {
        self.lock().scroll_animations.clone()
    }
}

impl Page for MemoryPage {
    fn set_form_message(&self, text: &str, kind: MessageKind) {
        let mut state = self.lock();
        state.form_message = FormMessage {
            text: text.to_string(),
            class_name: format!("form-message {}", kind),
        };
    }

    fn clear_form_message(&self) {
        self.lock().form_message.class_name = "form-message".to_string();
    }

    fn has_toast_container(&self) -> bool {
        self.lock().toast_container
    }

    fn append_toast(&self, id: ToastId, text: &str, kind: MessageKind) {
        self.lock().toasts.insert(
            id,
            ToastNode {
                text: text.to_string(),
                kind,
                visible: false,
                role: "alert",
                aria_live: "assertive",
            },
        );
    }

    fn set_toast_visible(&self, id: ToastId, visible: bool) {
        if let Some(toast) = self.lock().toasts.get_mut(&id) {
            toast.visible = visible;
        }
    }

    fn remove_toast(&self, id: ToastId) {
        self.lock().toasts.remove(&id);
    }

    fn set_submit_control(&self, control: &SubmitControl) {
        let mut state = self.lock();
        state.submit_control = control.clone();
        state.submit_history.push(control.clone());
    }

    fn reset_form(&self) {
        self.lock().form_resets += 1;
    }

    fn open_in_new_context(&self, url: &Url) {
        self.lock().opened.push(url.clone());
    }

    fn set_class(&self, element: &ElementRef, class: &str, present: bool) {
        let mut state = self.lock();
        let entry = state.elements.entry(element.clone()).or_default();
        if present {
            entry.classes.insert(class.to_string());
        } else {
            entry.classes.remove(class);
        }
    }

    fn set_attribute(&self, element: &ElementRef, name: &str, value: &str) {
        self.lock()
            .elements
            .entry(element.clone())
            .or_default()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_text(&self, element: &ElementRef, text: &str) {
        self.lock().elements.entry(element.clone()).or_default().text = text.to_string();
    }

    fn set_body_scroll_locked(&self, locked: bool) {
        self.lock().body_scroll_locked = locked;
    }

    fn section_top(&self, anchor: &str) -> Option<f64> {
        self.lock().sections.get(anchor.trim_start_matches('#')).copied()
    }

    fn page_offset(&self) -> f64 {
        self.lock().page_offset
    }

    fn scroll_to(&self, top: f64) {
        let mut state = self.lock();
        state.scroll_positions.push(top);
        state.page_offset = top;
    }

    fn focus(&self, element: &ElementRef) {
        self.lock().focused = Some(element.clone());
    }

    fn init_scroll_animations(&self, settings: &ScrollAnimationSettings) {
        self.lock().scroll_animations = Some(settings.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_lookup_ignores_leading_hash() {
        let page = MemoryPage::new()
            .with_section("#contacto", 1200.0)
            .with_section("servicios", 900.0);

        assert_eq!(page.section_top("#contacto"), Some(1200.0));
        assert_eq!(page.section_top("contacto"), Some(1200.0));
        assert_eq!(page.section_top("#servicios"), Some(900.0));
        assert_eq!(page.section_top("#faq"), None);
    }
}
