use crate::domain::model::ElementRef;
use crate::domain::ports::Page;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Fallback for browsers without native `loading="lazy"`: copies `data-src`
/// into `src` the first time an image scrolls into view.
pub struct LazyImages<P: Page> {
    page: Arc<P>,
    pending: BTreeMap<usize, String>,
}

impl<P: Page> LazyImages<P> {
    /// `sources[i]` 是第 i 張圖片的 `data-src`
    pub fn new(page: Arc<P>, sources: Vec<Option<String>>, native_lazy_loading: bool) -> Self {
        let pending = if native_lazy_loading {
            BTreeMap::new()
        } else {
            sources
                .into_iter()
                .enumerate()
                .filter_map(|(index, src)| src.map(|src| (index, src)))
                .collect()
        };
        Self { page, pending }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// 圖片進入視窗；有替換 src 時回傳 true，之後不再觀察
    pub fn on_visible(&mut self, index: usize) -> bool {
        let Some(src) = self.pending.remove(&index) else {
            return false;
        };
        let image = ElementRef::LazyImage(index);
        self.page.set_attribute(&image, "src", &src);
        self.page.set_class(&image, "lazy", false);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryPage;

    fn sources() -> Vec<Option<String>> {
        vec![Some("img/taller.webp".to_string()), None]
    }

    #[test]
    fn test_reveal_swaps_source_once() {
        let page = Arc::new(MemoryPage::new());
        page.set_class(&ElementRef::LazyImage(0), "lazy", true);
        let mut images = LazyImages::new(Arc::clone(&page), sources(), false);
        assert_eq!(images.pending(), 1);

        assert!(images.on_visible(0));
        assert_eq!(
            page.attribute(&ElementRef::LazyImage(0), "src").as_deref(),
            Some("img/taller.webp")
        );
        assert!(!page.has_class(&ElementRef::LazyImage(0), "lazy"));

        assert!(!images.on_visible(0));
        assert!(!images.on_visible(1));
    }

    #[test]
    fn test_native_lazy_loading_skips_observer() {
        let page = Arc::new(MemoryPage::new());
        let mut images = LazyImages::new(Arc::clone(&page), sources(), true);

        assert_eq!(images.pending(), 0);
        assert!(!images.on_visible(0));
        assert!(page.attribute(&ElementRef::LazyImage(0), "src").is_none());
    }
}
