use crate::domain::model::ElementRef;
use crate::domain::ports::Page;
use crate::utils::guard::spawn_logged;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

pub const LOADER_HIDE_DELAY: Duration = Duration::from_millis(500);

/// Full-screen loader, faded out shortly after the window `load` event.
pub struct PageLoader<P: Page + 'static> {
    page: Arc<P>,
    present: bool,
}

impl<P: Page + 'static> PageLoader<P> {
    pub fn new(page: Arc<P>, present: bool) -> Self {
        Self { page, present }
    }

    /// 頁面沒有 `#pageLoader` 時不做任何事
    pub fn on_load(&self) {
        if !self.present {
            return;
        }
        let page = Arc::clone(&self.page);
        spawn_logged("page-loader", async move {
            tokio::time::sleep(LOADER_HIDE_DELAY).await;
            page.set_class(&ElementRef::PageLoader, "hidden", true);
            Ok::<(), Infallible>(())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryPage;

    #[tokio::test(start_paused = true)]
    async fn test_loader_hidden_after_delay() {
        let page = Arc::new(MemoryPage::new());
        let loader = PageLoader::new(Arc::clone(&page), true);

        loader.on_load();
        tokio::time::sleep(Duration::from_millis(490)).await;
        assert!(!page.has_class(&ElementRef::PageLoader, "hidden"));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(page.has_class(&ElementRef::PageLoader, "hidden"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_loader_is_ignored() {
        let page = Arc::new(MemoryPage::new());
        PageLoader::new(Arc::clone(&page), false).on_load();

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(page.element(&ElementRef::PageLoader).classes.is_empty());
    }
}
