//! Global catch-all handlers. Nothing that fails here is ever surfaced to
//! the visitor; it only ends up in the log.

use std::future::Future;
use std::sync::Once;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

static PANIC_HOOK: Once = Once::new();

/// 安裝全域 panic hook，只記錄不中斷。重複呼叫只會安裝一次。
pub fn install_panic_hook() {
    PANIC_HOOK.call_once(set_logging_hook);
}

pub fn panic_hook_installed() -> bool {
    PANIC_HOOK.is_completed()
}

fn set_logging_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());

        tracing::error!("Error capturado: {} at {}", payload, location);

        if std::env::var_os("CONCORDIA_PANIC_PASSTHROUGH").is_some() {
            previous(info);
        }
    }));
}

/// 產生背景任務；任務失敗（錯誤或 panic）時只記錄。
/// 沒有 tokio runtime 時不產生任務，回傳 None。
pub fn spawn_logged<F, E>(label: &'static str, fut: F) -> Option<JoinHandle<()>>
where
    F: Future<Output = Result<(), E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    let Ok(runtime) = Handle::try_current() else {
        tracing::warn!("No async runtime, task '{}' skipped", label);
        return None;
    };

    let inner = runtime.spawn(fut);
    Some(runtime.spawn(async move {
        match inner.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("Promesa rechazada ({}): {}", label, e),
            Err(join_err) if join_err.is_panic() => {
                tracing::error!("Task '{}' panicked", label)
            }
            Err(join_err) => tracing::debug!("Task '{}' cancelled: {}", label, join_err),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_logged_swallows_errors() {
        let handle = spawn_logged("failing", async { Err::<(), _>("boom") }).unwrap();
        assert!(handle.await.is_ok());
    }

    #[tokio::test]
    async fn test_spawn_logged_swallows_panics() {
        let handle = spawn_logged("panicking", async {
            if true {
                panic!("expected in test");
            }
            Ok::<(), String>(())
        })
        .unwrap();
        assert!(handle.await.is_ok());
    }

    #[test]
    fn test_install_panic_hook_is_idempotent() {
        install_panic_hook();
        install_panic_hook();
        assert!(panic_hook_installed());
    }

    #[test]
    fn test_spawn_logged_without_runtime_is_skipped() {
        let handle = spawn_logged("no-runtime", async { Ok::<(), String>(()) });
        assert!(handle.is_none());
    }
}
