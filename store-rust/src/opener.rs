use std::sync::Mutex;

/// Side-effect seam for opening an article externally after a recorded
/// view (the browser shell's `window.open` equivalent).
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str);
}

/// Default opener: logs the URL and leaves actual opening to the shell.
#[derive(Debug, Default)]
pub struct TracingOpener;

impl LinkOpener for TracingOpener {
    fn open(&self, url: &str) {
        tracing::info!(target: "newsphere::open", %url, "open article");
    }
}

/// Opener that records opened URLs, for tests.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    urls: Mutex<Vec<String>>,
}

impl RecordingOpener {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().expect("opener poisoned").clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) {
        self.urls
            .lock()
            .expect("opener poisoned")
            .push(url.to_string());
    }
}
