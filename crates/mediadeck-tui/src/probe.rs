//! Media load probes.
//!
//! A terminal cannot decode images or video, so "loading" a media element
//! means checking that its file is readable. Each probe runs as a tokio task
//! and reports exactly once over an mpsc channel; the render loop drains the
//! channel without blocking and flips the card's failure flag on error.
//!
//! Remote `http(s)://` URLs are not probed. Fetching belongs to the data
//! layer, so remote media is treated as loaded.

use mediadeck_core::preview::MediaSlot;
use mediadeck_core::NetworkRequest;
use std::io::ErrorKind;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// Result of one probe, addressed to a card's media slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub card: usize,
    pub slot: MediaSlot,
    /// The load as it appears in the diagnostics request log.
    pub request: NetworkRequest,
}

impl ProbeOutcome {
    pub fn failed(&self) -> bool {
        self.request.status.is_some_and(|s| s >= 400)
    }
}

pub struct MediaProber {
    handle: Handle,
    tx: UnboundedSender<ProbeOutcome>,
    rx: UnboundedReceiver<ProbeOutcome>,
    pending: usize,
}

impl MediaProber {
    pub fn new(handle: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            tx,
            rx,
            pending: 0,
        }
    }

    /// Start probing `url` for `card`/`slot`. Returns `false` when the URL is
    /// remote and no probe was started.
    pub fn spawn(&mut self, card: usize, slot: MediaSlot, url: String) -> bool {
        if is_remote(&url) {
            return false;
        }
        let tx = self.tx.clone();
        self.pending += 1;
        self.handle.spawn(async move {
            let request = probe(&url).await;
            tracing::debug!(card, ?slot, url = %url, status = ?request.status, "probe finished");
            // The receiver only goes away when the app shuts down.
            let _ = tx.send(ProbeOutcome { card, slot, request });
        });
        true
    }

    /// Collect every outcome that has arrived so far.
    pub fn drain(&mut self) -> Vec<ProbeOutcome> {
        let mut out = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(outcome) => {
                    self.pending = self.pending.saturating_sub(1);
                    out.push(outcome);
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        out
    }

    /// Wait for the next outcome.
    pub async fn next(&mut self) -> Option<ProbeOutcome> {
        let outcome = self.rx.recv().await;
        if outcome.is_some() {
            self.pending = self.pending.saturating_sub(1);
        }
        outcome
    }

    /// Probes started but not yet reported.
    pub fn pending(&self) -> usize {
        self.pending
    }
}

fn is_remote(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Probe one local media file.
pub async fn probe(url: &str) -> NetworkRequest {
    let path = url.strip_prefix("file://").unwrap_or(url);
    let display = format!("file://{path}");

    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => NetworkRequest::new("GET", display, Some(200)),
        Ok(_) => NetworkRequest::new("GET", display, Some(415)).with_error("not a media file"),
        Err(e) => {
            let status = match e.kind() {
                ErrorKind::NotFound => 404,
                ErrorKind::PermissionDenied => 403,
                _ => 500,
            };
            NetworkRequest::new("GET", display, Some(status)).with_error(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn existing_file_loads() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let url = format!("file://{}", file.path().display());
        let req = probe(&url).await;
        assert_eq!(req.status, Some(200));
        assert_eq!(req.error, None);
        assert_eq!(req.url, url);
    }

    #[tokio::test]
    async fn missing_file_is_404() {
        let req = probe("/no/such/cover.jpg").await;
        assert_eq!(req.status, Some(404));
        assert!(req.error.is_some());
        assert_eq!(req.url, "file:///no/such/cover.jpg");
    }

    #[tokio::test]
    async fn directory_is_not_media() {
        let dir = tempfile::tempdir().unwrap();
        let req = probe(&dir.path().display().to_string()).await;
        assert_eq!(req.status, Some(415));
    }

    #[test]
    fn prober_reports_once_per_spawn() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut prober = MediaProber::new(rt.handle().clone());

        assert!(prober.spawn(3, MediaSlot::Cover, "/no/such/cover.jpg".to_string()));
        assert!(!prober.spawn(4, MediaSlot::Media, "https://cdn.example.com/a.png".to_string()));
        assert_eq!(prober.pending(), 1);

        let outcome = rt.block_on(prober.next()).unwrap();
        assert_eq!(outcome.card, 3);
        assert_eq!(outcome.slot, MediaSlot::Cover);
        assert!(outcome.failed());
        assert_eq!(prober.pending(), 0);
        assert!(prober.drain().is_empty());
    }
}
