//! Trailing window over a component's request log.

use crate::types::NetworkRequest;

/// Number of most recent requests the overlay shows.
pub const WINDOW: usize = 3;

/// Display class of a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Failure,
}

impl StatusClass {
    /// Failure for any status of 400 and above.
    pub fn of(status: Option<u16>) -> Self {
        match status {
            Some(code) if code >= 400 => StatusClass::Failure,
            _ => StatusClass::Success,
        }
    }
}

/// Borrowed view of the last [`WINDOW`] requests, oldest first.
#[derive(Debug, Clone, Copy)]
pub struct NetworkLogView<'a> {
    total: usize,
    window: &'a [NetworkRequest],
}

impl<'a> NetworkLogView<'a> {
    pub fn new(log: &'a [NetworkRequest]) -> Self {
        let start = log.len().saturating_sub(WINDOW);
        Self {
            total: log.len(),
            window: &log[start..],
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = LogRow<'a>> + 'a {
        let window: &'a [NetworkRequest] = self.window;
        window.iter().map(|request| LogRow { request })
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Requests older than the window.
    pub fn hidden_count(&self) -> usize {
        self.total - self.window.len()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LogRow<'a> {
    request: &'a NetworkRequest,
}

impl<'a> LogRow<'a> {
    /// `"METHOD url"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.request.method, self.request.url)
    }

    pub fn status_text(&self) -> String {
        self.request
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "---".to_string())
    }

    pub fn status_class(&self) -> StatusClass {
        StatusClass::of(self.request.status)
    }

    pub fn error(&self) -> Option<&'a str> {
        self.request.error.as_deref()
    }

    pub fn request(&self) -> &'a NetworkRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(n: usize) -> Vec<NetworkRequest> {
        (1..=n)
            .map(|i| NetworkRequest::new("GET", format!("/api/{i}"), Some(200)))
            .collect()
    }

    #[test]
    fn shows_last_three_in_order() {
        let log = log(5);
        let view = NetworkLogView::new(&log);
        let urls: Vec<_> = view.rows().map(|r| r.request().url.clone()).collect();
        assert_eq!(urls, vec!["/api/3", "/api/4", "/api/5"]);
        assert_eq!(view.hidden_count(), 2);
    }

    #[test]
    fn short_logs_show_everything() {
        let log = log(2);
        let view = NetworkLogView::new(&log);
        assert_eq!(view.len(), 2);
        assert_eq!(view.hidden_count(), 0);
        assert!(NetworkLogView::new(&[]).is_empty());
    }

    #[test]
    fn status_classification() {
        assert_eq!(StatusClass::of(Some(200)), StatusClass::Success);
        assert_eq!(StatusClass::of(Some(399)), StatusClass::Success);
        assert_eq!(StatusClass::of(Some(400)), StatusClass::Failure);
        assert_eq!(StatusClass::of(Some(503)), StatusClass::Failure);
        assert_eq!(StatusClass::of(None), StatusClass::Success);
    }

    #[test]
    fn row_accessors() {
        let log = vec![NetworkRequest::new("POST", "/api/likes", Some(500)).with_error("boom")];
        let view = NetworkLogView::new(&log);
        let row = view.rows().next().unwrap();
        assert_eq!(row.label(), "POST /api/likes");
        assert_eq!(row.status_text(), "500");
        assert_eq!(row.status_class(), StatusClass::Failure);
        assert_eq!(row.error(), Some("boom"));
    }
}
