//! Recording transport with scripted replies, for tests.
//!
//! ```rust,ignore
//! let mock = MockTransport::new();
//! mock.reply(Method::Get, "http://mock/dashboard/traders", Reply::json(200, json!([])));
//! let client = DashboardClient::builder().base_url("http://mock").transport(mock.clone()).build()?;
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::HttpError;
use crate::http::transport::{HttpRequest, HttpResponse, Method, Transport};

/// What the mock does for one matching request.
#[derive(Debug, Clone)]
pub enum Reply {
    Respond(HttpResponse),
    /// Transport-level failure (connection refused, reset, ...).
    Fail(String),
    /// Wait, then behave like the inner reply.
    Delayed(Duration, Box<Reply>),
}

impl Reply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Reply::Respond(HttpResponse::new(status, body.to_string()))
    }

    pub fn status(status: u16) -> Self {
        Reply::Respond(HttpResponse::new(status, ""))
    }

    pub fn text(status: u16, body: &str) -> Self {
        Reply::Respond(HttpResponse::new(status, body))
    }

    /// 429 carrying a `Retry-After` hint.
    pub fn rate_limited(retry_after_ms: u64) -> Self {
        Reply::Respond(HttpResponse::new(429, "").with_retry_after(retry_after_ms))
    }

    pub fn fail(reason: &str) -> Self {
        Reply::Fail(reason.to_string())
    }

    /// Never answers within any realistic timeout.
    pub fn hang() -> Self {
        Reply::Delayed(Duration::from_secs(3600), Box::new(Reply::status(200)))
    }

    pub fn after(self, delay: Duration) -> Self {
        Reply::Delayed(delay, Box::new(self))
    }
}

#[derive(Debug)]
struct Route {
    method: Method,
    url: String,
    /// Consumed front to back; the last reply repeats.
    replies: VecDeque<Reply>,
}

#[derive(Debug, Default)]
struct Inner {
    routes: Vec<Route>,
    requests: Vec<HttpRequest>,
}

/// Cloning shares the script and the request log.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<Inner>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue a reply for `method url`. Replies to the same route are served
    /// in order; the last one keeps being served.
    pub fn reply(&self, method: Method, url: &str, reply: Reply) -> &Self {
        let mut inner = self.lock();
        match inner
            .routes
            .iter_mut()
            .find(|r| r.method == method && r.url == url)
        {
            Some(route) => route.replies.push_back(reply),
            None => inner.routes.push(Route {
                method,
                url: url.to_string(),
                replies: VecDeque::from([reply]),
            }),
        }
        self
    }

    /// Drop queued replies for a route and install `reply` instead.
    pub fn replace(&self, method: Method, url: &str, reply: Reply) -> &Self {
        self.lock()
            .routes
            .retain(|r| !(r.method == method && r.url == url));
        self.reply(method, url, reply)
    }

    /// Every request seen so far, in arrival order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// Requests matching a method, in arrival order.
    pub fn requests_with(&self, method: Method) -> Vec<HttpRequest> {
        self.lock()
            .requests
            .iter()
            .filter(|r| r.method == method)
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        self.lock().requests.clear();
    }

    fn next_reply(&self, request: &HttpRequest) -> Reply {
        let mut inner = self.lock();
        inner.requests.push(request.clone());
        let route = inner
            .routes
            .iter_mut()
            .find(|r| r.method == request.method && r.url == request.url);
        match route {
            Some(route) if route.replies.len() > 1 => {
                route.replies.pop_front().unwrap_or_else(|| Reply::status(500))
            }
            Some(route) => route
                .replies
                .front()
                .cloned()
                .unwrap_or_else(|| Reply::status(500)),
            None => Reply::text(404, "no mock route"),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut reply = self.next_reply(request);
        loop {
            match reply {
                Reply::Respond(resp) => return Ok(resp),
                Reply::Fail(reason) => return Err(HttpError::Transport(reason)),
                Reply::Delayed(delay, inner) => {
                    futures_timer::Delay::new(delay).await;
                    reply = *inner;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_are_consumed_then_last_repeats() {
        let mock = MockTransport::new();
        mock.reply(Method::Get, "http://m/a", Reply::status(500))
            .reply(Method::Get, "http://m/a", Reply::status(200));

        let req = HttpRequest::new(Method::Get, "http://m/a");
        assert_eq!(mock.send(&req).await.unwrap().status, 500);
        assert_eq!(mock.send(&req).await.unwrap().status, 200);
        assert_eq!(mock.send(&req).await.unwrap().status, 200);
        assert_eq!(mock.request_count(), 3);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let mock = MockTransport::new();
        let resp = mock
            .send(&HttpRequest::new(Method::Put, "http://m/nope"))
            .await
            .unwrap();
        assert_eq!(resp.status, 404);
    }

    #[tokio::test]
    async fn test_fail_reply() {
        let mock = MockTransport::new();
        mock.reply(Method::Delete, "http://m/x", Reply::fail("refused"));
        let err = mock
            .send(&HttpRequest::new(Method::Delete, "http://m/x"))
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::Transport(r) if r == "refused"));
    }

    #[test]
    fn test_replace_drops_queued_replies() {
        let mock = MockTransport::new();
        mock.reply(Method::Get, "http://m/a", Reply::status(500))
            .reply(Method::Get, "http://m/a", Reply::status(502));
        mock.replace(Method::Get, "http://m/a", Reply::status(204));

        let req = HttpRequest::new(Method::Get, "http://m/a");
        let resp = tokio_test::block_on(mock.send(&req)).unwrap();
        assert_eq!(resp.status, 204);
        assert_eq!(mock.requests_with(Method::Get).len(), 1);
        mock.clear_requests();
        assert_eq!(mock.request_count(), 0);
    }
}
