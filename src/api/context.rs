//! Request Context
//!
//! Gives every request a cancellation token that is cancelled once the
//! response has been produced or the request future is dropped.

use axum::{extract::Request, middleware::Next, response::Response};
use tokio_util::sync::CancellationToken;

/// Cancellation signal scoped to one HTTP request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext(pub CancellationToken);

impl RequestContext {
    pub fn new(token: CancellationToken) -> Self {
        Self(token)
    }

    pub fn token(&self) -> &CancellationToken {
        &self.0
    }
}

/// Middleware attaching a [`RequestContext`] to each request.
///
/// A context inserted by the caller is left alone and the caller owns its
/// lifetime. Otherwise a fresh token is cancelled when this request ends.
pub async fn attach_request_context(mut req: Request, next: Next) -> Response {
    if req.extensions().get::<RequestContext>().is_some() {
        return next.run(req).await;
    }

    let token = CancellationToken::new();
    let _cancel_on_exit = token.clone().drop_guard();
    req.extensions_mut().insert(RequestContext::new(token));

    next.run(req).await
}
