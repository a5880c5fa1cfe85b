//! Tower middleware that fires a one-shot listener on every response head.
//!
//! For each request a listener is built from the request, then installed
//! on the head of the inner service's response. The head is written once
//! with the response's own status, which fires the listener before the
//! response leaves the service.

use std::task::{Context, Poll};

use axum::http::{Request, Response, StatusCode};
use futures_util::future::BoxFuture;
use tower::{Layer, Service};

use crate::http::response::{HeadError, PartsHead};
use crate::intercept::{on_headers, Head, ResponseHead};

/// A type-erased listener for [`PartsHead`].
pub type BoxListener = Box<dyn FnOnce(&mut PartsHead) -> Result<(), HeadError> + Send>;

/// Applies [`OnHeadersService`] to a service.
#[derive(Clone, Debug)]
pub struct OnHeadersLayer<M> {
    make_listener: M,
}

impl<M> OnHeadersLayer<M> {
    /// `make_listener` is called once per request to build that
    /// response's listener.
    pub fn new(make_listener: M) -> Self {
        Self { make_listener }
    }
}

impl<S, M> Layer<S> for OnHeadersLayer<M>
where
    M: Clone,
{
    type Service = OnHeadersService<S, M>;

    fn layer(&self, inner: S) -> Self::Service {
        OnHeadersService {
            inner,
            make_listener: self.make_listener.clone(),
        }
    }
}

/// Fires a per-request listener right before the response head is handed on.
#[derive(Clone, Debug)]
pub struct OnHeadersService<S, M> {
    inner: S,
    make_listener: M,
}

impl<S, M, L, ReqBody, ResBody> Service<Request<ReqBody>> for OnHeadersService<S, M>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    M: Fn(&Request<ReqBody>) -> L,
    L: FnOnce(&mut PartsHead) -> Result<(), HeadError> + Send + 'static,
    ResBody: Default + Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let listener = (self.make_listener)(&request);
        let future = self.inner.call(request);

        Box::pin(async move {
            let response = future.await?;
            Ok(write_head(response, listener))
        })
    }
}

/// Install `listener` on the response head and commit it.
///
/// A failing listener replaces the response with an empty 500.
pub fn write_head<B, L>(response: Response<B>, listener: L) -> Response<B>
where
    B: Default,
    L: FnOnce(&mut PartsHead) -> Result<(), HeadError>,
{
    let (head, body) = PartsHead::from_response(response);
    let status = head.status();

    // Commit the head as the handler left it, reason phrase included.
    let mut committed = Head::new(status);
    if let Some(reason) = head.reason() {
        match std::str::from_utf8(reason) {
            Ok(reason) => committed = committed.with_reason(reason),
            Err(_) => tracing::warn!(status = %status, "Dropping non UTF-8 reason phrase"),
        }
    }

    let mut head = on_headers(head, listener);
    match head.write_head(committed) {
        Ok(()) => head.into_inner().into_response(body),
        Err(error) => {
            tracing::error!(
                error = %error,
                status = %status,
                "Response head listener failed"
            );
            let mut response = Response::new(B::default());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        }
    }
}
