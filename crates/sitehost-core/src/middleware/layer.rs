//! Pipeline seam for middleware composition
//!
//! The host framework hands each request to the outermost middleware along
//! with a `next` continuation; a middleware either produces a response
//! itself or delegates by invoking `next`. [`LayerStack`] builds that
//! chain, and [`NextService`] adapts a continuation to `tower::Service`
//! for hosts composed out of Tower layers.

use crate::request::Request;
use crate::response::Response;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::Service;

/// The next handler in a middleware chain
pub type BoxedNext =
    Arc<dyn Fn(Request) -> Pin<Box<dyn Future<Output = Response> + Send + 'static>> + Send + Sync>;

/// Trait for middleware participating in the pipeline
pub trait MiddlewareLayer: Send + Sync + 'static {
    /// Handle a request, calling `next` to continue the chain
    fn call(
        &self,
        req: Request,
        next: BoxedNext,
    ) -> Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

    /// Clone this middleware into a boxed trait object
    fn clone_box(&self) -> Box<dyn MiddlewareLayer>;
}

impl Clone for Box<dyn MiddlewareLayer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// An ordered stack of middleware layers
#[derive(Clone, Default)]
pub struct LayerStack {
    layers: Vec<Box<dyn MiddlewareLayer>>,
}

impl LayerStack {
    /// Create a new empty layer stack
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Add a middleware layer to the stack
    ///
    /// Layers execute in the order they are added (outermost first).
    pub fn push(&mut self, layer: Box<dyn MiddlewareLayer>) {
        self.layers.push(layer);
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Get the number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Execute the middleware stack with a final handler
    pub fn execute(
        &self,
        req: Request,
        handler: BoxedNext,
    ) -> Pin<Box<dyn Future<Output = Response> + Send + 'static>> {
        if self.layers.is_empty() {
            return handler(req);
        }

        // Build the chain from the inside out so the first layer added
        // is the first to see the request.
        let mut next = handler;

        for layer in self.layers.iter().rev() {
            let layer = layer.clone_box();
            let current_next = next;
            next = Arc::new(move |req: Request| {
                let layer = layer.clone_box();
                let next = current_next.clone();
                Box::pin(async move { layer.call(req, next).await })
                    as Pin<Box<dyn Future<Output = Response> + Send + 'static>>
            });
        }

        next(req)
    }
}

/// `tower::Service` adapter over the next handler in the chain
pub struct NextService {
    next: BoxedNext,
}

impl NextService {
    /// Wrap a continuation as a service
    pub fn new(next: BoxedNext) -> Self {
        Self { next }
    }
}

impl Clone for NextService {
    fn clone(&self) -> Self {
        Self {
            next: self.next.clone(),
        }
    }
}

impl Service<Request> for NextService {
    type Response = Response;
    type Error = std::convert::Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let next = self.next.clone();
        Box::pin(async move { Ok(next(req).await) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{Method, StatusCode};
    use http_body_util::Full;

    fn test_request(path: &str) -> Request {
        let req = http::Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Bytes::new())
            .unwrap();
        Request::from_http(req)
    }

    fn status_handler(status: StatusCode) -> BoxedNext {
        Arc::new(move |_req: Request| {
            Box::pin(async move {
                http::Response::builder()
                    .status(status)
                    .body(Full::new(Bytes::new()))
                    .unwrap()
            }) as Pin<Box<dyn Future<Output = Response> + Send + 'static>>
        })
    }

    /// Middleware that tags responses with its id, outermost last
    #[derive(Clone)]
    struct TaggingMiddleware {
        id: &'static str,
    }

    impl MiddlewareLayer for TaggingMiddleware {
        fn call(
            &self,
            req: Request,
            next: BoxedNext,
        ) -> Pin<Box<dyn Future<Output = Response> + Send + 'static>> {
            let id = self.id;
            Box::pin(async move {
                let mut response = next(req).await;
                response
                    .headers_mut()
                    .append("x-seen-by", id.parse().unwrap());
                response
            })
        }

        fn clone_box(&self) -> Box<dyn MiddlewareLayer> {
            Box::new(self.clone())
        }
    }

    #[tokio::test]
    async fn test_empty_stack_calls_handler_directly() {
        let stack = LayerStack::new();
        assert!(stack.is_empty());

        let response = stack
            .execute(test_request("/anything"), status_handler(StatusCode::OK))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_layers_execute_outermost_first() {
        let mut stack = LayerStack::new();
        stack.push(Box::new(TaggingMiddleware { id: "outer" }));
        stack.push(Box::new(TaggingMiddleware { id: "inner" }));
        assert_eq!(stack.len(), 2);

        let response = stack
            .execute(test_request("/"), status_handler(StatusCode::NO_CONTENT))
            .await;

        // Responses unwind inner-first, so the outer tag is appended last.
        let seen: Vec<_> = response.headers().get_all("x-seen-by").iter().collect();
        assert_eq!(seen, ["inner", "outer"]);
    }

    #[tokio::test]
    async fn test_next_service_forwards_to_continuation() {
        let mut service = NextService::new(status_handler(StatusCode::IM_A_TEAPOT));
        let response = service.call(test_request("/tea")).await.unwrap();
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }
}
