//! End-to-end tests for the documentation-site resolver

use bytes::Bytes;
use http::{header, Method, StatusCode};
use http_body_util::{BodyExt, Full};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sitehost_core::{
    BoxedNext, LayerStack, MemoryResources, MiddlewareLayer, Request, Response, SiteHost,
    SiteOptions,
};
use sitehost_openapi::Document;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sitehost_core=debug")
        .with_test_writer()
        .try_init();
}

fn get(path: &str) -> Request {
    let req = http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Bytes::new())
        .unwrap();
    Request::from_http(req)
}

fn options() -> SiteOptions {
    SiteOptions::new("Orders API", "Order management endpoints", "/api")
}

fn site() -> MemoryResources {
    MemoryResources::new()
        .insert("index.html", &b"<html>docs</html>"[..])
        .insert("style.css", &b"body { margin: 0 }"[..])
        .insert("app.js", &b"console.log('docs')"[..])
        .insert("logo.png", &b"\x89PNG\r\n"[..])
        .insert("fonts/title.woff2", &b"wOF2"[..])
        .insert("icon.ico", &b"\x00\x00\x01\x00"[..])
}

/// Next handler that records how often delegation happened
fn counting_next(status: StatusCode, counter: Arc<AtomicUsize>) -> BoxedNext {
    Arc::new(move |_req: Request| {
        counter.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            http::Response::builder()
                .status(status)
                .body(Full::new(Bytes::from_static(b"fallthrough")))
                .unwrap()
        }) as Pin<Box<dyn Future<Output = Response> + Send + 'static>>
    })
}

fn next(status: StatusCode) -> BoxedNext {
    counting_next(status, Arc::new(AtomicUsize::new(0)))
}

async fn body_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

#[tokio::test]
async fn embedded_paths_serve_identical_bytes() {
    init_tracing();
    let host = SiteHost::new(options(), site());

    for (path, payload) in [
        ("/index.html", &b"<html>docs</html>"[..]),
        ("/style.css", &b"body { margin: 0 }"[..]),
        ("/fonts/title.woff2", &b"wOF2"[..]),
    ] {
        let response = host.call(get(path), next(StatusCode::NOT_FOUND)).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert_eq!(body_bytes(response).await, Bytes::from_static(payload), "{path}");
    }
}

#[tokio::test]
async fn bare_mount_path_serves_the_entry_document() {
    let host = SiteHost::new(options(), site());

    let response = host.call(get("/"), next(StatusCode::NOT_FOUND)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
    assert_eq!(body_bytes(response).await, Bytes::from_static(b"<html>docs</html>"));
}

#[tokio::test]
async fn content_type_follows_the_extension() {
    let host = SiteHost::new(options(), site());

    for (path, mime) in [
        ("/style.css", "text/css"),
        ("/app.js", "text/javascript"),
        ("/logo.png", "image/png"),
        ("/fonts/title.woff2", "application/font-woff2"),
        ("/icon.ico", "image/x-icon"),
        ("/index.html", "text/html"),
    ] {
        let response = host.call(get(path), next(StatusCode::NOT_FOUND)).await;
        assert_eq!(response.headers()[header::CONTENT_TYPE], mime, "{path}");
    }
}

#[tokio::test]
async fn unresolved_paths_delegate_to_next() {
    init_tracing();
    let host = SiteHost::new(options(), site());
    let delegated = Arc::new(AtomicUsize::new(0));

    let response = host
        .call(
            get("/not-bundled.bin"),
            counting_next(StatusCode::NOT_FOUND, delegated.clone()),
        )
        .await;

    assert_eq!(delegated.load(Ordering::SeqCst), 1);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(response).await, Bytes::from_static(b"fallthrough"));
}

#[tokio::test]
async fn delegation_leaves_the_next_status_untouched() {
    // The next handler's status must survive delegation verbatim, even an
    // unusual one.
    let host = SiteHost::new(options(), site());

    let response = host
        .call(get("/missing"), next(StatusCode::IM_A_TEAPOT))
        .await;
    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
}

#[tokio::test]
async fn custom_resolver_supplies_missing_resources() {
    let opts = options().resolve_custom_resource(|name, embedded| {
        if name == "generated/extra.js" {
            assert!(embedded.is_none());
            Some(Bytes::from_static(b"export {}"))
        } else {
            embedded
        }
    });
    let host = SiteHost::new(opts, site());

    let response = host
        .call(get("/generated/extra.js"), next(StatusCode::NOT_FOUND))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/javascript"
    );
    assert_eq!(body_bytes(response).await, Bytes::from_static(b"export {}"));
}

#[tokio::test]
async fn custom_resolver_overrides_embedded_bytes() {
    let opts = options().resolve_custom_resource(|name, embedded| {
        if name == "style.css" {
            Some(Bytes::from_static(b"body { margin: 8px }"))
        } else {
            embedded
        }
    });
    let host = SiteHost::new(opts, site());

    let response = host.call(get("/style.css"), next(StatusCode::NOT_FOUND)).await;
    assert_eq!(body_bytes(response).await, Bytes::from_static(b"body { margin: 8px }"));
}

#[tokio::test]
async fn custom_resolver_veto_forces_delegation() {
    // The hook's answer is authoritative: returning None delegates even
    // though the embedded match exists.
    let opts = options().resolve_custom_resource(|_, _| None);
    let host = SiteHost::new(opts, site());
    let delegated = Arc::new(AtomicUsize::new(0));

    let response = host
        .call(
            get("/index.html"),
            counting_next(StatusCode::NOT_FOUND, delegated.clone()),
        )
        .await;

    assert_eq!(delegated.load(Ordering::SeqCst), 1);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_requests_are_idempotent() {
    let host = SiteHost::new(options(), site());

    let mut seen = Vec::new();
    for _ in 0..3 {
        let response = host.call(get("/app.js"), next(StatusCode::NOT_FOUND)).await;
        assert_eq!(response.status(), StatusCode::OK);
        seen.push(body_bytes(response).await);
    }
    assert_eq!(seen[0], seen[1]);
    assert_eq!(seen[1], seen[2]);
}

#[tokio::test]
async fn mounted_document_is_served_under_the_json_name() {
    let document = Document::new("Orders API", "1.0.0").base_path("/api");
    let host = SiteHost::new(options(), site()).with_document(document);

    let response = host.call(get("/swagger.json"), next(StatusCode::NOT_FOUND)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let parsed: Document =
        serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(parsed.swagger, "2.0");
    assert_eq!(parsed.base_path.as_deref(), Some("/api"));
}

#[tokio::test]
async fn custom_host_hook_rewrites_the_advertised_host() {
    let opts = options().custom_host(|req| {
        req.headers()
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("fallback.example.com")
            .to_string()
    });
    let document = Document::new("Orders API", "1.0.0");
    let host = SiteHost::new(opts, site()).with_document(document);

    let req = http::Request::builder()
        .method(Method::GET)
        .uri("/swagger.json")
        .header(header::HOST, "api.internal.example.com")
        .body(Bytes::new())
        .unwrap();

    let response = host
        .call(Request::from_http(req), next(StatusCode::NOT_FOUND))
        .await;
    let parsed: Document =
        serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(parsed.host.as_deref(), Some("api.internal.example.com"));
}

#[tokio::test]
async fn without_a_mounted_document_the_json_name_delegates() {
    let host = SiteHost::new(options(), site());

    let response = host.call(get("/swagger.json"), next(StatusCode::NOT_FOUND)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn site_host_composes_in_a_layer_stack() {
    let mut stack = LayerStack::new();
    stack.push(Box::new(SiteHost::new(options(), site())));

    let hit = stack
        .execute(get("/index.html"), next(StatusCode::NOT_FOUND))
        .await;
    assert_eq!(hit.status(), StatusCode::OK);

    let miss = stack
        .execute(get("/api/orders"), next(StatusCode::NOT_FOUND))
        .await;
    assert_eq!(miss.status(), StatusCode::NOT_FOUND);
}
