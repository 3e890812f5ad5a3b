use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

/// Middleware to set cache control headers
/// - Health probes: revalidated on every request
/// - API responses: never cached, every submit must reach the relay
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_probe = req.uri().path() == "/health";
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    if is_probe {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}
