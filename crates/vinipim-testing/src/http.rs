//! Request builders and response readers for in-process router tests.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::response::Response;
use http::{HeaderValue, Method, Request, header};
use tower::ServiceExt;

/// `GET` request, optionally carrying a `Cookie` header.
pub fn get(uri: &str, cookie: Option<HeaderValue>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// `POST` request with a JSON body, optionally carrying a `Cookie` header.
pub fn post_json(uri: &str, body: serde_json::Value, cookie: Option<HeaderValue>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(router: Router, request: Request<Body>) -> Response {
    router.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Every `Set-Cookie` header on the response, in order.
pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_owned))
        .collect()
}

/// The `name=value` pair out of a `Set-Cookie` line, for replaying as a `Cookie` header.
pub fn cookie_pair(set_cookie: &str) -> HeaderValue {
    let pair = set_cookie.split(';').next().unwrap_or_default();
    HeaderValue::from_str(pair).unwrap()
}
