//! CORS policy applied to the landing page and API routes
//!
//! Every response gets a wildcard origin and the fixed method list.
//! `OPTIONS` is answered here with an empty 200 and never reaches a handler.
//! `/` and `/api/search` advertise only `Content-Type` as an allowed header.

use axum::{
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE,
        },
        HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";
pub const NARROW_ALLOW_HEADERS: &str = "Content-Type";

const NARROW_PATHS: [&str; 2] = ["/", "/api/search"];

pub async fn cors(req: Request, next: Next) -> Response {
    let preflight = req.method() == Method::OPTIONS;
    let narrow = !preflight && NARROW_PATHS.contains(&req.uri().path());

    let mut response = if preflight {
        StatusCode::OK.into_response()
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(if narrow {
            NARROW_ALLOW_HEADERS
        } else {
            ALLOW_HEADERS
        }),
    );
    headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static("3600"));

    response
}
