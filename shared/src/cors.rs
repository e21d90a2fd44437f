use lambda_http::http::{response::Builder, StatusCode};
use lambda_http::Response;

/// Cross-origin headers attached to every response, including errors and
/// the OPTIONS preflight, so browser callers can always read the body.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "authorization, x-client-info, apikey, content-type",
    ),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
];

/// Response builder with the fixed cross-origin headers already applied.
pub fn cors_response(status: StatusCode) -> Builder {
    let mut builder = Response::builder().status(status);
    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }
    builder
}
