use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;

const DESCRIPTOR_CONTENT_TYPE: &str = "application/opensearchdescription+xml";
const CACHE_ONE_DAY: &str = "public, max-age=86400";

/// `GET /opensearch.xml` — the OpenSearch description document, with search
/// and suggestion URL templates rooted at the requesting origin.
pub async fn handle_opensearch(headers: HeaderMap) -> impl IntoResponse {
    let origin = request_origin(&headers);
    (
        [
            (header::CONTENT_TYPE, DESCRIPTOR_CONTENT_TYPE),
            (header::CACHE_CONTROL, CACHE_ONE_DAY),
        ],
        descriptor_xml(&origin),
    )
}

/// Reconstructs the request origin from the Host header, honoring
/// `X-Forwarded-Proto` when a proxy terminates TLS.
pub(crate) fn request_origin(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    format!("{}://{}", scheme, host)
}

pub(crate) fn descriptor_xml(origin: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<OpenSearchDescription xmlns="http://a9.com/-/spec/opensearch/1.1/" xmlns:moz="http://www.mozilla.org/2006/browser/search/">
  <ShortName>Bangline</ShortName>
  <Description>Search with bangs and live suggestions</Description>
  <InputEncoding>UTF-8</InputEncoding>
  <Image width="16" height="16" type="image/x-icon">{origin}/favicon.ico</Image>
  <Url type="text/html" method="get" template="{origin}/search?q={{searchTerms}}"/>
  <Url type="application/x-suggestions+json" method="get" template="{origin}/api/suggest?q={{searchTerms}}"/>
  <moz:SearchForm>{origin}/</moz:SearchForm>
</OpenSearchDescription>
"#,
        origin = origin
    )
}
