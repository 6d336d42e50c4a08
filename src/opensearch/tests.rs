//! OpenSearch Module Tests

#[cfg(test)]
mod tests {
    use crate::opensearch::handlers::{descriptor_xml, request_origin};
    use axum::http::{header, HeaderMap, HeaderValue};

    #[test]
    fn test_request_origin_from_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com:8080"));

        assert_eq!(request_origin(&headers), "http://example.com:8080");
    }

    #[test]
    fn test_request_origin_honors_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("bang.example"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));

        assert_eq!(request_origin(&headers), "https://bang.example");
    }

    #[test]
    fn test_request_origin_defaults() {
        assert_eq!(request_origin(&HeaderMap::new()), "http://localhost");
    }

    #[test]
    fn test_descriptor_declares_both_templates() {
        let xml = descriptor_xml("https://bang.example");

        assert!(xml.contains(r#"xmlns="http://a9.com/-/spec/opensearch/1.1/""#));
        assert!(xml.contains("<ShortName>Bangline</ShortName>"));
        assert!(xml.contains("<InputEncoding>UTF-8</InputEncoding>"));
        assert!(xml.contains(
            r#"template="https://bang.example/search?q={searchTerms}""#
        ));
        assert!(xml.contains(
            r#"template="https://bang.example/api/suggest?q={searchTerms}""#
        ));
    }
}
