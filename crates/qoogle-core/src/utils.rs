//! Core utilities for Qoogle

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Host name of a citation link, falling back to the raw URI
pub fn source_host(uri: &str) -> String {
    url::Url::parse(uri)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| uri.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_host() {
        assert_eq!(
            source_host("https://blog.google/technology/ai/google-gemini-ai/"),
            "blog.google"
        );
        assert_eq!(source_host("not a url"), "not a url");
    }
}
