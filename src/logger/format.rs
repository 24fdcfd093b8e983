//! Access log formatting
//!
//! Supports the Common Log Format and a JSON structured variant.

use chrono::Local;

/// One request/response exchange, as recorded for the access log.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, POST, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    /// Request processing time in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// New entry stamped with the current local time.
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            status: 200,
            body_bytes: 0,
            request_time_us: 0,
        }
    }

    /// Format according to the configured format name.
    ///
    /// Unknown names fall back to the common format.
    pub fn format(&self, format: &str) -> String {
        match format {
            "json" => self.format_json(),
            _ => self.format_common(),
        }
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$method $path" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.status,
            self.body_bytes,
        )
    }

    /// JSON structured log line
    fn format_json(&self) -> String {
        // Hand-built; the entry has no nested or optional fields
        format!(
            r#"{{"remote_addr":"{}","time":"{}","method":"{}","path":"{}","status":{},"body_bytes":{},"request_time_us":{}}}"#,
            escape_json(&self.remote_addr),
            self.time.to_rfc3339(),
            escape_json(&self.method),
            escape_json(&self.path),
            self.status,
            self.body_bytes,
            self.request_time_us,
        )
    }
}

/// Escape special characters for a JSON string value
fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1".to_string(),
            "POST".to_string(),
            "/api/validate-plate".to_string(),
        );
        entry.status = 200;
        entry.body_bytes = 87;
        entry.request_time_us = 2400;
        entry
    }

    #[test]
    fn test_common_format() {
        let line = entry().format("common");
        assert!(line.starts_with("127.0.0.1 - - ["));
        assert!(line.contains("\"POST /api/validate-plate\""));
        assert!(line.ends_with("200 87"));
    }

    #[test]
    fn test_json_format() {
        let line = entry().format("json");
        assert!(line.contains(r#""remote_addr":"127.0.0.1""#));
        assert!(line.contains(r#""method":"POST""#));
        assert!(line.contains(r#""status":200"#));
        assert!(line.contains(r#""request_time_us":2400"#));
    }

    #[test]
    fn test_unknown_format_falls_back_to_common() {
        let e = entry();
        assert_eq!(e.format("nonsense"), e.format("common"));
    }

    #[test]
    fn test_json_escaping() {
        let mut e = entry();
        e.path = "/a\"b".to_string();
        assert!(e.format("json").contains(r#""path":"/a\"b""#));
    }
}
