use crate::ports::outbound::{IdentificationClient, RawScanResults};
use crate::shared::Result;
use anyhow::Context;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use std::thread;
use std::time::Duration;
use uuid::Uuid;

/// Public identification endpoint used when no URL is configured
pub const DEFAULT_API_URL: &str = "https://osskb.org/api/scan/direct";

/// Connection settings for the identification service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanossClientConfig {
    pub api_url: String,
    /// Sent as the `X-Session` header when set
    pub api_key: Option<String>,
    /// `identify` or `blacklist`; only sent together with `assets`
    pub scan_type: Option<String>,
    /// SBOM assets JSON attached to every request
    pub assets: Option<String>,
    /// Engine flags, passed through verbatim
    pub flags: Option<String>,
    pub timeout: Duration,
    /// Extra attempts after a failed request
    pub retries: u32,
}

impl Default for ScanossClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            scan_type: None,
            assets: None,
            flags: None,
            timeout: Duration::from_secs(ScanossApiClient::TIMEOUT_SECONDS),
            retries: 0,
        }
    }
}

/// ScanossApiClient adapter for the code identification service
///
/// Posts each batch as a multipart form: the fingerprints go in a `file`
/// part named `<uuid>.wfp`, the dominant hint in `context`.
///
/// # Retries
/// A failed request (transport error, non-2xx status or unreadable body)
/// is retried up to `retries` times with a linearly growing delay. The
/// last error is returned once attempts run out.
pub struct ScanossApiClient {
    client: Client,
    config: ScanossClientConfig,
}

impl ScanossApiClient {
    const TIMEOUT_SECONDS: u64 = 120;
    const RETRY_DELAY_MS: u64 = 500;

    /// Creates a client with the given settings
    pub fn new(config: ScanossClientConfig) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("wfp-scanner/{}", version);
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    fn build_form(&self, wfp: &str, context: Option<&str>) -> Result<Form> {
        let file = Part::text(wfp.to_string())
            .file_name(format!("{}.wfp", Uuid::new_v4()))
            .mime_str("application/octet-stream")?;
        let mut form = Form::new().part("file", file);

        if let Some(context) = context {
            form = form.text("context", context.to_string());
        }
        if let (Some(scan_type), Some(assets)) = (&self.config.scan_type, &self.config.assets) {
            form = form
                .text("type", scan_type.clone())
                .text("assets", assets.clone());
        }
        if let Some(flags) = &self.config.flags {
            form = form.text("flags", flags.clone());
        }
        Ok(form)
    }

    fn send_once(&self, wfp: &str, context: Option<&str>) -> Result<Option<RawScanResults>> {
        let mut request = self
            .client
            .post(&self.config.api_url)
            .multipart(self.build_form(wfp, context)?);
        if let Some(key) = &self.config.api_key {
            request = request.header("X-Session", key);
        }

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            anyhow::bail!("Identification service returned status code {}", status);
        }

        Self::parse_response_body(&body)
    }

    /// Parses a response body into per-file results, keeping key order
    ///
    /// An empty body or an empty object means the service had no data.
    ///
    /// # Errors
    /// Returns an error if the body is not a JSON object.
    pub fn parse_response_body(body: &str) -> Result<Option<RawScanResults>> {
        if body.trim().is_empty() {
            return Ok(None);
        }

        let results: RawScanResults = serde_json::from_str(body)
            .context("Identification service returned an invalid JSON object")?;

        if results.is_empty() {
            Ok(None)
        } else {
            Ok(Some(results))
        }
    }
}

impl IdentificationClient for ScanossApiClient {
    fn scan(&self, wfp: &str, context: Option<&str>) -> Result<Option<RawScanResults>> {
        let mut attempt = 0;
        loop {
            match self.send_once(wfp, context) {
                Ok(results) => return Ok(results),
                Err(e) if attempt >= self.config.retries => {
                    return Err(e.context(format!(
                        "Request to {} failed after {} attempt(s)",
                        self.config.api_url,
                        attempt + 1
                    )));
                }
                Err(_) => {
                    attempt += 1;
                    thread::sleep(Duration::from_millis(
                        Self::RETRY_DELAY_MS * u64::from(attempt),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::JoinHandle;

    /// Serves one canned HTTP response and hands back the raw request
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/api/scan/direct", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            request
        });
        (url, handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);

            let Some(end) = data.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&data[..end]).to_lowercase();
            if headers.contains("transfer-encoding: chunked") {
                if data.ends_with(b"0\r\n\r\n") {
                    break;
                }
                continue;
            }
            let length = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if data.len() >= end + 4 + length {
                break;
            }
        }
        String::from_utf8_lossy(&data).into_owned()
    }

    fn client_for(url: String) -> ScanossApiClient {
        ScanossApiClient::new(ScanossClientConfig {
            api_url: url,
            timeout: Duration::from_secs(5),
            ..ScanossClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = ScanossApiClient::new(ScanossClientConfig::default()).unwrap();
        assert_eq!(client.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_parse_response_body_keeps_order() {
        let results = ScanossApiClient::parse_response_body(
            r#"{"z.c": [], "a.c": [{"id": "none"}], "m.c": []}"#,
        )
        .unwrap()
        .unwrap();

        assert_eq!(results.keys().collect::<Vec<_>>(), vec!["z.c", "a.c", "m.c"]);
    }

    #[test]
    fn test_parse_response_body_no_data() {
        assert!(ScanossApiClient::parse_response_body("").unwrap().is_none());
        assert!(ScanossApiClient::parse_response_body(" \n").unwrap().is_none());
        assert!(ScanossApiClient::parse_response_body("{}").unwrap().is_none());
    }

    #[test]
    fn test_parse_response_body_rejects_non_objects() {
        assert!(ScanossApiClient::parse_response_body("[1, 2]").is_err());
        assert!(ScanossApiClient::parse_response_body("<html>").is_err());
    }

    #[test]
    fn test_scan_posts_multipart_form() {
        let (url, server) = serve_once("HTTP/1.1 200 OK", r#"{"a.c": []}"#);
        let client = ScanossApiClient::new(ScanossClientConfig {
            api_url: url,
            api_key: Some("secret-key".to_string()),
            scan_type: Some("identify".to_string()),
            assets: Some(r#"{"components":[]}"#.to_string()),
            flags: Some("16".to_string()),
            timeout: Duration::from_secs(5),
            retries: 0,
        })
        .unwrap();

        let results = client
            .scan("file=h,1,a.c\n4=aa\n", Some("zlib"))
            .unwrap()
            .unwrap();
        let request = server.join().unwrap();

        assert!(results.contains_key("a.c"));
        assert!(request.starts_with("POST /api/scan/direct"));
        assert!(request.to_lowercase().contains("x-session: secret-key"));
        assert!(request.to_lowercase().contains("user-agent: wfp-scanner/"));
        assert!(request.contains("name=\"file\"; filename=\""));
        assert!(request.contains(".wfp\""));
        assert!(request.contains("file=h,1,a.c\n4=aa\n"));
        assert!(request.contains("name=\"context\"\r\n\r\nzlib"));
        assert!(request.contains("name=\"type\"\r\n\r\nidentify"));
        assert!(request.contains("name=\"flags\"\r\n\r\n16"));
    }

    #[test]
    fn test_scan_without_context_omits_part() {
        let (url, server) = serve_once("HTTP/1.1 200 OK", "{}");
        let client = client_for(url);

        assert!(client.scan("file=h,1,a.c\n", None).unwrap().is_none());
        let request = server.join().unwrap();
        assert!(!request.contains("name=\"context\""));
        assert!(!request.to_lowercase().contains("x-session"));
    }

    #[test]
    fn test_scan_non_success_status_is_error() {
        let (url, server) = serve_once("HTTP/1.1 503 Service Unavailable", "busy");
        let client = client_for(url);

        let err = client.scan("file=h,1,a.c\n", None).unwrap_err();
        server.join().unwrap();
        assert!(format!("{:#}", err).contains("503"));
    }

    #[test]
    fn test_scan_connection_refused_after_retries() {
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = ScanossApiClient::new(ScanossClientConfig {
            api_url: format!("http://127.0.0.1:{}/", port),
            timeout: Duration::from_secs(5),
            retries: 1,
            ..ScanossClientConfig::default()
        })
        .unwrap();

        let err = client.scan("file=h,1,a.c\n", None).unwrap_err();
        assert!(err.to_string().contains("failed after 2 attempt(s)"));
    }
}
