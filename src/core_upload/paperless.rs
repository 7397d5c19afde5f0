use crate::config::PaperlessConfig;
use crate::constants::{DOCUMENT_FIELD, POST_DOCUMENT_PATH};
use crate::core_upload::error::UploadError;
use crate::core_upload::sink::UploadSink;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use std::path::Path;
use url::Url;

/// Relays uploads to the Paperless-ngx `post_document` endpoint.
pub struct PaperlessSink {
    client: Client,
    endpoint: Url,
    token: String,
}

impl PaperlessSink {
    pub fn new(config: &PaperlessConfig) -> Result<Self, UploadError> {
        if config.token.trim().is_empty() {
            return Err(UploadError::Configuration(
                "PAPERLESS_TOKEN environment variable is required".to_string(),
            ));
        }

        let endpoint = format!("{}{}", config.url.trim_end_matches('/'), POST_DOCUMENT_PATH);
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| UploadError::Configuration(format!("invalid URL {endpoint:?}: {e}")))?;

        let client = Client::builder().timeout(config.http_timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            token: config.token.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Paperless only wants the base name, clients sometimes send a path.
fn document_name(filename: &str) -> String {
    Path::new(filename)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

#[async_trait]
impl UploadSink for PaperlessSink {
    async fn upload(&self, filename: &str, payload: Vec<u8>) -> Result<(), UploadError> {
        debug!(
            "Posting {} ({} bytes) to {}",
            filename,
            payload.len(),
            self.endpoint
        );

        let part = Part::bytes(payload).file_name(document_name(filename));
        let form = Form::new().part(DOCUMENT_FIELD, part);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(
            "Document uploaded to Paperless-ngx: filename={} status={}",
            filename,
            status.as_u16()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn config(url: &str, token: &str) -> PaperlessConfig {
        PaperlessConfig {
            url: url.to_string(),
            token: token.to_string(),
            http_timeout: Duration::from_secs(5),
        }
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
    }

    /// Serves exactly one HTTP request and returns what the client sent.
    async fn one_shot_server(status_line: &'static str, body: &'static str) -> (String, JoinHandle<Vec<u8>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buffer = [0u8; 4096];

            loop {
                let n = socket.read(&mut buffer).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buffer[..n]);

                let Some(head_end) = find(&request, b"\r\n\r\n") else {
                    continue;
                };
                let head = String::from_utf8_lossy(&request[..head_end]).to_ascii_lowercase();
                let content_length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok());

                let complete = match content_length {
                    Some(length) => request.len() >= head_end + 4 + length,
                    None => request.ends_with(b"0\r\n\r\n"),
                };
                if complete {
                    break;
                }
            }

            let response = format!(
                "{}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            request
        });

        (url, handle)
    }

    #[test]
    fn test_requires_token() {
        let result = PaperlessSink::new(&config("http://localhost:8000", ""));
        assert!(matches!(result, Err(UploadError::Configuration(_))));
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let sink = PaperlessSink::new(&config("http://paperless:8000/", "t")).unwrap();
        assert_eq!(
            sink.endpoint().as_str(),
            "http://paperless:8000/api/documents/post_document/"
        );

        let sink = PaperlessSink::new(&config("http://paperless:8000", "t")).unwrap();
        assert_eq!(
            sink.endpoint().as_str(),
            "http://paperless:8000/api/documents/post_document/"
        );
    }

    #[test]
    fn test_document_name() {
        assert_eq!(document_name("scan.pdf"), "scan.pdf");
        assert_eq!(document_name("inbox/2024/scan.pdf"), "scan.pdf");
        assert_eq!(document_name("/scan.pdf"), "scan.pdf");
    }

    #[tokio::test]
    async fn test_upload_posts_multipart_document() {
        let (url, server) = one_shot_server("HTTP/1.1 200 OK", "\"task-id\"").await;
        let sink = PaperlessSink::new(&config(&url, "secret")).unwrap();

        sink.upload("scans/scan.pdf", b"%PDF-1.4 body".to_vec())
            .await
            .unwrap();

        let request = server.await.unwrap();
        let text = String::from_utf8_lossy(&request);
        let lower = text.to_ascii_lowercase();
        assert!(text.starts_with("POST /api/documents/post_document/ HTTP/1.1"));
        assert!(lower.contains("authorization: token secret"));
        assert!(lower.contains("content-type: multipart/form-data; boundary="));
        assert!(text.contains("name=\"document\""));
        assert!(text.contains("filename=\"scan.pdf\""));
        assert!(find(&request, b"%PDF-1.4 body").is_some());
    }

    #[tokio::test]
    async fn test_upload_rejected_status() {
        let (url, server) = one_shot_server("HTTP/1.1 400 Bad Request", "invalid document").await;
        let sink = PaperlessSink::new(&config(&url, "secret")).unwrap();

        let err = sink.upload("scan.pdf", b"data".to_vec()).await.unwrap_err();
        match err {
            UploadError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "invalid document");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_upload_requires_exactly_200() {
        let (url, server) = one_shot_server("HTTP/1.1 202 Accepted", "").await;
        let sink = PaperlessSink::new(&config(&url, "secret")).unwrap();

        let err = sink.upload("scan.pdf", b"data".to_vec()).await.unwrap_err();
        assert!(matches!(err, UploadError::Rejected { status: 202, .. }));
        assert_eq!(err.to_ftp_response(), "550 Upload failed");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_upload_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let sink = PaperlessSink::new(&config(&url, "secret")).unwrap();
        let err = sink.upload("scan.pdf", b"data".to_vec()).await.unwrap_err();
        assert!(matches!(err, UploadError::Request(_)));
    }
}
