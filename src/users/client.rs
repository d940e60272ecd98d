//! HTTP client for the users endpoint
//!
//! Issues a single unauthenticated GET and decodes the body as a JSON array
//! of user records.

use super::traits::{FetchError, User, UserSource};
use async_trait::async_trait;

/// Default users endpoint
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Reads users over HTTP
pub struct HttpUserSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUserSource {
    /// Create a new client for `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn list_users(&self) -> Result<Vec<User>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port and return its URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/users")
    }

    #[tokio::test]
    async fn test_list_users_decodes_records() {
        let url = serve_once("200 OK", r#"[{"id":1,"name":"Ann","email":"a@x.com"}]"#).await;
        let source = HttpUserSource::new(url).unwrap();

        let users = source.list_users().await.unwrap();

        assert_eq!(
            users,
            vec![User {
                id: 1,
                name: "Ann".to_string(),
                email: "a@x.com".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_list_users_reports_http_status() {
        let url = serve_once("500 Internal Server Error", "oops").await;
        let source = HttpUserSource::new(url).unwrap();

        let err = source.list_users().await.unwrap_err();
        assert_eq!(err, FetchError::Status(500));
    }

    #[tokio::test]
    async fn test_list_users_reports_malformed_body() {
        let url = serve_once("200 OK", r#"{"not":"a list"}"#).await;
        let source = HttpUserSource::new(url).unwrap();

        let err = source.list_users().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_list_users_reports_connection_failure() {
        // Bind then drop so the port is very likely closed
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpUserSource::new(format!("http://{addr}/users")).unwrap();
        let err = source.list_users().await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }

    #[test]
    fn test_empty_endpoint_fails_as_request_error() {
        let source = HttpUserSource::new("").unwrap();
        let result = tokio_test::block_on(source.list_users());
        assert!(matches!(result, Err(FetchError::Request(_))));
    }
}
