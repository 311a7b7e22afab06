// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the [`AuthService`] port.
//!
//! Endpoints, relative to the configured base URL:
//!
//! - `POST auth/password/check`  body `{"password": "<current>"}`
//! - `POST auth/password/update` body `{"password": "<new>"}`
//!
//! Any 2xx status is success. Other statuses are read as
//! `{"error": "<message>"}` and the message is shown to the user verbatim.

use crate::application::port::{AuthFuture, AuthService};
use crate::domain::error::AuthError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const CHECK_PATH: &str = "auth/password/check";
const UPDATE_PATH: &str = "auth/password/update";

#[derive(Serialize)]
struct PasswordBody<'a> {
    password: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Talks to the remote authentication service with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpAuthService {
    /// Builds a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Network`] if the TLS backend cannot be initialized.
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn post(&self, path: &'static str, password: String) -> AuthFuture {
        let client = self.client.clone();
        let url = self.endpoint(path);
        let token = self.token.clone();

        Box::pin(async move {
            let mut request = client.post(&url).json(&PasswordBody {
                password: &password,
            });
            if let Some(token) = token {
                request = request.bearer_auth(token);
            }

            let response = request.send().await.map_err(|e| {
                tracing::warn!(endpoint = path, error = %e, "auth request failed");
                AuthError::Network(e.to_string())
            })?;

            let status = response.status();
            if status.is_success() {
                tracing::info!(endpoint = path, "auth request succeeded");
                return Ok(());
            }

            let body = response.text().await.unwrap_or_default();
            let err = rejection(status.as_u16(), &body);
            tracing::warn!(endpoint = path, status = status.as_u16(), error = %err, "auth request rejected");
            Err(err)
        })
    }
}

impl AuthService for HttpAuthService {
    fn check_password(&self, password: String) -> AuthFuture {
        self.post(CHECK_PATH, password)
    }

    fn update_password(&self, password: String) -> AuthFuture {
        self.post(UPDATE_PATH, password)
    }
}

/// Turns a non-2xx response into an [`AuthError`].
fn rejection(status: u16, body: &str) -> AuthError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error }) if !error.trim().is_empty() => AuthError::Rejected(error),
        _ if (500..600).contains(&status) => {
            AuthError::Network(format!("server error (HTTP {status})"))
        }
        _ => AuthError::InvalidResponse(format!("HTTP {status}")),
    }
}

/// Used when no service URL is configured. Every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredAuthService;

impl AuthService for UnconfiguredAuthService {
    fn check_password(&self, _password: String) -> AuthFuture {
        Box::pin(async { Err(AuthError::NotConfigured) })
    }

    fn update_password(&self, _password: String) -> AuthFuture {
        Box::pin(async { Err(AuthError::NotConfigured) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one HTTP response and returns the raw request it received.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(head_end) = text.find("\r\n\r\n") {
                    let length = text[..head_end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= head_end + 4 + length || n == 0 {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        (format!("http://{addr}/"), handle)
    }

    #[tokio::test]
    async fn check_posts_password_with_bearer_token() {
        let (base, server) = serve_once("HTTP/1.1 200 OK", "{}").await;
        let service =
            HttpAuthService::new(&base, Some("tok".into()), Duration::from_secs(5)).unwrap();

        service.check_password("hunter2".into()).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /auth/password/check "));
        assert!(request.to_lowercase().contains("authorization: bearer tok"));
        assert!(request.contains(r#"{"password":"hunter2"}"#));
    }

    #[tokio::test]
    async fn rejection_carries_service_message() {
        let (base, server) =
            serve_once("HTTP/1.1 403 Forbidden", r#"{"error":"Wrong password."}"#).await;
        let service = HttpAuthService::new(&base, None, Duration::from_secs(5)).unwrap();

        let err = service.update_password("new".into()).await.unwrap_err();

        assert_eq!(err, AuthError::Rejected("Wrong password.".into()));
        let request = server.await.unwrap();
        assert!(request.starts_with("POST /auth/password/update "));
        assert!(!request.to_lowercase().contains("authorization"));
    }

    #[test]
    fn rejection_without_json_body() {
        assert!(matches!(rejection(502, "<html>"), AuthError::Network(_)));
        assert!(matches!(rejection(400, ""), AuthError::InvalidResponse(_)));
        assert_eq!(
            rejection(401, r#"{"error":"Session expired."}"#),
            AuthError::Rejected("Session expired.".into())
        );
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let service =
            HttpAuthService::new("https://example.org/api/", None, Duration::from_secs(1)).unwrap();
        assert_eq!(
            service.endpoint(CHECK_PATH),
            "https://example.org/api/auth/password/check"
        );
    }

    #[tokio::test]
    async fn unconfigured_service_always_fails() {
        let service = UnconfiguredAuthService;
        assert_eq!(
            service.check_password("x".into()).await,
            Err(AuthError::NotConfigured)
        );
        assert_eq!(
            service.update_password("x".into()).await,
            Err(AuthError::NotConfigured)
        );
    }
}
