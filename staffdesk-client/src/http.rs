//! HTTP transport
//!
//! Thin wrapper over `reqwest` for the employee API. Every request carries
//! `Authorization: Bearer <token>` when a token is available, preferring a
//! fixed config token over the live session token. JSON bodies carry
//! `Content-Type: application/json`.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::Session;
use reqwest::{Client, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for the employee API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    session: Session,
}

impl HttpClient {
    /// Build a client from the configuration
    pub fn new(config: &ClientConfig, session: Session) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            session,
        })
    }

    /// The normalized base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth_header(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| self.session.token())
            .map(|t| format!("Bearer {t}"))
    }

    /// GET a JSON resource
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut req = self.client.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header(header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// POST a JSON body, expecting a JSON response
    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut req = self.client.post(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            req = req.header(header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// PUT a JSON body, expecting a JSON response
    pub async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut req = self.client.put(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            req = req.header(header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// DELETE a resource. The API answers with no content.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let mut req = self.client.delete(self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header(header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, text));
        }
        Ok(())
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, text));
        }
        Ok(response.json().await?)
    }

    fn status_error(status: StatusCode, body: String) -> ClientError {
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(body),
            StatusCode::NOT_FOUND => ClientError::NotFound(body),
            StatusCode::BAD_REQUEST => ClientError::Validation(body),
            _ => ClientError::Internal(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(config: ClientConfig, session: Session) -> HttpClient {
        HttpClient::new(&config, session).unwrap()
    }

    #[test]
    fn test_base_url_is_normalized() {
        let http = client(ClientConfig::new("http://localhost:3000/"), Session::new());
        assert_eq!(http.base_url(), "http://localhost:3000");
        assert_eq!(http.url("/employees/3"), "http://localhost:3000/employees/3");
    }

    #[test]
    fn test_auth_header_prefers_config_token() {
        let session = Session::new();
        session.login("demo", "demo").unwrap();

        let http = client(
            ClientConfig::new("http://localhost:3000").with_token("fixed"),
            session,
        );
        assert_eq!(http.auth_header().as_deref(), Some("Bearer fixed"));
    }

    #[test]
    fn test_auth_header_falls_back_to_session() {
        let session = Session::new();
        let http = client(ClientConfig::new("http://localhost:3000"), session.clone());
        assert!(http.auth_header().is_none());

        session.login("demo", "demo").unwrap();
        let auth = http.auth_header().unwrap();
        assert!(auth.starts_with("Bearer demo-token-"));

        session.logout();
        assert!(http.auth_header().is_none());
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            HttpClient::status_error(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::Unauthorized
        ));
        assert!(matches!(
            HttpClient::status_error(StatusCode::NOT_FOUND, String::new()),
            ClientError::NotFound(_)
        ));
        assert!(matches!(
            HttpClient::status_error(StatusCode::BAD_REQUEST, String::new()),
            ClientError::Validation(_)
        ));
        assert!(matches!(
            HttpClient::status_error(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            ClientError::Internal(_)
        ));
    }
}
