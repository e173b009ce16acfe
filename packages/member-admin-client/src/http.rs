//! `reqwest` implementation of the member gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};

use member_admin_core::config::AdminConfig;
use member_admin_core::error::{AdminError, Result};
use member_admin_core::model::{MemberRecord, MemberSummary};

use crate::gateway::{classify_status, MemberGateway};

/// HTTP gateway to the member REST backend.
#[derive(Clone)]
pub struct HttpGateway {
    config: AdminConfig,
    http_client: reqwest::Client,
    access_token: Option<String>,
}

impl HttpGateway {
    /// Builds a gateway. `access_token` is sent as a bearer token.
    pub fn new(config: AdminConfig, access_token: Option<String>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http_client = builder
            .build()
            .map_err(|e| AdminError::TransportFailure(format!("Failed to build client: {}", e)))?;
        Ok(Self {
            config,
            http_client,
            access_token,
        })
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let url = self.config.resolve(url);
        let mut req = self
            .http_client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.access_token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Sends once and returns the status and body text.
    async fn send(&self, req: RequestBuilder, action: &str) -> Result<(u16, String)> {
        let response = req.send().await.map_err(|e| {
            tracing::warn!("{} failed before a response arrived: {}", action, e);
            AdminError::TransportFailure(e.to_string())
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AdminError::TransportFailure(e.to_string()))?;
        tracing::debug!("{} -> {}", action, status);
        Ok((status, body))
    }
}

#[async_trait]
impl MemberGateway for HttpGateway {
    async fn update(&self, url: &str, record: &MemberRecord) -> Result<()> {
        let req = self.request(Method::PUT, url).json(record);
        let (status, body) = self.send(req, &format!("PUT {}", url)).await?;
        classify_status(status, &body)
    }

    async fn delete(&self, url: &str) -> Result<()> {
        let req = self.request(Method::DELETE, url);
        let (status, body) = self.send(req, &format!("DELETE {}", url)).await?;
        classify_status(status, &body)
    }

    async fn list(&self) -> Result<Vec<MemberSummary>> {
        let url = self.config.members_url();
        let req = self.request(Method::GET, &url);
        let (status, body) = self.send(req, &format!("GET {}", url)).await?;
        classify_status(status, &body)?;
        serde_json::from_str(&body).map_err(|e| {
            AdminError::SerializationError(format!("Failed to parse member list: {}", e))
        })
    }

    async fn fetch(&self, url: &str) -> Result<MemberSummary> {
        let req = self.request(Method::GET, url);
        let (status, body) = self.send(req, &format!("GET {}", url)).await?;
        classify_status(status, &body)?;
        serde_json::from_str(&body)
            .map_err(|e| AdminError::SerializationError(format!("Failed to parse member: {}", e)))
    }

    fn collection_path(&self) -> &str {
        &self.config.members_path
    }
}
