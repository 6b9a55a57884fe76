use std::time::Duration;

use engine_logging::{engine_debug, engine_warn};
use reqwest::header::CONTENT_TYPE;

use crate::{CancelReply, ServiceError, StartReply, StartRequest};

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Must cover a whole remote run: `/start` answers only when it ends.
    pub request_timeout: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30 * 60),
        }
    }
}

/// The two calls the automation service understands.
#[async_trait::async_trait]
pub trait AutomationClient: Send + Sync {
    async fn start(&self, request: &StartRequest) -> Result<StartReply, ServiceError>;

    async fn cancel(&self) -> Result<CancelReply, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAutomationClient {
    settings: ServiceSettings,
    client: reqwest::Client,
}

impl ReqwestAutomationClient {
    pub fn new(settings: ServiceSettings) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ServiceError::Request(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ServiceError> {
        // Keep any path prefix on the base URL when joining.
        let mut base = self.settings.base_url.trim_end_matches('/').to_string();
        base.push('/');
        reqwest::Url::parse(&base)
            .and_then(|url| url.join(path))
            .map_err(|err| ServiceError::InvalidUrl(err.to_string()))
    }

    async fn post(&self, path: &str, body: Option<Vec<u8>>) -> Result<Vec<u8>, ServiceError> {
        let url = self.endpoint(path)?;
        engine_debug!("POST {}", url);

        let mut request = self.client.post(url);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            engine_warn!("POST /{} answered {}", path, status);
            return Err(ServiceError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait::async_trait]
impl AutomationClient for ReqwestAutomationClient {
    async fn start(&self, request: &StartRequest) -> Result<StartReply, ServiceError> {
        let body =
            serde_json::to_vec(request).map_err(|err| ServiceError::Request(err.to_string()))?;
        let bytes = self.post("start", Some(body)).await?;
        serde_json::from_slice(&bytes).map_err(|err| ServiceError::ResponseShape(err.to_string()))
    }

    async fn cancel(&self) -> Result<CancelReply, ServiceError> {
        let bytes = self.post("cancel", None).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(CancelReply::default());
        }
        serde_json::from_slice(&bytes).map_err(|err| ServiceError::ResponseShape(err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::Timeout;
    }
    ServiceError::Network(err.to_string())
}
