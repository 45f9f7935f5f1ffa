//! Main client implementation

use crate::{
    types::*,
    ClientError, Config, Result,
};
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

/// Bucket Guard backend client
///
/// Holds no mutable state; a single instance can be shared across tasks.
pub struct GuardClient {
    config: Config,
    http: Client,
}

impl GuardClient {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            config
                .user_agent
                .parse()
                .map_err(|_| ClientError::Config(format!("invalid user agent: {}", config.user_agent)))?,
        );

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { config, http })
    }

    /// Create with default configuration (local backend)
    pub fn default_local() -> Result<Self> {
        Self::new(Config::default())
    }

    /// Create with endpoint URL
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        Self::new(Config::new(endpoint))
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ==================== Operations ====================

    /// List all buckets known to the backend
    #[instrument(skip(self))]
    pub async fn list_buckets(&self) -> Result<BucketList> {
        self.get("/buckets", None).await
    }

    /// Detect misconfigurations in a bucket
    #[instrument(skip(self))]
    pub async fn detect_issues(&self, bucket: &str) -> Result<DetectionReport> {
        self.get("/detect", Some(&[("bucket", bucket)])).await
    }

    /// Apply the remediation for an issue detected in a bucket
    ///
    /// Not idempotent: the backend runs the corrective action on every call.
    #[instrument(skip(self))]
    pub async fn remediate_issue(&self, bucket: &str, issue: &str) -> Result<Acknowledgement> {
        self.post("/remediate", &RemediateRequest { bucket, issue }).await
    }

    /// Register AWS credentials with the backend
    #[instrument(skip(self, access_key, secret_key))]
    pub async fn add_machine(&self, access_key: &str, secret_key: &str) -> Result<Acknowledgement> {
        self.post("/add-machine", &AddMachineRequest { access_key, secret_key })
            .await
    }

    // ==================== Helper Methods ====================

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&[(&str, &str)]>,
    ) -> Result<T> {
        let url = format!("{}{}", self.config.endpoint, path);
        let mut req = self.http.get(&url);

        if let Some(q) = query {
            req = req.query(q);
        }

        debug!("Sending GET request to {}", url);
        let response = req.send().await?;
        Self::decode(response).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.config.endpoint, path);

        debug!("Sending POST request to {}", url);
        let response = self.http.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!("Backend returned {}: {}", status, text);
            return Err(ClientError::from_error_body(&text, status.as_u16()));
        }

        let text = response.text().await?;
        debug!("Backend response: {}", text);
        Ok(serde_json::from_str(&text)?)
    }
}
