use crate::core::errors::{CustodyError, RequestError};
use crate::core::kernel::codec::{self, decode_envelope};
use crate::core::kernel::signer::Signer;
use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{instrument, trace};

/// REST client trait for the signed request pipeline.
///
/// GET requests canonical-encode the request value into the query string and
/// sign that string; POST requests sign the exact JSON body bytes that go on
/// the wire. The typed variants decode the response envelope and classify the
/// outcome; the raw variants stop after the HTTP status check.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Make a signed GET request, returning the raw response body.
    async fn get<P>(&self, endpoint: &str, params: &P) -> Result<Vec<u8>, CustodyError>
    where
        P: Serialize + Sync;

    /// Make a signed GET request and decode the response envelope.
    async fn get_json<T, P>(&self, endpoint: &str, params: &P) -> Result<Option<T>, CustodyError>
    where
        T: DeserializeOwned,
        P: Serialize + Sync;

    /// Make a signed POST request, returning the raw response body.
    async fn post<P>(&self, endpoint: &str, body: &P) -> Result<Vec<u8>, CustodyError>
    where
        P: Serialize + Sync;

    /// Make a signed POST request and decode the response envelope.
    async fn post_json<T, P>(&self, endpoint: &str, body: &P) -> Result<Option<T>, CustodyError>
    where
        T: DeserializeOwned,
        P: Serialize + Sync;
}

/// Current Unix time in milliseconds, as stamped onto every request.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as i64)
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Service name for logging and tracing
    pub service_name: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    pub fn new(base_url: String, service_name: String) -> Self {
        Self {
            base_url,
            service_name,
            timeout_seconds: 20,
            user_agent: "ceffu-rs/0.1".to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
        }
    }

    /// Set the signer for request authentication
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, CustodyError> {
        let signer = self.signer.ok_or_else(|| {
            crate::core::config::ConfigError::InvalidConfiguration(
                "a signer is required".to_string(),
            )
        })?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                crate::core::config::ConfigError::InvalidConfiguration(format!(
                    "Failed to build HTTP client: {}",
                    e
                ))
            })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
            signer,
        })
    }
}

/// Implementation of [`RestClient`] using reqwest.
///
/// Holds only immutable state after construction and is safe to share across
/// concurrently running operations. Timeouts and cancellation are the
/// transport's concern: the configured client timeout bounds each call, and
/// dropping the future aborts the in-flight request.
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    signer: Arc<dyn Signer>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    fn build_url(&self, endpoint: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.config.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.config.base_url, endpoint, query)
        }
    }

    /// Issue the HTTP call with the signed headers and classify the outcome.
    #[instrument(skip(self, query, body), fields(service = %self.config.service_name, method = %method, endpoint = %endpoint))]
    async fn dispatch(
        &self,
        method: Method,
        endpoint: &str,
        query: &str,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, CustodyError> {
        let url = self.build_url(endpoint, query);

        // The canonical string is the query for GET, the body bytes for POST.
        let payload: &[u8] = if body.is_empty() {
            query.as_bytes()
        } else {
            &body
        };
        let headers = self.signer.signed_headers(payload);

        let mut request = self.client.request(method.clone(), &url);
        for (key, value) in headers {
            request = request.header(key, value);
        }
        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            RequestError::new(endpoint)
                .with_method(method.as_str())
                .with_source(e)
        })?;

        self.handle_response(endpoint, method.as_str(), response)
            .await
    }

    /// Read the response body, treating any status other than 200 as failure.
    #[instrument(skip(self, response), fields(service = %self.config.service_name, status = %response.status()))]
    async fn handle_response(
        &self,
        endpoint: &str,
        method: &str,
        response: Response,
    ) -> Result<Vec<u8>, CustodyError> {
        let status = response.status();

        if status != StatusCode::OK {
            // Keep whatever body the service sent for diagnostics; a failed
            // read leaves it empty rather than masking the status error.
            let body = response
                .bytes()
                .await
                .map_or_else(|_| Vec::new(), |b| b.to_vec());
            return Err(RequestError::new(endpoint)
                .with_method(method)
                .with_code(status.as_u16().to_string())
                .with_message(String::from_utf8_lossy(&body).into_owned())
                .with_body(body)
                .into());
        }

        let body = response.bytes().await.map_err(|e| {
            RequestError::new(endpoint)
                .with_method(method)
                .with_source(e)
        })?;

        trace!("response body: {}", String::from_utf8_lossy(&body));
        Ok(body.to_vec())
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    async fn get<P>(&self, endpoint: &str, params: &P) -> Result<Vec<u8>, CustodyError>
    where
        P: Serialize + Sync,
    {
        let query = codec::canonical_query(params)?;
        self.dispatch(Method::GET, endpoint, &query, Vec::new())
            .await
    }

    async fn get_json<T, P>(&self, endpoint: &str, params: &P) -> Result<Option<T>, CustodyError>
    where
        T: DeserializeOwned,
        P: Serialize + Sync,
    {
        let raw = self.get(endpoint, params).await?;
        decode_envelope(endpoint, Method::GET.as_str(), &raw)
    }

    async fn post<P>(&self, endpoint: &str, body: &P) -> Result<Vec<u8>, CustodyError>
    where
        P: Serialize + Sync,
    {
        let body = codec::canonical_body(body)?;
        self.dispatch(Method::POST, endpoint, "", body).await
    }

    async fn post_json<T, P>(&self, endpoint: &str, body: &P) -> Result<Option<T>, CustodyError>
    where
        T: DeserializeOwned,
        P: Serialize + Sync,
    {
        let raw = self.post(endpoint, body).await?;
        decode_envelope(endpoint, Method::POST.as_str(), &raw)
    }
}
