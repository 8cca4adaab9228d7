use crate::core::config::ConfigError;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustodyError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid private key: {0}")]
    InvalidKey(String),

    #[error("encoding error: {0}")]
    Encode(String),

    #[error(transparent)]
    Request(Box<RequestError>),
}

impl From<RequestError> for CustodyError {
    fn from(err: RequestError) -> Self {
        Self::Request(Box::new(err))
    }
}

impl CustodyError {
    /// The structured request error, when this failure happened past dispatch.
    pub fn as_request_error(&self) -> Option<&RequestError> {
        match self {
            Self::Request(err) => Some(err),
            _ => None,
        }
    }
}

/// Structured error for a failed API call.
///
/// Created at the first point of failure and returned as-is; which fields are
/// populated tells the caller what went wrong:
/// transport failures carry only `source`, non-200 responses carry the HTTP
/// status as `code` plus the raw `body`, business rejections carry the
/// service `code` and `message`, and decode failures carry `source` plus the
/// undecodable `body`.
#[derive(Debug, Default)]
pub struct RequestError {
    pub path: String,
    pub method: Option<String>,
    pub param: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
    pub body: Option<Vec<u8>>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RequestError {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        self.source = Some(source.into());
        self
    }

    /// True when the request reached the service and was rejected by it.
    ///
    /// Business rejections carry only the envelope code and message; transport
    /// failures carry `source`, and non-200 statuses carry the raw `body`.
    pub fn is_business(&self) -> bool {
        self.code.is_some() && self.source.is_none() && self.body.is_none()
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request to {} failed", self.path)?;
        if let Some(method) = &self.method {
            write!(f, ", method: {}", method)?;
        }
        if let Some(param) = &self.param {
            write!(f, ", param: {}", param)?;
        }
        if let Some(code) = &self.code {
            write!(f, ", code: {}", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ", message: {}", message)?;
        }
        if let Some(body) = &self.body {
            write!(f, ", body: {}", String::from_utf8_lossy(body))?;
        }
        if let Some(source) = &self.source {
            write!(f, ", error: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.source {
            Some(err) => Some(err.as_ref()),
            None => None,
        }
    }
}
