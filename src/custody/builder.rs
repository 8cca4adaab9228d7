use crate::core::config::CustodyConfig;
use crate::core::errors::CustodyError;
use crate::core::kernel::{
    ReqwestRest, RequestIdProvider, RestClientBuilder, RestClientConfig, RsaSigner,
    SequentialRequestId,
};
use crate::custody::client::CustodyClient;
use crate::custody::endpoints;
use std::sync::Arc;

/// Build a custody client from credentials.
///
/// The private key is parsed here; malformed key material fails the build
/// rather than the first request.
pub fn build_client(config: &CustodyConfig) -> Result<CustodyClient<ReqwestRest>, CustodyError> {
    build_client_with_request_ids(config, Arc::new(SequentialRequestId::new()))
}

/// Build a custody client with an injected request-id provider.
pub fn build_client_with_request_ids(
    config: &CustodyConfig,
    request_ids: Arc<dyn RequestIdProvider>,
) -> Result<CustodyClient<ReqwestRest>, CustodyError> {
    let signer = Arc::new(RsaSigner::new(config.api_key(), config.private_key())?);

    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| endpoints::DEFAULT_BASE_URL.to_string());

    let rest_config = RestClientConfig::new(base_url, "ceffu".to_string());
    let rest = RestClientBuilder::new(rest_config)
        .with_signer(signer)
        .build()?;

    Ok(CustodyClient::new(rest, request_ids))
}
