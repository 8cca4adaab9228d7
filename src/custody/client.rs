use crate::core::errors::{CustodyError, RequestError};
use crate::core::kernel::rest::now_millis;
use crate::core::kernel::{RequestIdProvider, RestClient};
use crate::custody::endpoints;
use crate::custody::types::{
    AutoCollection, CreateSubWalletRequest, DepositAddress, DepositAddressQuery,
    DepositHistoryPage, DepositHistoryQuery, SubWalletInfo, Transaction, Transfer,
    TransferDetail, TransferDetailWithExchangeRequest, TransferRequest,
    TransferWithExchangeRequest, WithdrawalDetailQuery, WithdrawalOrder, WithdrawalRequest,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

/// Typed client for the custody Open API.
///
/// One method per endpoint; every method stamps the millisecond timestamp
/// (and, for mutating calls, a fresh request id) before handing the request
/// value to the signed pipeline. The client holds no mutable state besides
/// the request-id counter and is safe to share across concurrent callers.
pub struct CustodyClient<R: RestClient> {
    rest: R,
    request_ids: Arc<dyn RequestIdProvider>,
}

/// Caller-supplied request value plus the per-call identity fields.
///
/// Flattening keeps one source of truth for the wire fields while making it
/// impossible for callers to pre-set the request id.
#[derive(Serialize)]
struct Stamped<'a, P: Serialize> {
    #[serde(flatten)]
    request: &'a P,
    #[serde(rename = "requestId")]
    request_id: i64,
    timestamp: i64,
}

/// Caller-supplied query value plus the timestamp stamp.
#[derive(Serialize)]
struct Timestamped<'a, P: Serialize> {
    #[serde(flatten)]
    query: &'a P,
    timestamp: i64,
}

fn require_data<T>(path: &str, method: &str, data: Option<T>) -> Result<T, CustodyError> {
    data.ok_or_else(|| {
        RequestError::new(path)
            .with_method(method)
            .with_param("data")
            .with_message("response data is missing")
            .into()
    })
}

impl<R: RestClient> CustodyClient<R> {
    pub fn new(rest: R, request_ids: Arc<dyn RequestIdProvider>) -> Self {
        Self { rest, request_ids }
    }

    /// Create a sub wallet under the given parent wallet.
    ///
    /// Only applicable to parent Prime wallets.
    #[instrument(skip(self))]
    pub async fn create_sub_wallet(
        &self,
        parent_wallet_id: &str,
        wallet_name: Option<&str>,
        auto_collection: AutoCollection,
    ) -> Result<SubWalletInfo, CustodyError> {
        let request = CreateSubWalletRequest {
            parent_wallet_id: parent_wallet_id.to_string(),
            wallet_name: wallet_name.map(str::to_string),
            auto_collection,
            request_id: self.request_ids.next_id(),
            timestamp: now_millis(),
        };

        let data = self
            .rest
            .post_json(endpoints::CREATE_SUB_WALLET, &request)
            .await?;
        require_data(endpoints::CREATE_SUB_WALLET, "POST", data)
    }

    /// Get the deposit address for a wallet, coin symbol and network.
    ///
    /// The wallet id can be a parent wallet id or a sub wallet id.
    #[instrument(skip(self))]
    pub async fn get_deposit_address(
        &self,
        network: &str,
        coin_symbol: &str,
        wallet_id: i64,
    ) -> Result<DepositAddress, CustodyError> {
        let query = DepositAddressQuery {
            coin_symbol: coin_symbol.to_string(),
            network: network.to_string(),
            timestamp: now_millis(),
            wallet_id,
        };

        let data = self
            .rest
            .get_json(endpoints::DEPOSIT_ADDRESS, &query)
            .await?;
        require_data(endpoints::DEPOSIT_ADDRESS, "GET", data)
    }

    /// Get deposit history for a wallet.
    ///
    /// A prime wallet id returns history across its sub wallets; a sub
    /// wallet id returns that sub wallet's history only.
    #[instrument(skip(self, query))]
    pub async fn get_deposit_history(
        &self,
        query: &DepositHistoryQuery,
    ) -> Result<DepositHistoryPage, CustodyError> {
        let stamped = Timestamped {
            query,
            timestamp: now_millis(),
        };

        let data = self
            .rest
            .get_json(endpoints::DEPOSIT_HISTORY, &stamped)
            .await?;
        require_data(endpoints::DEPOSIT_HISTORY, "GET", data)
    }

    /// Transfer an asset between a sub wallet and its prime wallet.
    #[instrument(skip(self))]
    pub async fn transfer(
        &self,
        coin_symbol: &str,
        amount: Decimal,
        from_wallet_id: i64,
        to_wallet_id: i64,
    ) -> Result<Transfer, CustodyError> {
        let request = TransferRequest {
            coin_symbol: coin_symbol.to_string(),
            amount,
            from_wallet_id,
            to_wallet_id,
            request_id: self.request_ids.next_id(),
            timestamp: now_millis(),
        };

        let data = self.rest.post_json(endpoints::TRANSFER, &request).await?;
        require_data(endpoints::TRANSFER, "POST", data)
    }

    /// Withdraw funds to an external address or another custody wallet.
    ///
    /// Applicable to parent Qualified, Cosign and parent Prime wallets. When
    /// the destination is a custody wallet address, whitelisting is
    /// bypassed. The amount excludes the network fee; use
    /// [`Self::withdrawal_detail`] to follow the order afterwards.
    #[instrument(skip(self, request))]
    pub async fn withdraw(
        &self,
        request: &WithdrawalRequest,
    ) -> Result<WithdrawalOrder, CustodyError> {
        let stamped = Stamped {
            request,
            request_id: self.request_ids.next_id(),
            timestamp: now_millis(),
        };

        let data = self
            .rest
            .post_json(endpoints::WITHDRAWAL, &stamped)
            .await?;
        require_data(endpoints::WITHDRAWAL, "POST", data)
    }

    /// Get withdrawal details by order view id.
    ///
    /// Returns `None` when no withdrawal matches the id. The amount includes
    /// the fee when the fee was paid in the same coin symbol.
    #[instrument(skip(self))]
    pub async fn withdrawal_detail(
        &self,
        order_view_id: &str,
    ) -> Result<Option<Transaction>, CustodyError> {
        let query = WithdrawalDetailQuery {
            order_view_id: order_view_id.to_string(),
            request_id: self.request_ids.next_id().to_string(),
            timestamp: now_millis(),
        };

        self.rest
            .get_json(endpoints::WITHDRAWAL_DETAIL, &query)
            .await
    }

    /// Transfer assets from a prime wallet to a bound exchange account.
    ///
    /// Currently supported in the custody-to-exchange direction only; the
    /// binding is managed in the web portal.
    #[instrument(skip(self, request))]
    pub async fn transfer_with_exchange(
        &self,
        request: &TransferWithExchangeRequest,
    ) -> Result<Option<Transfer>, CustodyError> {
        let stamped = Stamped {
            request,
            request_id: self.request_ids.next_id(),
            timestamp: now_millis(),
        };

        self.rest
            .post_json(endpoints::TRANSFER_WITH_EXCHANGE, &stamped)
            .await
    }

    /// Get exchange-transfer details by order view id.
    ///
    /// Returns `None` when no transfer matches the id.
    #[instrument(skip(self))]
    pub async fn transfer_detail_with_exchange(
        &self,
        order_view_id: &str,
        wallet_id: i64,
    ) -> Result<Option<TransferDetail>, CustodyError> {
        let request = TransferDetailWithExchangeRequest {
            order_view_id: order_view_id.to_string(),
            request_id: self.request_ids.next_id().to_string(),
            timestamp: now_millis(),
            wallet_id,
        };

        self.rest
            .post_json(endpoints::TRANSFER_DETAIL_WITH_EXCHANGE, &request)
            .await
    }
}
