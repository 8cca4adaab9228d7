use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

// --- domain constants ---

/// Auto-sweeping of sub-wallet balances into the parent wallet.
///
/// Disabled suits API users who let the custodian keep the per-subaccount
/// ledger; enabled suits users who keep that ledger themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoCollection {
    #[default]
    Disabled,
    Enabled,
}

impl AutoCollection {
    pub fn code(self) -> i64 {
        match self {
            Self::Disabled => 0,
            Self::Enabled => 1,
        }
    }

    pub fn is_disabled(&self) -> bool {
        *self == Self::Disabled
    }
}

impl From<bool> for AutoCollection {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

impl Serialize for AutoCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

/// Direction of a transaction relative to the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionDirection {
    Deposit,
    Withdrawal,
}

impl TransactionDirection {
    pub fn code(self) -> i64 {
        match self {
            Self::Deposit => 10,
            Self::Withdrawal => 20,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            10 => Some(Self::Deposit),
            20 => Some(Self::Withdrawal),
            _ => None,
        }
    }
}

/// Direction of an internal transfer within the prime wallet structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
    ParentToSub,
    SubToParent,
    SubToSub,
}

impl TransferDirection {
    pub fn code(self) -> i64 {
        match self {
            Self::ParentToSub => 10,
            Self::SubToParent => 20,
            Self::SubToSub => 30,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            10 => Some(Self::ParentToSub),
            20 => Some(Self::SubToParent),
            30 => Some(Self::SubToSub),
            _ => None,
        }
    }
}

/// Lifecycle state of a transaction or transfer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Pending,
    Processing,
    Success,
    Confirmed,
    Failed,
}

impl TransactionStatus {
    pub fn code(self) -> i64 {
        match self {
            Self::Pending => 10,
            Self::Processing => 20,
            Self::Success => 30,
            Self::Confirmed => 40,
            Self::Failed => 99,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            10 => Some(Self::Pending),
            20 => Some(Self::Processing),
            30 => Some(Self::Success),
            40 => Some(Self::Confirmed),
            99 => Some(Self::Failed),
            _ => None,
        }
    }
}

/// On-chain versus internal (off-chain) settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferType {
    OnChain,
    Internal,
}

impl TransferType {
    pub fn code(self) -> i64 {
        match self {
            Self::OnChain => 10,
            Self::Internal => 20,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            10 => Some(Self::OnChain),
            20 => Some(Self::Internal),
            _ => None,
        }
    }
}

/// Direction of a transfer between custody and a bound exchange account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeTransferDirection {
    CustodyToExchange,
    ExchangeToCustody,
}

impl ExchangeTransferDirection {
    pub fn code(self) -> i64 {
        match self {
            Self::CustodyToExchange => 10,
            Self::ExchangeToCustody => 20,
        }
    }
}

impl Serialize for ExchangeTransferDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

/// Exchange bound to the custody account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangeCode {
    #[default]
    Binance,
}

impl ExchangeCode {
    pub fn code(self) -> i64 {
        match self {
            Self::Binance => 10,
        }
    }
}

impl Serialize for ExchangeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

// --- request values ---

#[derive(Debug, Clone, Serialize)]
pub struct CreateSubWalletRequest {
    #[serde(rename = "parentWalletId")]
    pub parent_wallet_id: String,
    /// Sub wallet name (max 20 characters).
    #[serde(rename = "walletName", skip_serializing_if = "Option::is_none")]
    pub wallet_name: Option<String>,
    #[serde(rename = "autoCollection", skip_serializing_if = "AutoCollection::is_disabled")]
    pub auto_collection: AutoCollection,
    #[serde(rename = "requestId")]
    pub request_id: i64,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepositAddressQuery {
    #[serde(rename = "coinSymbol")]
    pub coin_symbol: String,
    pub network: String,
    pub timestamp: i64,
    #[serde(rename = "walletId")]
    pub wallet_id: i64,
}

/// Filter for deposit history lookups.
///
/// The start/end interval must stay within the service's 30-day window.
/// Coin symbol and network narrow the result when set; all symbols and
/// networks otherwise.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DepositHistoryQuery {
    #[serde(rename = "walletId")]
    pub wallet_id: i64,
    #[serde(rename = "coinSymbol", skip_serializing_if = "Option::is_none")]
    pub coin_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(rename = "startTime")]
    pub start_time: i64,
    #[serde(rename = "endTime")]
    pub end_time: i64,
    #[serde(rename = "pageLimit")]
    pub page_limit: i64,
    #[serde(rename = "pageNo")]
    pub page_no: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferRequest {
    #[serde(rename = "coinSymbol")]
    pub coin_symbol: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "fromWalletId")]
    pub from_wallet_id: i64,
    #[serde(rename = "toWalletId")]
    pub to_wallet_id: i64,
    #[serde(rename = "requestId")]
    pub request_id: i64,
    pub timestamp: i64,
}

/// Withdrawal of funds to an external address or another custody wallet.
///
/// Exactly one of `withdrawal_address` and `to_wallet_id_str` must be set;
/// the other stays empty. The amount excludes the network fee; it is what
/// the receiver gets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WithdrawalRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(rename = "coinSymbol")]
    pub coin_symbol: String,
    /// Memo / address tag, for networks that require one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub network: String,
    #[serde(rename = "walletId")]
    pub wallet_id: i64,
    #[serde(rename = "withdrawalAddress")]
    pub withdrawal_address: String,
    #[serde(rename = "toWalletIdStr")]
    pub to_wallet_id_str: String,
    /// Caller-specified network fee; currently supported for ETH only.
    #[serde(
        rename = "customizeFeeAmount",
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub customize_fee_amount: Option<Decimal>,
}

/// Transfer between a prime wallet and a bound exchange account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransferWithExchangeRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(rename = "coinSymbol", skip_serializing_if = "Option::is_none")]
    pub coin_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<ExchangeTransferDirection>,
    #[serde(rename = "exchangeCode")]
    pub exchange_code: ExchangeCode,
    #[serde(rename = "exchangeUserId")]
    pub exchange_user_id: String,
    #[serde(rename = "parentWalletId")]
    pub parent_wallet_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WithdrawalDetailQuery {
    #[serde(rename = "orderViewId", skip_serializing_if = "String::is_empty")]
    pub order_view_id: String,
    #[serde(rename = "requestId", skip_serializing_if = "String::is_empty")]
    pub request_id: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferDetailWithExchangeRequest {
    #[serde(rename = "orderViewId", skip_serializing_if = "String::is_empty")]
    pub order_view_id: String,
    #[serde(rename = "requestId", skip_serializing_if = "String::is_empty")]
    pub request_id: String,
    pub timestamp: i64,
    #[serde(rename = "walletId")]
    pub wallet_id: i64,
}

// --- response values ---

#[derive(Debug, Clone, Deserialize)]
pub struct SubWalletInfo {
    #[serde(rename = "walletId")]
    pub wallet_id: i64,
    #[serde(rename = "walletIdStr", default)]
    pub wallet_id_str: String,
    #[serde(rename = "walletName", default)]
    pub wallet_name: String,
    #[serde(rename = "walletType")]
    pub wallet_type: u32,
    #[serde(rename = "parentWalletId", default)]
    pub parent_wallet_id: i64,
    #[serde(rename = "parentWalletIdStr", default)]
    pub parent_wallet_id_str: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepositAddress {
    #[serde(rename = "walletAddress")]
    pub wallet_address: String,
    #[serde(default)]
    pub memo: String,
}

/// One page of deposit history.
#[derive(Debug, Clone, Deserialize)]
pub struct DepositHistoryPage {
    #[serde(default)]
    pub data: Vec<Transaction>,
    #[serde(rename = "totalPage", default)]
    pub total_page: i64,
    #[serde(rename = "pageNo", default)]
    pub page_no: i64,
    #[serde(rename = "pageLimit", default)]
    pub page_limit: i64,
}

/// A deposit or withdrawal as reported by the service.
///
/// Amounts stay in their wire form (decimal strings); `tx_id` is only set
/// for on-chain transfers, and `request_id` echoes the client-side
/// identifier when one was attached.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    #[serde(rename = "orderViewId", default)]
    pub order_view_id: String,
    #[serde(rename = "txId", default)]
    pub tx_id: String,
    #[serde(rename = "transferType", default)]
    pub transfer_type: i64,
    #[serde(default)]
    pub direction: i64,
    #[serde(rename = "fromAddress", default)]
    pub from_address: String,
    #[serde(rename = "toAddress", default)]
    pub to_address: String,
    #[serde(default)]
    pub network: String,
    #[serde(rename = "coinSymbol", default)]
    pub coin_symbol: String,
    #[serde(default)]
    pub amount: String,
    #[serde(rename = "feeSymbol", default)]
    pub fee_symbol: String,
    #[serde(rename = "feeAmount", default)]
    pub fee_amount: String,
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(rename = "txTime", default)]
    pub tx_time: String,
    #[serde(rename = "walletStr", default)]
    pub wallet_str: String,
    #[serde(rename = "requestId", default)]
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transfer {
    /// Transfer transaction id.
    #[serde(rename = "orderViewId")]
    pub order_view_id: String,
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub direction: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalOrder {
    #[serde(rename = "orderViewId")]
    pub order_view_id: String,
    #[serde(default)]
    pub status: i64,
    #[serde(rename = "transferType", default)]
    pub transfer_type: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferDetail {
    #[serde(default)]
    pub amount: String,
    #[serde(rename = "coinSymbol", default)]
    pub coin_symbol: String,
    #[serde(default)]
    pub direction: i64,
    #[serde(rename = "exchangeCode", default)]
    pub exchange_code: i64,
    #[serde(rename = "exchangeUserId", default)]
    pub exchange_user_id: String,
    #[serde(rename = "orderViewId", default)]
    pub order_view_id: String,
    #[serde(default)]
    pub status: i64,
    #[serde(rename = "walletId", default)]
    pub wallet_id: i64,
    #[serde(rename = "createTime", default)]
    pub create_time: i64,
    #[serde(rename = "requestId", default)]
    pub request_id: String,
}
