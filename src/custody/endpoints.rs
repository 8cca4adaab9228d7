/// Production Open API domain.
pub const DEFAULT_BASE_URL: &str = "https://open-api.ceffu.com";

pub const CREATE_SUB_WALLET: &str = "/open-api/v1/subwallet/create";
pub const DEPOSIT_ADDRESS: &str = "/open-api/v1/subwallet/deposit/address";
pub const DEPOSIT_HISTORY: &str = "/open-api/v2/subwallet/deposit/history";
pub const TRANSFER: &str = "/open-api/v1/subwallet/transfer";
pub const WITHDRAWAL: &str = "/open-api/v2/wallet/withdrawal";
pub const WITHDRAWAL_DETAIL: &str = "/open-api/v2/wallet/withdrawal/detail";
pub const TRANSFER_WITH_EXCHANGE: &str = "/open-api/v1/wallet/transfer/exchange";
pub const TRANSFER_DETAIL_WITH_EXCHANGE: &str = "/open-api/v1/wallet/transfer/exchange/detail";
