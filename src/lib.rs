pub mod core;
pub mod custody;

pub use crate::core::config::CustodyConfig;
pub use crate::core::errors::{CustodyError, RequestError};
pub use crate::custody::builder::{build_client, build_client_with_request_ids};
pub use crate::custody::client::CustodyClient;
