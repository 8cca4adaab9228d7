pub mod builder;
pub mod client;
pub mod endpoints;
pub mod types;

pub use builder::{build_client, build_client_with_request_ids};
pub use client::CustodyClient;
