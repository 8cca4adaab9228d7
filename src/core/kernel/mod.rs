/// Transport kernel - the signed request pipeline.
///
/// This module turns a typed request value into a canonical,
/// signature-bearing HTTP call and turns the raw response back into a typed
/// result or a structured error. It contains no endpoint-specific logic.
///
/// # Architecture
///
/// ## Canonical encoding
/// - `codec::canonical_query`: deterministic, ordered query-string form for
///   GET requests (the signed string IS the wire query string)
/// - `codec::canonical_body`: exact JSON body bytes for POST requests (the
///   signed bytes ARE the wire body)
///
/// ## Authentication
/// - `Signer`: pluggable signing interface
/// - `RsaSigner`: SHA-512 / RSA PKCS#1 v1.5, base64-encoded
///
/// ## Dispatch and classification
/// - `RestClient` / `ReqwestRest`: issues the call, treats HTTP 200 as the
///   only decode-worthy status, and distinguishes transport failures from
///   status failures from business failures
/// - `codec::decode_envelope`: `{code, message, data}` envelope decoding
///   with the `"000000"` success sentinel
///
/// ## Request identity
/// - `RequestIdProvider` / `SequentialRequestId`: unique per-call ids for
///   mutating operations, safe under concurrent invocation
pub mod codec;
pub mod request_id;
pub mod rest;
pub mod signer;

// Re-export key types for convenience
pub use codec::{canonical_body, canonical_query, decode_envelope, Envelope, SUCCESS_CODE};
pub use request_id::{RequestIdProvider, SequentialRequestId};
pub use rest::{now_millis, ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{RsaSigner, Signer, API_KEY_HEADER, SIGNATURE_HEADER};
