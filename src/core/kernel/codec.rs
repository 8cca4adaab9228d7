use crate::core::errors::{CustodyError, RequestError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::form_urlencoded;

/// Envelope-level code the service returns on success. Anything else is a
/// business rejection, even on HTTP 200.
pub const SUCCESS_CODE: &str = "000000";

/// Response envelope shared by every endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub code: String,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// Serialize a request value into its canonical query-string form.
///
/// Fields are emitted in lexicographic wire-name order and percent-encoded,
/// so the output is byte-identical for identical input. Zero values are kept
/// (`amount=0`); a field is absent only when its serde representation skips
/// it (`skip_serializing_if`). The signed string and the string sent on the
/// wire are one and the same.
pub fn canonical_query<P>(params: &P) -> Result<String, CustodyError>
where
    P: Serialize + ?Sized,
{
    let value = serde_json::to_value(params)
        .map_err(|e| CustodyError::Encode(format!("request value is not serializable: {}", e)))?;

    let Value::Object(fields) = value else {
        return Err(CustodyError::Encode(
            "request value must be a flat record".to_string(),
        ));
    };

    let mut ordered: Vec<(&String, &Value)> = fields.iter().collect();
    ordered.sort_by(|a, b| a.0.cmp(b.0));

    let mut query = form_urlencoded::Serializer::new(String::new());
    for (name, field) in ordered {
        query.append_pair(name, &scalar_text(name, field)?);
    }
    Ok(query.finish())
}

fn scalar_text(name: &str, value: &Value) -> Result<String, CustodyError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(CustodyError::Encode(format!(
            "field `{}` is not a scalar",
            name
        ))),
    }
}

/// Serialize a request value into its canonical JSON body.
///
/// The returned buffer is both the signing payload and the HTTP body; no
/// re-encoding happens between the two.
pub fn canonical_body<P>(params: &P) -> Result<Vec<u8>, CustodyError>
where
    P: Serialize + ?Sized,
{
    serde_json::to_vec(params)
        .map_err(|e| CustodyError::Encode(format!("request body is not serializable: {}", e)))
}

/// Decode the response envelope and classify the outcome.
///
/// Returns the `data` payload on success; `None` means the service answered
/// with a success code and a null payload (a detail lookup whose subject does
/// not exist). Malformed bodies and non-success codes both surface as a
/// structured [`RequestError`].
pub fn decode_envelope<T: DeserializeOwned>(
    path: &str,
    method: &str,
    raw: &[u8],
) -> Result<Option<T>, CustodyError> {
    let envelope: Envelope<T> = serde_json::from_slice(raw).map_err(|e| {
        RequestError::new(path)
            .with_method(method)
            .with_body(raw.to_vec())
            .with_source(e)
    })?;

    if envelope.code != SUCCESS_CODE {
        return Err(RequestError::new(path)
            .with_method(method)
            .with_code(envelope.code)
            .with_message(envelope.message)
            .into());
    }

    Ok(envelope.data)
}
