//! Encoding of request bodies.

use crate::Error;
use serde::Serialize;

/// Generic key/value mapping used as a request body.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// Encodes `fields` as the JSON bytes sent to the Flutterwave APIs.
///
/// The encoded payload is logged at `DEBUG` level once encoding has succeeded.
pub fn build_payload<T: Serialize + ?Sized>(fields: &T) -> Result<Vec<u8>, Error> {
    let payload = serde_json::to_vec(fields).map_err(Error::Serialization)?;

    tracing::debug!(payload = %String::from_utf8_lossy(&payload), "Built request payload");

    Ok(payload)
}
