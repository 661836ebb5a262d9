pub mod championships;
pub mod system;
pub mod teams;

use serde::de::DeserializeOwned;

use crate::api::errors::ApiError;

/// Decodes a JSON request body, reporting the decoder's own message on failure
///
/// Bodies are read as raw bytes so a missing or foreign content type is not
/// rejected before decoding.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}
