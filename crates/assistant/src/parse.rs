//! Decoding of schema-constrained payloads.

use anyhow::Result;
use serde::de::DeserializeOwned;
use shared::error::AssistantError;

/// Decode a schema-constrained payload into its target shape.
///
/// An empty payload or any shape mismatch is a failure; nothing partial
/// or default-filled is ever produced here. Freeform calls never pass
/// through this function.
pub fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AssistantError::EmptyResponse.into());
    }
    serde_json::from_str(trimmed).map_err(|e| AssistantError::Decode(e.to_string()).into())
}
