use frag_core::errors::{ErrorInfo, FragError};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Computes a stable hexadecimal hash for the provided serializable payload.
///
/// The payload is rendered to canonical JSON first: converting through
/// `serde_json::Value` sorts map keys, so the digest is independent of field
/// declaration order.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, FragError> {
    let canonical = serde_json::to_value(value).map_err(|err| {
        FragError::Serde(
            ErrorInfo::new("hash-serialize", "failed to canonicalize payload for hashing")
                .with_context("error", err.to_string()),
        )
    })?;
    let bytes = serde_json::to_vec(&canonical).map_err(|err| {
        FragError::Serde(
            ErrorInfo::new("hash-serialize", "failed to encode canonical payload")
                .with_context("error", err.to_string()),
        )
    })?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}
