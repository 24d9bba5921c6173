use thiserror::Error;

/// Errors from [`to_json_map`](crate::to_json_map).
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to serialize record: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to read serialized record as a map: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("record serialized to {found}, expected an object")]
    NotAnObject { found: &'static str },
}
