use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::Error;

/// A JSON object with keys in serialization order.
pub type JsonMap = serde_json::Map<String, JsonValue>;

/// Converts `record` into a JSON object map by serializing it to JSON and
/// reading the bytes back.
///
/// Key names and omission follow the record's serde attributes. Values keep
/// their JSON types. Fails if the record does not serialize, or serializes to
/// something other than an object.
pub fn to_json_map<T: Serialize + ?Sized>(record: &T) -> Result<JsonMap, Error> {
    let bytes = serde_json::to_vec(record).map_err(|err| {
        debug!(error = %err, "record failed to serialize");
        Error::Serialize(err)
    })?;
    let value: JsonValue = serde_json::from_slice(&bytes).map_err(Error::Deserialize)?;
    match value {
        JsonValue::Object(map) => Ok(map),
        other => {
            let found = json_kind(&other);
            debug!(found, "record did not serialize to an object");
            Err(Error::NotAnObject { found })
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
