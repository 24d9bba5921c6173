use tracing::{debug, trace};

use crate::config::Config;
use crate::dict::Dict;
use crate::record::{DictField, IntoDict};

/// Flattens `record` into a string map with the default [`Config`].
///
/// Each declared field is stringified with
/// [`Value::stringify`](crate::Value::stringify). An `omitempty` field whose
/// string is empty is left out, and a field whose key was already written
/// replaces the earlier value.
pub fn to_dict<T: IntoDict + ?Sized>(record: &T) -> Dict {
    to_dict_with(record, &Config::default())
}

pub fn to_dict_with<T: IntoDict + ?Sized>(record: &T, config: &Config) -> Dict {
    let mut dict = Dict::new();
    for DictField {
        key,
        omit_empty,
        value,
    } in record.dict_fields()
    {
        let text = value.stringify_with(&config.separator);
        if omit_empty && config.omit_policy.omits(&value, &text) {
            trace!(%key, policy = ?config.omit_policy, "omitting empty field");
            continue;
        }
        if let Some(previous) = dict.insert(key.as_str(), text) {
            debug!(%key, %previous, "field overwrites an earlier value");
        }
    }
    dict
}
