#![doc = include_str!("../README.md")]

mod config;
mod dict;
mod error;
mod flatten;
mod json;
mod record;

pub use config::{Config, OmitPolicy};
pub use dict::Dict;
pub use dictify_macros::IntoDict;
pub use dictify_value::{Complex, FieldTag, Sequence, ToValue, Value, tag};
pub use error::Error;
pub use flatten::{to_dict, to_dict_with};
pub use json::{JsonMap, to_json_map};
pub use record::{DictField, FieldWriter, IntoDict};
