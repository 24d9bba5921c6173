#![doc = include_str!("../README.md")]

mod display;
pub mod tag;
mod to_value;
pub mod value;

pub use tag::FieldTag;
pub use to_value::ToValue;
pub use value::{Complex, Sequence, Value};
