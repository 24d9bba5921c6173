mod container;
mod field;
mod span_extract;

pub use container::ContainerAttrs;
pub use field::FieldAttrs;
pub use span_extract::extract_dict_attr_spans;
