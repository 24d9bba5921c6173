//! Field declarations of flattenable records.

use dictify_value::{FieldTag, ToValue, Value};

/// A record that can be flattened into a [`Dict`](crate::Dict).
///
/// Usually derived with `#[derive(IntoDict)]`. A manual implementation
/// writes each tagged field in declaration order:
///
/// ```
/// use dictify::{FieldWriter, IntoDict};
///
/// struct Login {
///     user: String,
///     otp: Option<u32>,
/// }
///
/// impl IntoDict for Login {
///     fn write_fields(&self, fields: &mut FieldWriter) {
///         fields.field("user", false, &self.user);
///         fields.tagged("otp,omitempty", "otp", &self.otp);
///     }
/// }
///
/// let login = Login { user: "root".into(), otp: None };
/// assert_eq!(dictify::to_dict(&login).len(), 1);
/// ```
pub trait IntoDict {
    fn write_fields(&self, fields: &mut FieldWriter);

    /// Collects the declared fields of this record.
    fn dict_fields(&self) -> Vec<DictField> {
        let mut writer = FieldWriter::new();
        self.write_fields(&mut writer);
        writer.into_fields()
    }
}

impl<T: IntoDict + ?Sized> IntoDict for &T {
    fn write_fields(&self, fields: &mut FieldWriter) {
        (**self).write_fields(fields)
    }
}

impl<T: IntoDict + ?Sized> IntoDict for Box<T> {
    fn write_fields(&self, fields: &mut FieldWriter) {
        (**self).write_fields(fields)
    }
}

/// One declared field: the key it is written under, whether it is left out
/// when empty, and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct DictField {
    pub key: String,
    pub omit_empty: bool,
    pub value: Value,
}

/// Collects [`DictField`]s from [`IntoDict::write_fields`].
#[derive(Debug, Default)]
pub struct FieldWriter {
    fields: Vec<DictField>,
}

impl FieldWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field under an already resolved key.
    pub fn field<T: ToValue + ?Sized>(&mut self, key: &str, omit_empty: bool, value: &T) {
        self.fields.push(DictField {
            key: key.to_string(),
            omit_empty,
            value: value.to_value(),
        });
    }

    /// Declares a field from a `key[,omitempty]` tag, falling back to
    /// `field_name` when the key part is empty.
    ///
    /// An empty tag declares nothing, as if the field were untagged.
    pub fn tagged<T: ToValue + ?Sized>(&mut self, tag: &str, field_name: &str, value: &T) {
        if tag.is_empty() {
            return;
        }
        let tag = FieldTag::parse(tag);
        self.field(tag.key_or(field_name), tag.omit_empty, value);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_fields(self) -> Vec<DictField> {
        self.fields
    }
}
