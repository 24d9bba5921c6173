use darling::FromField;

#[derive(Debug, Default, FromField)]
#[darling(default, attributes(dict))]
pub struct FieldAttrs {
    /// Field tag in `key[,omitempty]` form. Fields without one are skipped.
    pub tag: Option<String>,
}
