//! The `key[,omitempty]` field tag grammar.

/// Modifier that enables omit-if-empty on a field.
pub const OMIT_EMPTY: &str = "omitempty";

/// Parsed form of a field tag such as `"name"` or `"count,omitempty"`.
///
/// Only the segment directly after the first comma is inspected, and it must
/// be exactly `omitempty`. Anything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldTag {
    /// Key name as written in the tag. May be empty.
    pub name: String,
    pub omit_empty: bool,
}

impl FieldTag {
    pub fn parse(tag: &str) -> Self {
        match tag.split_once(',') {
            Some((name, rest)) => {
                let modifier = rest.split(',').next().unwrap_or_default();
                Self {
                    name: name.to_string(),
                    omit_empty: modifier == OMIT_EMPTY,
                }
            }
            None => Self {
                name: tag.to_string(),
                omit_empty: false,
            },
        }
    }

    /// The key to write under: the tag name, or `field_name` if the tag
    /// name is empty.
    pub fn key_or<'a>(&'a self, field_name: &'a str) -> &'a str {
        if self.name.is_empty() {
            field_name
        } else {
            &self.name
        }
    }
}

impl core::str::FromStr for FieldTag {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
