use dictify_value::Value;

/// When an `omitempty` field is left out of the flattened map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OmitPolicy {
    /// Omit when the stringified value is `""`. Integer `0` is kept as `"0"`.
    #[default]
    EmptyString,
    /// Also omit zero values: `0`, `false`, `0.0`, empty text, empty
    /// sequences and absent optionals.
    ZeroValue,
}

impl OmitPolicy {
    pub fn omits(self, value: &Value, text: &str) -> bool {
        match self {
            OmitPolicy::EmptyString => text.is_empty(),
            OmitPolicy::ZeroValue => text.is_empty() || value.is_zero(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Joins sequence elements, including those of nested sequences.
    pub separator: String,
    pub omit_policy: OmitPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            omit_policy: OmitPolicy::EmptyString,
        }
    }
}

impl Config {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_omit_policy(mut self, omit_policy: OmitPolicy) -> Self {
        self.omit_policy = omit_policy;
        self
    }
}
