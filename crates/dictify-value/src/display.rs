use core::fmt::{self, Display};

use crate::value::{Complex, Value};

pub(crate) const DEFAULT_SEPARATOR: &str = ",";

impl Value {
    /// Canonical string form of this value.
    ///
    /// Sequence elements are joined with `,`. Absent optionals and
    /// unsupported shapes yield the empty string.
    pub fn stringify(&self) -> String {
        self.stringify_with(DEFAULT_SEPARATOR)
    }

    /// Like [`Value::stringify`] but joins sequence elements with `separator`.
    pub fn stringify_with(&self, separator: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_value(&mut out, self, separator);
        out
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, DEFAULT_SEPARATOR)
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let im = format_fixed(self.im);
        let sign = if im.starts_with(['+', '-']) { "" } else { "+" };
        write!(f, "({}{sign}{im}i)", format_fixed(self.re))
    }
}

fn write_value<W: fmt::Write>(out: &mut W, value: &Value, separator: &str) -> fmt::Result {
    match value {
        Value::Text(text) => out.write_str(text),
        Value::Bool(b) => write!(out, "{b}"),
        Value::Int(i) => write!(out, "{i}"),
        Value::Uint(u) => write!(out, "{u}"),
        Value::Float(f) => out.write_str(&format_shortest(*f)),
        Value::Complex(c) => write!(out, "{c}"),
        Value::Sequence(seq) => {
            for (i, item) in seq.iter().enumerate() {
                if i > 0 {
                    out.write_str(separator)?;
                }
                write_value(out, item, separator)?;
            }
            Ok(())
        }
        Value::Optional(Some(inner)) => write_value(out, inner, separator),
        Value::Optional(None) | Value::Unsupported => Ok(()),
    }
}

fn format_non_finite(f: f64) -> Option<&'static str> {
    if f.is_nan() {
        Some("NaN")
    } else if f == f64::INFINITY {
        Some("+Inf")
    } else if f == f64::NEG_INFINITY {
        Some("-Inf")
    } else {
        None
    }
}

/// Shortest decimal that parses back to `f`, never in exponent notation.
fn format_shortest(f: f64) -> String {
    match format_non_finite(f) {
        Some(s) => s.to_string(),
        None => format!("{f}"),
    }
}

/// Fixed-point with no fractional digits, ties rounded to even.
fn format_fixed(f: f64) -> String {
    match format_non_finite(f) {
        Some(s) => s.to_string(),
        None => format!("{f:.0}"),
    }
}
