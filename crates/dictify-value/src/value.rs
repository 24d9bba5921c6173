use thisisplural::Plural;

/// A field value as seen by the flattener.
///
/// Every shape has a defined string form, see [`Value::stringify`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Complex(Complex),
    Sequence(Sequence),
    /// Optional or indirect reference. `None` is an absent reference.
    Optional(Option<Box<Value>>),
    /// A shape with no string form, such as a map. Stringifies to `""`.
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

#[derive(Debug, Clone, PartialEq, Plural, Default)]
#[plural(len, is_empty, iter, into_iter, into_iter_ref, new)]
pub struct Sequence(pub Vec<Value>);

impl Value {
    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    pub fn absent() -> Self {
        Value::Optional(None)
    }

    pub fn present(value: Value) -> Self {
        Value::Optional(Some(Box::new(value)))
    }

    /// Returns true for an absent optional, looking through present ones.
    pub fn is_absent(&self) -> bool {
        match self {
            Value::Optional(None) => true,
            Value::Optional(Some(inner)) => inner.is_absent(),
            _ => false,
        }
    }

    /// Whether this is the zero value of its shape.
    ///
    /// Unsupported values count as zero since they carry nothing that could
    /// be written out.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Text(text) => text.is_empty(),
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
            Value::Uint(u) => *u == 0,
            Value::Float(f) => *f == 0.0,
            Value::Complex(c) => c.re == 0.0 && c.im == 0.0,
            Value::Sequence(seq) => seq.is_empty(),
            Value::Optional(inner) => inner.is_none(),
            Value::Unsupported => true,
        }
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Sequence(Sequence(values))
    }
}

impl From<Complex> for Value {
    fn from(c: Complex) -> Self {
        Value::Complex(c)
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Sequence(iter.into_iter().collect())
    }
}
