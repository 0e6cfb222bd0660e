//! Attribute values and the ordered, key-unique attribute list.

use crate::escape::encode_structured;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type EncodeFn = dyn Fn() -> Result<String, serde_json::Error> + Send + Sync;

/// A value that is not a plain scalar, encoded as JSON when rendered.
///
/// The value is captured at set time but only serialized during rendering,
/// so an encoding failure surfaces as a render error. Object keys are written
/// in sorted order, so maps with unordered iteration still encode the same
/// bytes every time.
#[derive(Clone)]
pub struct Structured(Arc<EncodeFn>);

impl Structured {
    pub fn new<T>(value: T) -> Self
    where
        T: Serialize + Send + Sync + 'static,
    {
        Self(Arc::new(move || {
            serde_json::to_value(&value).and_then(|v| serde_json::to_string(&v))
        }))
    }

    pub(crate) fn to_json(&self) -> Result<String, serde_json::Error> {
        (self.0)()
    }

    /// Encodes the captured value with line breaks stripped.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        encode_structured(self)
    }
}

impl fmt::Debug for Structured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Structured(..)")
    }
}

/// The value half of an attribute.
#[derive(Debug, Clone)]
pub enum AttrValue {
    Str(String),
    /// Written as-is apart from escaping, even when not valid UTF-8.
    Bytes(Vec<u8>),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Structured(Structured),
}

/// How a single attribute appears in the opening tag.
#[derive(Debug, PartialEq)]
pub(crate) enum Encoded<'a> {
    /// Left out of the tag entirely.
    Omit,
    /// Rendered as the bare key.
    Bare,
    /// Rendered as `key='value'`; the value is not escaped yet.
    Value(Cow<'a, str>),
    /// Like `Value`, for byte strings that may not be UTF-8.
    Bytes(Cow<'a, [u8]>),
}

impl AttrValue {
    /// Captures an arbitrary serializable value.
    pub fn structured<T>(value: T) -> Self
    where
        T: Serialize + Send + Sync + 'static,
    {
        AttrValue::Structured(Structured::new(value))
    }

    pub(crate) fn encode(&self) -> Result<Encoded<'_>, serde_json::Error> {
        let encoded = match self {
            AttrValue::Str(s) if s.is_empty() => Encoded::Omit,
            AttrValue::Str(s) => Encoded::Value(Cow::Borrowed(s)),
            AttrValue::Bytes(b) if b.is_empty() => Encoded::Omit,
            AttrValue::Bytes(b) => Encoded::Bytes(Cow::Borrowed(b)),
            AttrValue::Int(i) => Encoded::Value(Cow::Owned(i.to_string())),
            AttrValue::UInt(u) => Encoded::Value(Cow::Owned(u.to_string())),
            AttrValue::Float(f) => Encoded::Value(Cow::Owned(format_float(*f))),
            AttrValue::Bool(true) => Encoded::Bare,
            AttrValue::Bool(false) => Encoded::Omit,
            AttrValue::Structured(v) => Encoded::Value(Cow::Owned(v.encode()?)),
        };
        Ok(encoded)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Str(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Str(v)
    }
}

impl From<&String> for AttrValue {
    fn from(v: &String) -> Self {
        AttrValue::Str(v.clone())
    }
}

impl From<Cow<'_, str>> for AttrValue {
    fn from(v: Cow<'_, str>) -> Self {
        AttrValue::Str(v.into_owned())
    }
}

impl From<char> for AttrValue {
    fn from(v: char) -> Self {
        AttrValue::Str(v.to_string())
    }
}

impl From<Vec<char>> for AttrValue {
    fn from(v: Vec<char>) -> Self {
        AttrValue::Str(v.into_iter().collect())
    }
}

impl From<&[char]> for AttrValue {
    fn from(v: &[char]) -> Self {
        AttrValue::Str(v.iter().collect())
    }
}

impl From<Vec<u8>> for AttrValue {
    fn from(v: Vec<u8>) -> Self {
        AttrValue::Bytes(v)
    }
}

impl From<&[u8]> for AttrValue {
    fn from(v: &[u8]) -> Self {
        AttrValue::Bytes(v.to_vec())
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<f32> for AttrValue {
    fn from(v: f32) -> Self {
        AttrValue::Float(f64::from(v))
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<serde_json::Value> for AttrValue {
    fn from(v: serde_json::Value) -> Self {
        AttrValue::structured(v)
    }
}

/// Six decimals; infinities and NaN are spelled `+Inf`, `-Inf` and `NaN`.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "+Inf".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{f:.6}")
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for AttrValue {
                fn from(v: $source) -> Self {
                    AttrValue::$variant(v as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt as u64: u8, u16, u32, u64, usize);

/// A single `key = value` pair.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub key: String,
    pub value: AttrValue,
}

/// Attributes in insertion order with unique keys.
///
/// Setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: Vec<Attribute>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|a| a.key == key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Attribute { key, value }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|a| a.key == key).map(|a| &a.value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        let index = self.entries.iter().position(|a| a.key == key)?;
        Some(self.entries.remove(index).value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|a| a.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
