//! Minimal PDF object model: the values shadings, functions and graphics states are built from.

use std::{collections::BTreeMap, fmt};

use crate::foundation::math::Fnv1a64;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// PDF name object (written with a leading `/`).
pub struct Name(String);

impl Name {
    /// Name from its text, without the leading `/`.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Text of the name, without the leading `/`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

#[derive(Clone, Debug)]
/// A direct PDF object.
///
/// Equality is structural: reals compare by bit pattern, arrays element-wise and dictionaries by
/// key set and per-key value. Two independently built objects with the same content are equal.
pub enum Object {
    /// `null`.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Real number.
    Real(f64),
    /// Name.
    Name(Name),
    /// Array.
    Array(Vec<Object>),
    /// Dictionary.
    Dict(Dict),
}

impl Object {
    /// Name object from text.
    pub fn name(name: &str) -> Self {
        Self::Name(Name::new(name))
    }

    /// Real from an `f32`.
    pub fn real(v: f32) -> Self {
        Self::Real(f64::from(v))
    }

    /// Array of reals from `f32` values.
    pub fn reals(values: &[f32]) -> Self {
        Self::Array(values.iter().copied().map(Self::real).collect())
    }

    /// Array of reals from `f64` values, narrowed to `f32` like every other emitted real.
    pub fn reals_f64(values: &[f64]) -> Self {
        Self::Array(values.iter().map(|v| Self::real(*v as f32)).collect())
    }

    /// Dictionary payload, if this is one.
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Self::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Array payload, if this is one.
    pub fn as_array(&self) -> Option<&[Object]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Numeric value of a real or integer.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Structural equality; reals compare by bit pattern.
    pub fn structurally_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a.to_bits() == b.to_bits(),
            (Self::Name(a), Self::Name(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.structurally_eq(y))
            }
            (Self::Dict(a), Self::Dict(b)) => a.structurally_eq(b),
            _ => false,
        }
    }

    fn write_digest(&self, h: &mut Fnv1a64) {
        match self {
            Self::Null => h.write_u8(0),
            Self::Bool(v) => {
                h.write_u8(1);
                h.write_u8(u8::from(*v));
            }
            Self::Int(v) => {
                h.write_u8(2);
                h.write_u64(*v as u64);
            }
            Self::Real(v) => {
                h.write_u8(3);
                h.write_u64(v.to_bits());
            }
            Self::Name(n) => {
                h.write_u8(4);
                h.write_str(n.as_str());
            }
            Self::Array(items) => {
                h.write_u8(5);
                h.write_u64(items.len() as u64);
                for item in items {
                    item.write_digest(h);
                }
            }
            Self::Dict(d) => {
                h.write_u8(6);
                d.write_digest(h);
            }
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.structurally_eq(other)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for Object {
    fn from(value: f32) -> Self {
        Self::real(value)
    }
}

impl From<Name> for Object {
    fn from(value: Name) -> Self {
        Self::Name(value)
    }
}

impl From<Dict> for Object {
    fn from(value: Dict) -> Self {
        Self::Dict(value)
    }
}

impl From<Vec<Object>> for Object {
    fn from(value: Vec<Object>) -> Self {
        Self::Array(value)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Real(v) => f.write_str(&format_real(*v)),
            Self::Name(n) => write!(f, "{n}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Dict(d) => write!(f, "{d}"),
        }
    }
}

#[derive(Clone, Debug, Default)]
/// PDF dictionary with deterministic (sorted) key order.
pub struct Dict {
    entries: BTreeMap<Name, Object>,
}

impl Dict {
    /// Empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary with `/Type` preset.
    pub fn typed(type_name: &str) -> Self {
        let mut d = Self::new();
        d.set("Type", Object::name(type_name));
        d
    }

    /// Insert or replace `key`.
    pub fn set(&mut self, key: &str, value: impl Into<Object>) {
        self.entries.insert(Name::new(key), value.into());
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries.get(&Name::new(key))
    }

    /// Remove and return the value under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Object> {
        self.entries.remove(&Name::new(key))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Object)> {
        self.entries.iter()
    }

    /// Same keys mapping to structurally equal values.
    pub fn structurally_eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(k, v)| {
                other
                    .entries
                    .get(k)
                    .is_some_and(|w| v.structurally_eq(w))
            })
    }

    /// Cheap digest over the entry count and key names only.
    pub fn shallow_digest(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u64(self.entries.len() as u64);
        for k in self.entries.keys() {
            h.write_str(k.as_str());
        }
        h.finish()
    }

    /// Digest over the full nested content; structurally equal dictionaries digest equally.
    pub fn deep_digest(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        self.write_digest(&mut h);
        h.finish()
    }

    fn write_digest(&self, h: &mut Fnv1a64) {
        h.write_u64(self.entries.len() as u64);
        for (k, v) in &self.entries {
            h.write_str(k.as_str());
            v.write_digest(h);
        }
    }
}

impl PartialEq for Dict {
    fn eq(&self, other: &Self) -> bool {
        self.structurally_eq(other)
    }
}

impl fmt::Display for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<<")?;
        for (k, v) in &self.entries {
            write!(f, " {k} {v}")?;
        }
        f.write_str(" >>")
    }
}

/// Format a real the way content streams expect: fixed point, trailing zeros trimmed.
pub fn format_real(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{v:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-0" => "0".to_string(),
        _ => s.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/object.rs"]
mod tests;
