//! Scalar kinds and values held by a settings store

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Setting Kinds
// =============================================================================

/// The five scalar kinds a settings store can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    /// UTF-8 string
    Text,
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// 32-bit float
    Float,
    /// Boolean
    Bool,
}

impl SettingKind {
    /// Every supported kind, in declaration order
    pub const ALL: [SettingKind; 5] = [
        SettingKind::Text,
        SettingKind::Int,
        SettingKind::Long,
        SettingKind::Float,
        SettingKind::Bool,
    ];

    /// Lowercase name used in storage files and error messages
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SettingKind::Text => "text",
            SettingKind::Int => "int",
            SettingKind::Long => "long",
            SettingKind::Float => "float",
            SettingKind::Bool => "bool",
        }
    }

    /// Value returned by a read of an absent key when the caller gave no default
    ///
    /// `""`, `-1`, `-1`, `-1.0` and `false` respectively.
    #[must_use]
    pub fn fallback(self) -> SettingValue {
        match self {
            SettingKind::Text => SettingValue::Text(String::new()),
            SettingKind::Int => SettingValue::Int(-1),
            SettingKind::Long => SettingValue::Long(-1),
            SettingKind::Float => SettingValue::Float(-1.0),
            SettingKind::Bool => SettingValue::Bool(false),
        }
    }

    /// Resolve the kind for a Rust type at runtime
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] naming `T` when it is not one of
    /// `String`, `i32`, `i64`, `f32` or `bool`.
    pub fn of<T: Any>() -> Result<SettingKind> {
        let id = TypeId::of::<T>();
        if id == TypeId::of::<String>() {
            Ok(SettingKind::Text)
        } else if id == TypeId::of::<i32>() {
            Ok(SettingKind::Int)
        } else if id == TypeId::of::<i64>() {
            Ok(SettingKind::Long)
        } else if id == TypeId::of::<f32>() {
            Ok(SettingKind::Float)
        } else if id == TypeId::of::<bool>() {
            Ok(SettingKind::Bool)
        } else {
            Err(Error::UnsupportedType(std::any::type_name::<T>().to_string()))
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SettingKind {
    type Err = Error;

    /// Parse a kind name such as `"int"`, `"Long"` or `"boolean"`
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "string" => Ok(SettingKind::Text),
            "int" | "i32" | "integer" => Ok(SettingKind::Int),
            "long" | "i64" => Ok(SettingKind::Long),
            "float" | "f32" => Ok(SettingKind::Float),
            "bool" | "boolean" => Ok(SettingKind::Bool),
            _ => Err(Error::UnsupportedType(s.to_string())),
        }
    }
}

// =============================================================================
// Setting Values
// =============================================================================

/// A scalar stored under a key
///
/// Serialized adjacently tagged (`{"type": "int", "value": 3}`) so that an
/// `Int` and a `Long` holding the same number stay distinct on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SettingValue {
    Text(String),
    Int(i32),
    Long(i64),
    Float(f32),
    Bool(bool),
}

impl SettingValue {
    /// Kind of this value
    #[must_use]
    pub fn kind(&self) -> SettingKind {
        match self {
            SettingValue::Text(_) => SettingKind::Text,
            SettingValue::Int(_) => SettingKind::Int,
            SettingValue::Long(_) => SettingKind::Long,
            SettingValue::Float(_) => SettingKind::Float,
            SettingValue::Bool(_) => SettingKind::Bool,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            SettingValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            SettingValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            SettingValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Move the value into a `Box<dyn Any>` holding its natural Rust type
    pub(crate) fn into_any(self) -> Box<dyn Any> {
        match self {
            SettingValue::Text(v) => Box::new(v),
            SettingValue::Int(v) => Box::new(v),
            SettingValue::Long(v) => Box::new(v),
            SettingValue::Float(v) => Box::new(v),
            SettingValue::Bool(v) => Box::new(v),
        }
    }

    /// Build a value from any Rust value whose type is a supported kind
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] for any other type.
    pub fn from_any<T: Any>(value: T) -> Result<SettingValue> {
        let kind = SettingKind::of::<T>()?;
        let boxed: Box<dyn Any> = Box::new(value);
        let converted = match kind {
            SettingKind::Text => boxed.downcast::<String>().ok().map(|v| SettingValue::Text(*v)),
            SettingKind::Int => boxed.downcast::<i32>().ok().map(|v| SettingValue::Int(*v)),
            SettingKind::Long => boxed.downcast::<i64>().ok().map(|v| SettingValue::Long(*v)),
            SettingKind::Float => boxed.downcast::<f32>().ok().map(|v| SettingValue::Float(*v)),
            SettingKind::Bool => boxed.downcast::<bool>().ok().map(|v| SettingValue::Bool(*v)),
        };
        converted.ok_or_else(|| Error::UnsupportedType(std::any::type_name::<T>().to_string()))
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Text(v) => f.write_str(v),
            SettingValue::Int(v) => write!(f, "{v}"),
            SettingValue::Long(v) => write!(f, "{v}"),
            SettingValue::Float(v) => write!(f, "{v}"),
            SettingValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

// =============================================================================
// Typed Preferences
// =============================================================================

/// A Rust type that maps onto exactly one [`SettingKind`]
///
/// Only `String`, `i32`, `i64`, `f32` and `bool` implement this, so asking a
/// store for any other type is rejected by the compiler.
pub trait Preference: Sized + 'static {
    /// The kind this type is stored as
    const KIND: SettingKind;

    /// Wrap into a [`SettingValue`]
    fn into_value(self) -> SettingValue;

    /// Unwrap from a [`SettingValue`], `None` if the kind differs
    fn from_value(value: SettingValue) -> Option<Self>;
}

macro_rules! preference {
    ($ty:ty, $variant:ident) => {
        impl Preference for $ty {
            const KIND: SettingKind = SettingKind::$variant;

            fn into_value(self) -> SettingValue {
                SettingValue::$variant(self)
            }

            fn from_value(value: SettingValue) -> Option<Self> {
                match value {
                    SettingValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for SettingValue {
            fn from(value: $ty) -> Self {
                SettingValue::$variant(value)
            }
        }
    };
}

preference!(String, Text);
preference!(i32, Int);
preference!(i64, Long);
preference!(f32, Float);
preference!(bool, Bool);
