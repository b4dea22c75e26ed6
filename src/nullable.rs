//! Tri-state optional model fields.
//!
//! Square distinguishes a field the caller never mentioned from a field the caller explicitly
//! cleared. A plain [`Option`] can only express two of those states, so every optional model
//! attribute is a [`Nullable`] instead:
//!
//! | State            | Serialized as        |
//! |------------------|----------------------|
//! | `Absent`         | key omitted          |
//! | `Null`           | `"key": null`        |
//! | `Value(v)`       | `"key": v`           |
//!
//! Model structs mark each optional field with
//! `#[serde(default, skip_serializing_if = "Nullable::is_omitted")]`, so a missing key
//! deserializes to [`Nullable::Absent`] and an absent field never reaches the wire. A null field
//! is also omitted while a model is serialized with
//! [`NullHandling::Strip`](crate::json::NullHandling::Strip).
//!
//! A `Nullable<Value>` holding JSON `null` is written as `null` and read back as
//! [`Nullable::Null`]. Build such fields with [`Nullable::from_json_value`], which folds the two.
//!
//! # Example
//!
//! ```
//! use square_models_sdk::Nullable;
//!
//! let mut note: Nullable<String> = Nullable::Absent;
//! assert!(!note.is_present());
//!
//! note.set("thanks".to_owned());
//! assert_eq!(note.get().map(String::as_str), Some("thanks"));
//!
//! note.set(None);
//! assert!(note.is_present());
//! assert_eq!(note.get(), None);
//!
//! note.unset();
//! assert!(note.is_absent());
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// An optional model attribute that remembers whether it was ever set.
///
/// Created [`Absent`](Self::Absent). Only [`set`](Self::set) makes it present and only
/// [`unset`](Self::unset) makes it absent again; setting `None` keeps it present with a null value.
#[expect(
    clippy::exhaustive_enums,
    reason = "The three presence states are the whole contract of this type"
)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// Never set, or explicitly unset. Omitted from serialized output.
    Absent,
    /// Explicitly set to no value. Serialized as `null`.
    Null,
    /// Explicitly set to a value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Wraps an [`Option`] as a present field: `Some(v)` becomes [`Value`](Self::Value) and `None`
    /// becomes [`Null`](Self::Null).
    #[must_use]
    pub fn present(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }

    /// Marks the field present, holding `value`, which may be `None`.
    pub fn set<V: Into<Option<T>>>(&mut self, value: V) {
        *self = Self::present(value.into());
    }

    /// Returns the field to the absent state, discarding any held value.
    pub fn unset(&mut self) {
        *self = Self::Absent;
    }

    /// Takes the field out, leaving it absent.
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Absent)
    }

    /// Returns the held value.
    ///
    /// An absent field and a field explicitly set to null both return `None`; use
    /// [`is_present`](Self::is_present) when the distinction matters.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    #[must_use]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// `true` only for a field explicitly set to null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the owning model leaves this field out of its serialized form.
    ///
    /// Absent fields are always omitted. Null fields are omitted only while the model is
    /// serialized with [`NullHandling::Strip`](crate::json::NullHandling::Strip).
    #[must_use]
    pub fn is_omitted(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Null => {
                let stripped = crate::json::nulls_stripped();
                #[cfg(feature = "tracing")]
                if stripped {
                    tracing::debug!(
                        field_type = std::any::type_name::<T>(),
                        "dropping null-valued field"
                    );
                }
                stripped
            }
            Self::Value(_) => false,
        }
    }

    #[must_use]
    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Value(v) => Nullable::Value(v),
        }
    }

    /// Maps the held value, preserving the presence state.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Value(v) => Nullable::Value(f(v)),
        }
    }

    /// Collapses the field into an [`Option`], losing the absent/null distinction.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }
}

impl Nullable<Value> {
    /// Wraps free-form JSON as a present field, with JSON `null` becoming [`Null`](Self::Null).
    ///
    /// ```
    /// use serde_json::json;
    /// use square_models_sdk::Nullable;
    ///
    /// assert!(Nullable::from_json_value(json!(null)).is_null());
    /// assert_eq!(Nullable::from_json_value(json!(1)), Nullable::Value(json!(1)));
    /// ```
    #[must_use]
    pub fn from_json_value(value: Value) -> Self {
        if value.is_null() {
            Self::Null
        } else {
            Self::Value(value)
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Debug> fmt::Debug for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Null => f.write_str("Null"),
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Nullable<String> {
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Absent fields are normally skipped by the owning struct; if one is serialized
            // directly, null is the only faithful JSON rendering.
            Self::Absent | Self::Null => serializer.serialize_none(),
            Self::Value(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::present)
    }
}
