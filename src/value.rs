use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::sync::Arc;

use crate::Error;

/// A single member of a declared enumeration.
///
/// Values behave as the integer they stand for: they compare, order, hash and do arithmetic
/// exactly like their index. They additionally remember their own name and the display name of
/// the enumeration that declared them. None of this can change after declaration.
#[derive(Clone)]
pub struct EnumerationValue {
    value: i64,
    name: Arc<str>,
    enumeration: Arc<str>,
}

impl EnumerationValue {
    pub const DISPLAY_NAME: &'static str = "EnumerationValue";

    pub(crate) fn new(value: i64, name: Arc<str>, enumeration: Arc<str>) -> Self {
        Self {
            value,
            name,
            enumeration,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display name of the enumeration this value was declared in.
    pub fn enumeration(&self) -> &str {
        &self.enumeration
    }

    /// Attempts to overwrite an attribute of this value. Values are immutable, so this always
    /// fails with [`Error::ReadOnlyAttribute`], whatever the attribute.
    pub fn assign<T>(&self, attribute: &str, _value: T) -> Result<(), Error> {
        tracing::trace!(
            enumeration = %self.enumeration,
            member = %self.name,
            attribute,
            "rejected assignment to enumeration value"
        );
        Err(Error::read_only_attribute(Self::DISPLAY_NAME, attribute))
    }
}

impl fmt::Debug for EnumerationValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}: {}={}>", self.enumeration, self.name, self.value)
    }
}

impl fmt::Display for EnumerationValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// Equality, ordering and hashing only look at the integer, so values of different enumerations
// with the same index are equal.

impl PartialEq for EnumerationValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for EnumerationValue {}

impl Hash for EnumerationValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for EnumerationValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnumerationValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialEq<i64> for EnumerationValue {
    fn eq(&self, other: &i64) -> bool {
        self.value == *other
    }
}

impl PartialEq<EnumerationValue> for i64 {
    fn eq(&self, other: &EnumerationValue) -> bool {
        *self == other.value
    }
}

impl PartialOrd<i64> for EnumerationValue {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl PartialOrd<EnumerationValue> for i64 {
    fn partial_cmp(&self, other: &EnumerationValue) -> Option<Ordering> {
        self.partial_cmp(&other.value)
    }
}

impl From<EnumerationValue> for i64 {
    fn from(value: EnumerationValue) -> Self {
        value.value
    }
}

impl From<&EnumerationValue> for i64 {
    fn from(value: &EnumerationValue) -> Self {
        value.value
    }
}

macro_rules! impl_integer_op {
    ($trait:ident, $method:ident) => {
        impl $trait<i64> for &EnumerationValue {
            type Output = i64;
            fn $method(self, rhs: i64) -> i64 {
                self.value.$method(rhs)
            }
        }

        impl $trait<i64> for EnumerationValue {
            type Output = i64;
            fn $method(self, rhs: i64) -> i64 {
                self.value.$method(rhs)
            }
        }

        impl $trait<&EnumerationValue> for i64 {
            type Output = i64;
            fn $method(self, rhs: &EnumerationValue) -> i64 {
                self.$method(rhs.value)
            }
        }

        impl $trait<EnumerationValue> for i64 {
            type Output = i64;
            fn $method(self, rhs: EnumerationValue) -> i64 {
                self.$method(rhs.value)
            }
        }

        impl $trait<&EnumerationValue> for &EnumerationValue {
            type Output = i64;
            fn $method(self, rhs: &EnumerationValue) -> i64 {
                self.value.$method(rhs.value)
            }
        }
    };
}

impl_integer_op!(Add, add);
impl_integer_op!(Sub, sub);
