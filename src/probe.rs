use crate::EnumerationValue;

/// Something that can be tested for membership in an enumeration: either a member name or an
/// integer value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Probe<'a> {
    Name(&'a str),
    Value(i64),
}

impl<'a> From<&'a str> for Probe<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for Probe<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name)
    }
}

impl From<i64> for Probe<'_> {
    fn from(value: i64) -> Self {
        Self::Value(value)
    }
}

impl From<i32> for Probe<'_> {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<u32> for Probe<'_> {
    fn from(value: u32) -> Self {
        Self::Value(value.into())
    }
}

impl From<usize> for Probe<'_> {
    fn from(value: usize) -> Self {
        // No enumeration can hold i64::MAX members.
        Self::Value(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&EnumerationValue> for Probe<'_> {
    fn from(value: &EnumerationValue) -> Self {
        Self::Value(value.value())
    }
}

impl From<EnumerationValue> for Probe<'_> {
    fn from(value: EnumerationValue) -> Self {
        Self::Value(value.value())
    }
}
