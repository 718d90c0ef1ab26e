use thiserror::Error;

/// Failures raised by declared enumerations and their values.
///
/// `owner` is the display name of whatever was accessed: an enumeration's name for types and
/// instances, or `EnumerationValue` for member values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("'{owner}' object has no attribute '{attribute}'")]
    UnknownAttribute { owner: String, attribute: String },
    #[error("'{owner}' object attribute '{attribute}' is read-only")]
    ReadOnlyAttribute { owner: String, attribute: String },
    #[error("enumeration '{enumeration}' declares member '{name}' more than once")]
    DuplicateName { enumeration: String, name: String },
    #[error("enumeration '{enumeration}' has no member with value {value}")]
    OutOfRange { enumeration: String, value: i64 },
}

impl Error {
    pub(crate) fn unknown_attribute(owner: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            owner: owner.into(),
            attribute: attribute.into(),
        }
    }

    pub(crate) fn read_only_attribute(
        owner: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        Self::ReadOnlyAttribute {
            owner: owner.into(),
            attribute: attribute.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_attribute() {
        let err = Error::unknown_attribute("EnumTest", "zzz");
        assert_eq!(err.to_string(), "'EnumTest' object has no attribute 'zzz'");

        let err = Error::read_only_attribute("EnumTest", "foo");
        assert_eq!(err.to_string(), "'EnumTest' object attribute 'foo' is read-only");
    }

    #[test]
    fn out_of_range_mentions_value() {
        let err = Error::OutOfRange {
            enumeration: "EnumTest".into(),
            value: -1,
        };
        assert_eq!(err.to_string(), "enumeration 'EnumTest' has no member with value -1");
    }
}
