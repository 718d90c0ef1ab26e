use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use crate::{EnumerationValue, Error, Probe};

/// The member table shared between an [`EnumerationType`] and its [`Instance`].
struct Members {
    display_name: Arc<str>,
    names: Vec<String>,
    indices: HashMap<String, usize>,
    values: Vec<EnumerationValue>,
}

impl Members {
    fn build(display_name: Arc<str>, names: Vec<String>) -> Result<Self, Error> {
        let mut indices = HashMap::with_capacity(names.len());
        let mut values = Vec::with_capacity(names.len());

        for (index, name) in names.iter().enumerate() {
            if indices.insert(name.clone(), index).is_some() {
                return Err(Error::DuplicateName {
                    enumeration: display_name.to_string(),
                    name: name.clone(),
                });
            }
            let value = i64::try_from(index).expect("Enumeration index did not fit into i64");
            values.push(EnumerationValue::new(
                value,
                name.as_str().into(),
                display_name.clone(),
            ));
        }

        Ok(Self {
            display_name,
            names,
            indices,
            values,
        })
    }

    fn member(&self, name: &str) -> Result<&EnumerationValue, Error> {
        self.indices
            .get(name)
            .map(|&index| &self.values[index])
            .ok_or_else(|| Error::unknown_attribute(&*self.display_name, name))
    }

    fn lookup(&self, value: i64) -> Result<&EnumerationValue, Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| self.values.get(index))
            .ok_or_else(|| Error::OutOfRange {
                enumeration: self.display_name.to_string(),
                value,
            })
    }

    fn contains(&self, probe: Probe) -> bool {
        match probe {
            Probe::Name(name) => self.indices.contains_key(name),
            Probe::Value(value) => self.lookup(value).is_ok(),
        }
    }

    fn assign(&self, attribute: &str) -> Result<(), Error> {
        tracing::trace!(
            enumeration = %self.display_name,
            attribute,
            "rejected assignment to enumeration"
        );
        if self.indices.contains_key(attribute) {
            Err(Error::read_only_attribute(&*self.display_name, attribute))
        } else {
            Err(Error::unknown_attribute(&*self.display_name, attribute))
        }
    }
}

/// A declared enumeration: an ordered, immutable set of named integer members.
///
/// Built once with [`EnumerationType::declare`] (or statically with
/// [`enumeration!`](crate::enumeration)). Members are numbered from 0 in declaration order.
/// Each type owns exactly one [`Instance`], handed out by [`EnumerationType::instance`].
pub struct EnumerationType {
    members: Arc<Members>,
    instance: Instance,
}

impl EnumerationType {
    /// Declares a new enumeration called `name` with the given members.
    ///
    /// An empty member list is allowed. Declaring the same member name twice fails with
    /// [`Error::DuplicateName`] and produces no enumeration.
    pub fn declare<I, S>(name: impl Into<String>, names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let display_name: Arc<str> = name.into().into();
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        let members = Arc::new(Members::build(display_name, names)?);
        tracing::debug!(
            enumeration = %members.display_name,
            members = members.names.len(),
            "declared enumeration"
        );

        Ok(Self {
            instance: Instance {
                members: members.clone(),
            },
            members,
        })
    }

    pub fn display_name(&self) -> &str {
        &self.members.display_name
    }

    /// The single shared instance of this enumeration.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Requests an instance of this enumeration. Every call returns the same [`Instance`] as
    /// [`EnumerationType::instance`]; no new instance is ever created.
    pub fn construct(&self) -> &Instance {
        self.instance()
    }

    /// Returns the member declared as `name`.
    pub fn member(&self, name: &str) -> Result<&EnumerationValue, Error> {
        self.members.member(name)
    }

    /// Returns the member whose integer value is `value`.
    pub fn lookup(&self, value: i64) -> Result<&EnumerationValue, Error> {
        self.members.lookup(value)
    }

    /// Returns the name declared at position `value`, or [`Error::OutOfRange`].
    ///
    /// A value obtained from this enumeration also knows its own name, see
    /// [`EnumerationValue::name`].
    pub fn name(&self, value: i64) -> Result<&str, Error> {
        self.members.lookup(value).map(EnumerationValue::name)
    }

    pub fn value_of(&self, name: &str) -> Result<i64, Error> {
        self.members.member(name).map(EnumerationValue::value)
    }

    /// Tests whether a member name (exact match) or an integer value belongs to this
    /// enumeration.
    pub fn contains<'a>(&self, probe: impl Into<Probe<'a>>) -> bool {
        self.members.contains(probe.into())
    }

    /// Attempts to assign to an attribute of the enumeration. This always fails:
    /// [`Error::ReadOnlyAttribute`] for declared members, [`Error::UnknownAttribute`] otherwise.
    pub fn assign<T>(&self, attribute: &str, _value: T) -> Result<(), Error> {
        self.members.assign(attribute)
    }

    /// The declared member names, in declaration order.
    pub fn names(&self) -> &[String] {
        &self.members.names
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnumerationValue> {
        self.members.values.iter()
    }

    pub fn len(&self) -> usize {
        self.members.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.values.is_empty()
    }
}

impl fmt::Debug for EnumerationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EnumerationType")
            .field("name", &self.display_name())
            .field("members", &self.names())
            .finish()
    }
}

impl PartialEq for EnumerationType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.members, &other.members)
    }
}

impl Eq for EnumerationType {}

impl Index<&str> for EnumerationType {
    type Output = EnumerationValue;

    /// Panics if `name` is not a declared member; use [`EnumerationType::member`] to handle
    /// that case.
    fn index(&self, name: &str) -> &EnumerationValue {
        match self.member(name) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a> IntoIterator for &'a EnumerationType {
    type Item = &'a EnumerationValue;
    type IntoIter = std::slice::Iter<'a, EnumerationValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The singleton instance of an [`EnumerationType`].
///
/// Instances answer the same member and membership queries as their type. Two instances are
/// equal only if they belong to the same declared enumeration.
pub struct Instance {
    members: Arc<Members>,
}

impl Instance {
    pub fn display_name(&self) -> &str {
        &self.members.display_name
    }

    pub fn member(&self, name: &str) -> Result<&EnumerationValue, Error> {
        self.members.member(name)
    }

    pub fn contains<'a>(&self, probe: impl Into<Probe<'a>>) -> bool {
        self.members.contains(probe.into())
    }

    /// Always fails, see [`EnumerationType::assign`].
    pub fn assign<T>(&self, attribute: &str, _value: T) -> Result<(), Error> {
        self.members.assign(attribute)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{} instance>", self.members.display_name)
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.members, &other.members)
    }
}

impl Eq for Instance {}

impl Index<&str> for Instance {
    type Output = EnumerationValue;

    fn index(&self, name: &str) -> &EnumerationValue {
        match self.member(name) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enum_test() -> EnumerationType {
        EnumerationType::declare("EnumTest", ["foo", "bar", "rab", "oof"]).unwrap()
    }

    #[test]
    fn members_are_numbered_in_declaration_order() {
        let et = enum_test();
        for (index, name) in ["foo", "bar", "rab", "oof"].iter().enumerate() {
            assert_eq!(et.value_of(name), Ok(index as i64));
            assert_eq!(et.name(index as i64), Ok(*name));
        }
        assert_eq!(et.len(), 4);
        assert_eq!(et.names(), ["foo", "bar", "rab", "oof"]);
    }

    #[test]
    fn construct_returns_the_singleton() {
        let et = enum_test();
        assert!(std::ptr::eq(et.construct(), et.construct()));
        assert!(std::ptr::eq(et.construct(), et.instance()));
        assert_eq!(et.construct(), et.instance());
    }

    #[test]
    fn identical_declarations_are_distinct_types() {
        let a = enum_test();
        let b = enum_test();
        assert_ne!(a, b);
        assert_ne!(a.instance(), b.instance());
        assert_eq!(a, a);
    }

    #[test]
    fn membership_by_name() {
        let et = enum_test();
        for name in et.names() {
            assert!(et.contains(name));
            assert!(et.instance().contains(name));
        }
        for name in ["blech", "Foo", "", "foo "] {
            assert!(!et.contains(name));
            assert!(!et.instance().contains(name));
        }
    }

    #[test]
    fn membership_by_value() {
        let et = enum_test();
        for value in &et {
            assert!(et.contains(value));
            assert!(et.instance().contains(value));
        }
        assert!(et.contains(0));
        assert!(et.contains(3_usize));
        assert!(!et.contains(4));
        assert!(!et.contains(-1_i64));
        assert!(!et.instance().contains(i64::MAX));
    }

    #[test]
    fn name_rejects_out_of_range_values() {
        let et = enum_test();
        assert_eq!(
            et.name(-1),
            Err(Error::OutOfRange {
                enumeration: "EnumTest".into(),
                value: -1,
            })
        );
        assert!(matches!(et.name(4), Err(Error::OutOfRange { value: 4, .. })));
    }

    #[test]
    fn unknown_members_are_reported() {
        let et = enum_test();
        assert_eq!(
            et.member("zzz").unwrap_err(),
            Error::UnknownAttribute {
                owner: "EnumTest".into(),
                attribute: "zzz".into(),
            }
        );
        assert!(et.instance().member("zzz").is_err());
    }

    #[test]
    fn assignment_always_fails() {
        let et = enum_test();
        assert!(matches!(
            et.instance().assign("foo", 6),
            Err(Error::ReadOnlyAttribute { .. })
        ));
        assert!(matches!(
            et.instance().assign("zzz", 6),
            Err(Error::UnknownAttribute { .. })
        ));
        assert!(matches!(et.assign("oof", 6), Err(Error::ReadOnlyAttribute { .. })));
        assert_eq!(et.value_of("foo"), Ok(0));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = EnumerationType::declare("Dup", ["a", "b", "a"]).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateName {
                enumeration: "Dup".into(),
                name: "a".into(),
            }
        );
    }

    #[test]
    fn empty_enumeration_contains_nothing() {
        let empty = EnumerationType::declare("Enumeration", Vec::<String>::new()).unwrap();
        assert!(empty.is_empty());
        assert!(!empty.contains(0));
        assert!(!empty.contains(""));
        assert!(empty.name(0).is_err());
        assert!(matches!(
            empty.instance().assign("zzz", 6),
            Err(Error::UnknownAttribute { .. })
        ));
    }

    #[test]
    fn index_by_name() {
        let et = enum_test();
        assert_eq!(et["rab"], 2_i64);
        assert_eq!(et.instance()["oof"].name(), "oof");
        assert_eq!(format!("{:?}", et["bar"]), "<EnumTest: bar=1>");
    }

    #[test]
    #[should_panic(expected = "has no attribute 'zzz'")]
    fn index_panics_on_unknown_name() {
        let et = enum_test();
        let _ = &et["zzz"];
    }
}
