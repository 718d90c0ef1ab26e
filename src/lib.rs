//! Enumerated types declared from a list of member names.
//!
//! Declaring an enumeration numbers its members from 0 in declaration order. Every member
//! becomes a read-only [`EnumerationValue`] that behaves as its integer and also knows its name.
//!
//! ```
//! use enumeration::{EnumerationType, Error};
//!
//! let et = EnumerationType::declare("EnumTest", ["foo", "bar", "rab", "oof"])?;
//! let foo = et.member("foo")?;
//! let bar = et.member("bar")?;
//!
//! assert_eq!(*foo, 0_i64);
//! assert_eq!(foo + 1_i64, bar.value());
//! assert_eq!(format!("{bar:?}"), "<EnumTest: bar=1>");
//! assert!(et.contains(3));
//! assert!(!et.instance().contains("blech"));
//! assert_eq!(et.name(foo.value())?, "foo");
//! assert!(std::ptr::eq(et.construct(), et.construct()));
//!
//! assert!(et["oof"].assign("name", "foo").is_err());
//! assert!(matches!(
//!     et.instance().assign("zzz", 6),
//!     Err(Error::UnknownAttribute { .. })
//! ));
//! # Ok::<(), Error>(())
//! ```
//!
//! Enumerations that should live for the whole program can be declared statically with
//! [`enumeration!`].

mod enumeration;
mod error;
mod macros;
mod probe;
mod value;

pub use enumeration::{EnumerationType, Instance};
pub use error::Error;
pub use probe::Probe;
pub use value::EnumerationValue;

#[doc(hidden)]
pub use macros::__private;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_test_scenario() {
        let et = EnumerationType::declare("EnumTest", ["foo", "bar", "rab", "oof"]).unwrap();
        let et2 = et.construct();
        assert!(std::ptr::eq(et.construct(), et2));

        let foo = et.member("foo").unwrap();
        let bar = et.member("bar").unwrap();
        let oof = et.member("oof").unwrap();

        assert_eq!(*foo, 0_i64);
        assert_eq!(*foo, 1_i64 - 1);
        assert_eq!(*bar, 1_i64);
        assert_eq!(foo + 1_i64, bar.value());
        assert!(et.contains(3));
        assert!(!et2.contains("blech"));
        assert!(et.contains("foo"));
        assert_eq!(et.name(foo.value()), Ok("foo"));
        assert_eq!(oof.name(), "oof");

        assert!(matches!(
            oof.assign("name", "foo"),
            Err(Error::ReadOnlyAttribute { .. })
        ));
        assert_eq!(oof.name(), "oof");
        assert!(et.contains(0));
        assert!(!et.contains(4));

        assert!(matches!(
            et2.assign("zzz", 6),
            Err(Error::UnknownAttribute { .. })
        ));
        assert!(matches!(
            et2.assign("foo", 6),
            Err(Error::ReadOnlyAttribute { .. })
        ));
    }

    #[test]
    fn values_are_shared_across_threads() {
        let et = std::sync::Arc::new(EnumerationType::declare("Abc", ["a", "b", "c"]).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let et = et.clone();
                std::thread::spawn(move || et.iter().map(EnumerationValue::value).sum::<i64>())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 3);
        }
    }
}
