/// Declares one or more process-wide enumerations, built on first access.
///
/// Each declaration reads `static ref Name = ["member", ...];` (optionally `pub`, with
/// attributes and doc comments) and yields a static that dereferences to an
/// [`EnumerationType`](crate::EnumerationType) whose display name is `Name`.
///
/// ```
/// enumeration::enumeration! {
///     /// Primary colors.
///     pub static ref Color = ["red", "green", "blue"];
///     static ref Nothing = [];
/// }
///
/// assert_eq!(Color.value_of("blue"), Ok(2));
/// assert_eq!(Color.display_name(), "Color");
/// assert!(Nothing.is_empty());
/// ```
///
/// # Panics
///
/// Static initializers cannot report errors, so a duplicate member name panics on first access.
#[macro_export]
macro_rules! enumeration {
    ($(#[$attr:meta])* static ref $name:ident = [$($member:expr),* $(,)?]; $($rest:tt)*) => {
        $crate::__private::lazy_static! {
            $(#[$attr])*
            static ref $name: $crate::EnumerationType =
                $crate::__private::declare_static(stringify!($name), &[$($member),*]);
        }
        $crate::enumeration!($($rest)*);
    };
    ($(#[$attr:meta])* pub static ref $name:ident = [$($member:expr),* $(,)?]; $($rest:tt)*) => {
        $crate::__private::lazy_static! {
            $(#[$attr])*
            pub static ref $name: $crate::EnumerationType =
                $crate::__private::declare_static(stringify!($name), &[$($member),*]);
        }
        $crate::enumeration!($($rest)*);
    };
    ($(#[$attr:meta])* pub ($($vis:tt)+) static ref $name:ident = [$($member:expr),* $(,)?]; $($rest:tt)*) => {
        $crate::__private::lazy_static! {
            $(#[$attr])*
            pub ($($vis)+) static ref $name: $crate::EnumerationType =
                $crate::__private::declare_static(stringify!($name), &[$($member),*]);
        }
        $crate::enumeration!($($rest)*);
    };
    () => {};
}

#[doc(hidden)]
pub mod __private {
    pub use lazy_static::lazy_static;

    use crate::EnumerationType;

    pub fn declare_static(name: &'static str, members: &[&str]) -> EnumerationType {
        match EnumerationType::declare(name, members.iter().copied()) {
            Ok(enumeration) => enumeration,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    crate::enumeration! {
        static ref EnumTest = ["foo", "bar", "rab", "oof"];
        pub(crate) static ref Et2 = ["x", "y", "z",];
        static ref Duplicated = ["a", "a"];
    }

    #[test]
    fn members_are_available_without_constructing() {
        assert_eq!(Et2["x"], 0_i64);
        assert_eq!(Et2["z"], 2_i64);
    }

    #[test]
    fn static_declaration_is_a_singleton() {
        assert!(std::ptr::eq(EnumTest.construct(), EnumTest.construct()));
        assert!(EnumTest.contains("foo"));
        assert!(EnumTest.instance().contains(3));
        assert_eq!(
            EnumTest.instance().assign("zzz", 6),
            Err(Error::UnknownAttribute {
                owner: "EnumTest".into(),
                attribute: "zzz".into(),
            })
        );
    }

    #[test]
    #[should_panic(expected = "declares member 'a' more than once")]
    fn duplicate_members_panic_on_first_access() {
        let _ = Duplicated.len();
    }
}
