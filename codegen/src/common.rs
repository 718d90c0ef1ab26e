use enumeration::EnumerationType;

use crate::Error;

pub(crate) const HEADER: &str = concat!(
    "Generated by ",
    env!("CARGO_PKG_NAME"),
    " ",
    env!("CARGO_PKG_VERSION")
);

pub(crate) trait EnumerationVisitor: Sized {
    fn visit_enumeration(&mut self, enumeration: &EnumerationType) -> Result<(), Error>;

    fn finish(self) -> String;
}

pub(crate) fn generate_with<V: EnumerationVisitor>(
    mut visitor: V,
    enumerations: &[&EnumerationType],
) -> Result<String, Error> {
    for enumeration in enumerations {
        tracing::debug!(
            enumeration = enumeration.display_name(),
            members = enumeration.len(),
            generator = std::any::type_name::<V>(),
            "generating enumeration"
        );
        visitor.visit_enumeration(enumeration)?;
    }
    Ok(visitor.finish())
}

/// Replaces everything that cannot appear in an identifier with `_` and makes sure the result
/// does not start with a digit.
pub(crate) fn sanitize_identifier(name: &str) -> String {
    // TODO: unicode-ident
    let sanitized = name.replace(|c: char| !c.is_ascii_alphanumeric(), "_");
    match sanitized.chars().next() {
        None => "Empty".into(),
        Some(first) if first.is_ascii_digit() => format!("_{sanitized}"),
        Some(_) => sanitized,
    }
}
