use std::fmt::Write;

use enumeration::EnumerationType;

use crate::common::{generate_with, sanitize_identifier, EnumerationVisitor, HEADER};
use crate::Error;

pub struct TypescriptVisitor {
    output: String,
}

impl TypescriptVisitor {
    fn new() -> Self {
        Self {
            output: format!("// {HEADER}\n"),
        }
    }
}

impl EnumerationVisitor for TypescriptVisitor {
    fn visit_enumeration(&mut self, enumeration: &EnumerationType) -> Result<(), Error> {
        let name = sanitize_identifier(enumeration.display_name());

        // Writing into a String cannot fail.
        let _ = writeln!(self.output, "\nexport enum {name} {{");
        for value in enumeration {
            let _ = writeln!(self.output, "    {:?} = {},", value.name(), value.value());
        }
        let _ = writeln!(self.output, "}}");
        Ok(())
    }

    fn finish(self) -> String {
        self.output
    }
}

pub fn generate(enumerations: &[&EnumerationType]) -> Result<String, Error> {
    generate_with(TypescriptVisitor::new(), enumerations)
}
