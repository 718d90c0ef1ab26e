use std::collections::HashMap;

use check_keyword::CheckKeyword;
use enumeration::EnumerationType;
use heck::ToPascalCase;
use proc_macro2::{Literal, Span};
use quote::quote;
use syn::{parse_quote, Arm, Ident, Item, Variant};

use crate::common::{generate_with, sanitize_identifier, EnumerationVisitor, HEADER};
use crate::Error;

#[derive(Default)]
struct RustVisitor {
    output_items: Vec<Item>,
}

impl RustVisitor {
    fn new() -> Self {
        Self::default()
    }

    fn name_to_ident(name: &str) -> Ident {
        if ["crate", "self", "super", "Self"].contains(&name) {
            // These are keywords that are not allowed as raw identifiers
            Ident::new(&format!("{}_", name), Span::call_site())
        } else if name.is_keyword() {
            Ident::new_raw(name, Span::call_site())
        } else {
            Ident::new(name, Span::call_site())
        }
    }

    fn member_to_ident(member: &str) -> Ident {
        let name = sanitize_identifier(member).to_pascal_case();
        match name.chars().next() {
            None => Ident::new("Empty", Span::call_site()),
            Some(first) if first.is_ascii_digit() => {
                Ident::new(&format!("_{name}"), Span::call_site())
            }
            Some(_) => Self::name_to_ident(&name),
        }
    }
}

impl EnumerationVisitor for RustVisitor {
    fn visit_enumeration(&mut self, enumeration: &EnumerationType) -> Result<(), Error> {
        let display_name = enumeration.display_name();
        let name = Self::member_to_ident(display_name);

        let mut seen: HashMap<String, &str> = HashMap::with_capacity(enumeration.len());
        let mut members = Vec::with_capacity(enumeration.len());
        for value in enumeration {
            let ident = Self::member_to_ident(value.name());
            if let Some(first) = seen.insert(ident.to_string(), value.name()) {
                return Err(Error::IdentifierCollision {
                    enumeration: display_name.to_string(),
                    identifier: ident.to_string(),
                    first: first.to_string(),
                    second: value.name().to_string(),
                });
            }
            members.push((ident, value.name(), Literal::i64_unsuffixed(value.value())));
        }

        let variants = members.iter().map(|(ident, member, discriminant)| -> Variant {
            let doc = format!(" Enumeration member `` {member} ``");
            parse_quote! {
                #[doc = #doc]
                #ident = #discriminant
            }
        });
        let member_names = members.iter().map(|(_, member, _)| member);
        let names = quote! { #(#member_names),* };

        let value_arms = members.iter().map(|(ident, _, discriminant)| -> Arm {
            parse_quote! {
                Self::#ident => #discriminant,
            }
        });
        let name_arms = members.iter().map(|(ident, member, _)| -> Arm {
            parse_quote! {
                Self::#ident => #member,
            }
        });
        let try_from_arms = members.iter().map(|(ident, _, discriminant)| -> Arm {
            parse_quote! {
                #discriminant => Ok(Self::#ident),
            }
        });
        let from_str_arms = members.iter().map(|(ident, member, _)| -> Arm {
            parse_quote! {
                #member => Ok(Self::#ident),
            }
        });

        let doc = format!(" Enumeration `` {display_name} ``");
        let type_def: Item = parse_quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub enum #name {
                #(#variants),*
            }
        };
        let impl_block: Item = parse_quote! {
            impl #name {
                pub const NAMES: &'static [&'static str] = &[#names];

                pub const fn value(self) -> i64 {
                    match self {
                        #(#value_arms)*
                    }
                }

                pub const fn name(self) -> &'static str {
                    match self {
                        #(#name_arms)*
                    }
                }
            }
        };
        let try_from_impl: Item = parse_quote! {
            impl TryFrom<i64> for #name {
                type Error = ::enumeration::Error;

                fn try_from(value: i64) -> Result<Self, Self::Error> {
                    match value {
                        #(#try_from_arms)*
                        _ => Err(::enumeration::Error::OutOfRange {
                            enumeration: #display_name.to_string(),
                            value,
                        }),
                    }
                }
            }
        };
        let from_str_impl: Item = parse_quote! {
            impl ::std::str::FromStr for #name {
                type Err = ::enumeration::Error;

                fn from_str(name: &str) -> Result<Self, Self::Err> {
                    match name {
                        #(#from_str_arms)*
                        _ => Err(::enumeration::Error::UnknownAttribute {
                            owner: #display_name.to_string(),
                            attribute: name.to_string(),
                        }),
                    }
                }
            }
        };
        let display_impl: Item = parse_quote! {
            impl ::std::fmt::Display for #name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(self.name())
                }
            }
        };

        self.output_items.extend([
            type_def,
            impl_block,
            try_from_impl,
            from_str_impl,
            display_impl,
        ]);
        Ok(())
    }

    fn finish(self) -> String {
        let doc_comment = format!(" {HEADER}");
        let root = syn::File {
            shebang: None,
            attrs: vec![
                parse_quote!(#![doc = #doc_comment]),
                parse_quote!(#![allow(dead_code)]),
            ],
            items: self.output_items,
        };
        prettyplease::unparse(&root)
    }
}

pub fn generate(enumerations: &[&EnumerationType]) -> Result<String, Error> {
    generate_with(RustVisitor::new(), enumerations)
}
