//! Implementation of the `#[derive(Variants)]` macro.
//!
//! Single-field tuple variants and unit variants get an `on_<variant>()`
//! maybe. Variants with several fields or named fields are skipped: a maybe
//! borrows its element, and those fields do not live together as one value.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant};

/// Expands the derive input into an inherent impl with one maybe per
/// supported variant.
pub fn expand(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;

    match &input.data {
        Data::Enum(data_enum) => generate_enum_variants(name, &input.generics, data_enum.variants.iter()),
        Data::Struct(_) => syn::Error::new_spanned(
            name,
            "Variants can only be derived for enums, not structs. Use #[derive(Parts)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Variants cannot be derived for unions.").to_compile_error()
        }
    }
}

fn generate_enum_variants<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let methods: Vec<TokenStream2> = variants.filter_map(generate_variant_maybe).collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#methods)*
        }
    }
}

fn generate_variant_maybe(variant: &Variant) -> Option<TokenStream2> {
    let variant_name = &variant.ident;
    let tag = to_snake_case(&variant_name.to_string());
    let method_name = format_ident!("on_{}", tag);

    match &variant.fields {
        Fields::Unit => Some(generate_unit_variant_maybe(variant_name, &method_name, &tag)),
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            Some(generate_single_field_maybe(variant_name, &method_name, &tag, field_type))
        }
        Fields::Unnamed(_) | Fields::Named(_) => None,
    }
}

fn generate_unit_variant_maybe(variant_name: &Ident, method_name: &Ident, tag: &str) -> TokenStream2 {
    let doc = format!("Returns a maybe that is present when the value is `{variant_name}`.");

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::reach::optics::Optic<
            Self,
            (),
            Shape = ::reach::optics::ZeroOrOne,
        > + Clone {
            ::reach::optics::maybe(
                #tag,
                |source: &Self| match source {
                    Self::#variant_name => Some(&()),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |source: Self, _change: &dyn Fn(())| source,
            )
        }
    }
}

fn generate_single_field_maybe(
    variant_name: &Ident,
    method_name: &Ident,
    tag: &str,
    field_type: &Type,
) -> TokenStream2 {
    let doc = format!("Returns a maybe focusing on the value of the `{variant_name}` variant.");

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::reach::optics::Optic<
            Self,
            #field_type,
            Shape = ::reach::optics::ZeroOrOne,
        > + Clone {
            ::reach::optics::maybe(
                #tag,
                |source: &Self| match source {
                    Self::#variant_name(value) => Some(value),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |source: Self, change: &dyn Fn(#field_type) -> #field_type| match source {
                    Self::#variant_name(value) => Self::#variant_name(change(value)),
                    #[allow(unreachable_patterns)]
                    other => other,
                },
            )
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let characters: Vec<char> = input.chars().collect();

    for (index, &character) in characters.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous = characters[index - 1];
                let next_is_lowercase = characters.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous.is_lowercase() || (previous.is_uppercase() && next_is_lowercase) {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use syn::parse_quote;

    #[rstest]
    #[case("Circle", "circle")]
    #[case("KeyPress", "key_press")]
    #[case("MouseClick", "mouse_click")]
    #[case("none", "none")]
    #[case("HTTPRequest", "http_request")]
    #[case("XMLParser", "xml_parser")]
    #[case("A", "a")]
    fn test_to_snake_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    proptest! {
        #[test]
        fn prop_snake_case_has_no_uppercase(input in "[A-Z][A-Za-z0-9]{0,16}") {
            prop_assert!(!to_snake_case(&input).chars().any(char::is_uppercase));
        }

        #[test]
        fn prop_snake_case_is_idempotent(input in "[A-Z][A-Za-z0-9]{0,16}") {
            let once = to_snake_case(&input);
            prop_assert_eq!(to_snake_case(&once), once.clone());
        }
    }

    #[test]
    fn test_generates_methods_for_supported_variants_only() {
        let input: DeriveInput = parse_quote! {
            enum Reply {
                Accepted(u64),
                TimedOut,
                Partial(u64, u64),
                Redirected { location: String },
            }
        };

        let expanded = expand(&input).to_string();
        assert!(expanded.contains("fn on_accepted"));
        assert!(expanded.contains("fn on_timed_out"));
        assert!(expanded.contains("\"timed_out\""));
        assert!(!expanded.contains("fn on_partial"));
        assert!(!expanded.contains("fn on_redirected"));
    }

    #[test]
    fn test_rejects_structs() {
        let input: DeriveInput = parse_quote! {
            struct Point { x: i32 }
        };

        let expanded = expand(&input).to_string();
        assert!(expanded.contains("compile_error"));
        assert!(expanded.contains("Parts"));
    }
}
