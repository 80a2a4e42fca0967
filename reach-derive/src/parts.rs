//! Implementation of the `#[derive(Parts)]` macro.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, FieldsNamed, Generics, Ident};

/// Expands the derive input into an inherent impl with one part per field.
pub fn expand(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;

    match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) => generate_struct_parts(name, &input.generics, named_fields),
            Fields::Unnamed(_) => syn::Error::new_spanned(
                name,
                "Parts can only be derived for structs with named fields, not tuple structs.",
            )
            .to_compile_error(),
            Fields::Unit => syn::Error::new_spanned(
                name,
                "Parts cannot be derived for unit structs (structs with no fields).",
            )
            .to_compile_error(),
        },
        Data::Enum(_) => syn::Error::new_spanned(
            name,
            "Parts can only be derived for structs, not enums. Use #[derive(Variants)] for enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Parts cannot be derived for unions.").to_compile_error()
        }
    }
}

fn generate_struct_parts(name: &Ident, generics: &Generics, fields: &FieldsNamed) -> TokenStream2 {
    let methods = fields.named.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let field_type = &field.ty;
        let method_name = format_ident!("{}_part", field_name);
        let tag = field_name.to_string();
        let doc = format!("Returns a part focusing on the `{field_name}` field.");

        Some(quote! {
            #[doc = #doc]
            #[inline]
            #[must_use]
            pub fn #method_name() -> impl ::reach::optics::Optic<
                Self,
                #field_type,
                Shape = ::reach::optics::One,
            > + Clone {
                ::reach::optics::part(
                    #tag,
                    |source: &Self| &source.#field_name,
                    |mut source: Self, change: &dyn Fn(#field_type) -> #field_type| {
                        source.#field_name = change(source.#field_name);
                        source
                    },
                )
            }
        })
    });

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#methods)*
        }
    }
}
