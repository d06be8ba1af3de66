use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Field, Fields, Ident, Result, spanned::Spanned};

pub(crate) fn expand_decode(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new(
            input.span(),
            "`Decode` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new(
            input.span(),
            "`Decode` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .collect::<Result<Vec<_>>>()?;

    // Struct expression fields are evaluated in the order written, which keeps
    // the read order equal to the declaration order.
    let initializers = fields.iter().map(|field| {
        let FieldMetadata { name, skip } = field;

        if *skip {
            quote! { #name: ::core::default::Default::default() }
        } else {
            quote! { #name: ::sprocket::Decode::decode(d)? }
        }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::sprocket::Decode for #name #ty_generics #where_clause {
            fn decode<S: ::sprocket::source::Source>(
                d: &mut ::sprocket::Decoder<S>,
            ) -> ::core::option::Option<Self> {
                ::core::option::Option::Some(Self {
                    #(#initializers,)*
                })
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    skip: bool,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Self> {
        let Some(name) = field.ident.clone() else {
            Err(Error::new(field.span(), "Field must be named."))?
        };

        let mut skip = false;

        for attr in field.attrs.iter().filter(|a| a.path().is_ident("decode")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else {
                    Err(meta.error("Unknown `decode` option, expected `skip`."))
                }
            })?;
        }

        Ok(Self { name, skip })
    }
}
