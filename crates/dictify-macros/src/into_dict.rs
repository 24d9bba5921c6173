
use darling::FromField;
use dictify_value::FieldTag;
use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::ext::IdentExt as _;
use syn::spanned::Spanned;
use syn::{Data, DataStruct, Field, Member};

use crate::attrs::{FieldAttrs, extract_dict_attr_spans};
use crate::context::MacroContext;

pub fn derive(context: MacroContext) -> TokenStream {
    derive_inner(&context).unwrap_or_else(syn::Error::into_compile_error)
}

fn derive_inner(context: &MacroContext) -> syn::Result<TokenStream> {
    match &context.input.data {
        Data::Struct(data) => generate_record_writer(context, data),
        Data::Enum(data) => Err(syn::Error::new(
            data.enum_token.span,
            "IntoDict can only be derived for structs",
        )),
        Data::Union(data) => Err(syn::Error::new(
            data.union_token.span,
            "IntoDict can only be derived for structs",
        )),
    }
}

fn generate_record_writer(context: &MacroContext, input: &DataStruct) -> syn::Result<TokenStream> {
    // Unit structs have no fields and fall through to an empty body.
    let mut field_writes = Vec::new();
    for (index, field) in input.fields.iter().enumerate() {
        if let Some(write) = generate_field_write(field, index)? {
            field_writes.push(write);
        }
    }

    let body = if field_writes.is_empty() {
        quote! { let _ = fields; }
    } else {
        quote! { #(#field_writes)* }
    };

    Ok(context.impl_into_dict(body))
}

/// Emits `fields.field(key, omit_empty, &self.member);` for a tagged field.
fn generate_field_write(field: &Field, index: usize) -> syn::Result<Option<TokenStream>> {
    let attrs = FieldAttrs::from_field(field)
        .map_err(|err| syn::Error::new(err.span(), err.to_string()))?;
    let Some(tag) = attrs.tag else {
        return Ok(None);
    };

    if tag.is_empty() {
        let spans = extract_dict_attr_spans(&field.attrs);
        let span = spans.get("tag").copied().unwrap_or_else(|| field.span());
        return Err(syn::Error::new(
            span,
            "empty dict tag; remove the attribute to leave the field out, or use \",omitempty\" to keep the field name",
        ));
    }

    let (member, field_name) = match &field.ident {
        Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
        None => (Member::Unnamed(index.into()), index.to_string()),
    };

    let tag = FieldTag::parse(&tag);
    let key = tag.key_or(&field_name);
    let omit_empty = tag.omit_empty;
    let span = field.ty.span();
    Ok(Some(quote_spanned! {span=>
        fields.field(#key, #omit_empty, &self.#member);
    }))
}
