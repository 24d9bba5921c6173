use proc_macro2::Span;
use std::collections::HashMap;
use syn::Attribute;
use syn::spanned::Spanned;

/// Extracts spans of individual keys from `#[dict(...)]` attributes, so that
/// errors can point at `tag = "..."` rather than at the derive.
///
/// For `#[dict(tag = "")]`, `spans.get("tag")` returns the span of the value.
pub fn extract_dict_attr_spans(attrs: &[Attribute]) -> HashMap<String, Span> {
    let mut spans = HashMap::new();

    for attr in attrs {
        if !attr.path().is_ident("dict") {
            continue;
        }

        let _ = attr.parse_nested_meta(|meta| {
            let Some(ident) = meta.path.get_ident() else {
                return Ok(());
            };
            let mut span = meta.path.span();
            if meta.input.peek(syn::Token![=]) {
                let _: syn::Token![=] = meta.input.parse()?;
                let value: syn::Expr = meta.input.parse()?;
                span = value.span();
            }
            spans.insert(ident.to_string(), span);
            Ok(())
        });
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn extracts_name_value_attributes() {
        let field: syn::Field = parse_quote! {
            #[dict(tag = "name,omitempty")]
            field: String
        };

        let spans = extract_dict_attr_spans(&field.attrs);

        assert!(spans.contains_key("tag"));
    }

    #[test]
    fn ignores_non_dict_attributes() {
        let field: syn::Field = parse_quote! {
            #[serde(rename = "foo")]
            #[dict(tag = "bar")]
            field: String
        };

        let spans = extract_dict_attr_spans(&field.attrs);

        assert!(spans.contains_key("tag"));
        assert!(!spans.contains_key("rename"));
    }
}
