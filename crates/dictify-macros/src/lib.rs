use darling::FromDeriveInput;
use syn::parse_macro_input;

use crate::{attrs::ContainerAttrs, config::MacroConfig, context::MacroContext};

mod attrs;
pub(crate) mod config;
pub(crate) mod context;
mod into_dict;

/// Derives `dictify::IntoDict`.
///
/// Fields marked `#[dict(tag = "key[,omitempty]")]` are written under `key`,
/// or under the field's own name when `key` is empty. The runtime crate path
/// can be overridden with `#[dict(crate = path)]` on the container.
#[proc_macro_derive(IntoDict, attributes(dict))]
pub fn into_dict_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    match create_context(input) {
        Ok(context) => into_dict::derive(context).into(),
        Err(err) => err.write_errors().into(),
    }
}

fn create_context(input: syn::DeriveInput) -> darling::Result<MacroContext> {
    let attrs = ContainerAttrs::from_derive_input(&input)?;
    Ok(MacroContext::new(MacroConfig::from_attrs(attrs), input))
}
