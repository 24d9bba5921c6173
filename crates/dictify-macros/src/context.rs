use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics, Ident};

use crate::config::MacroConfig;

pub struct MacroContext {
    pub config: MacroConfig,
    pub input: DeriveInput,
}

impl MacroContext {
    pub fn new(config: MacroConfig, input: DeriveInput) -> Self {
        Self { config, input }
    }

    pub fn ident(&self) -> &Ident {
        &self.input.ident
    }

    pub fn generics(&self) -> &Generics {
        &self.input.generics
    }

    #[allow(non_snake_case)]
    pub fn IntoDict(&self) -> TokenStream {
        let dict_crate = &self.config.dict_crate;
        quote!(#dict_crate::IntoDict)
    }

    #[allow(non_snake_case)]
    pub fn FieldWriter(&self) -> TokenStream {
        let dict_crate = &self.config.dict_crate;
        quote!(#dict_crate::FieldWriter)
    }

    #[allow(non_snake_case)]
    pub fn ToValue(&self) -> TokenStream {
        let dict_crate = &self.config.dict_crate;
        quote!(#dict_crate::ToValue)
    }

    /// Generics with a `ToValue` bound added to every type parameter.
    ///
    /// The where clause is only created when there are type parameters, so
    /// non-generic records expand to a plain `impl Trait for Type`.
    fn bounded_generics(&self) -> Generics {
        let mut generics = self.generics().clone();
        let type_params: Vec<Ident> = generics
            .type_params()
            .map(|tp| tp.ident.clone())
            .collect();
        if type_params.is_empty() {
            return generics;
        }
        let to_value = self.ToValue();
        let where_clause = generics.make_where_clause();
        for ident in type_params {
            where_clause
                .predicates
                .push(syn::parse_quote!(#ident: #to_value));
        }
        generics
    }

    /// Generates the `IntoDict` impl block around `write_body`, which may use
    /// `self` and `fields`.
    pub fn impl_into_dict(&self, write_body: TokenStream) -> TokenStream {
        let ident = self.ident();
        let into_dict = self.IntoDict();
        let field_writer = self.FieldWriter();
        let generics = self.bounded_generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        quote! {
            impl #impl_generics #into_dict for #ident #ty_generics #where_clause {
                fn write_fields(&self, fields: &mut #field_writer) {
                    #write_body
                }
            }
        }
    }
}
