//! Derive macro for `configor::Configure`.
//!
//! Generates the per-type field descriptor table that drives environment
//! overrides, defaults and required checks, together with the `Slot` impl that
//! lets the struct nest inside other configuration records and sequences.
//!
//! ```ignore
//! #[derive(Configure, Serialize, Deserialize, Default)]
//! #[serde(default)]
//! struct Database {
//!     #[configor(env = "DATABASE_URL", required)]
//!     url: String,
//!     #[configor(default = 5)]
//!     pool_size: u32,
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, LitStr, Token};

/// Derive `configor::Configure` and `configor::Slot` for a non-generic struct with named fields.
///
/// Field attributes, all under `#[configor(...)]`:
/// - `env = "NAME"`: explicit environment variable, bypassing the derived name
/// - `default = <literal>`: value decoded into the field when it is blank
/// - `required`: fail the load when the field is blank and has no default
/// - `skip`: leave the field out of binding entirely
#[proc_macro_derive(Configure, attributes(configor))]
pub fn derive_configure(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Default)]
struct FieldAttrs {
    env: Option<String>,
    default: Option<String>,
    required: bool,
    skip: bool,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Configure can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Configure requires a struct with named fields",
        ));
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Configure cannot be derived for generic structs",
        ));
    }

    let mut entries = Vec::new();
    let mut blank_checks = Vec::new();

    for field in &named.named {
        let attrs = parse_field_attrs(field)?;
        if attrs.skip {
            continue;
        }
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;
        let name = ident.to_string();
        let name = name.trim_start_matches("r#");
        let env = option_tokens(attrs.env);
        let default = option_tokens(attrs.default);
        let required = attrs.required;

        entries.push(quote! {
            ::configor::Field::new(
                ::configor::FieldMeta {
                    name: #name,
                    env: #env,
                    default: #default,
                    required: #required,
                },
                &mut self.#ident,
            )
        });
        blank_checks.push(quote! { ::configor::Slot::is_blank(&self.#ident) });
    }

    let blank = blank_checks
        .into_iter()
        .reduce(|acc, check| quote!(#acc && #check))
        .unwrap_or_else(|| quote!(true));
    let ident = &input.ident;

    Ok(quote! {
        impl ::configor::Configure for #ident {
            fn fields(&mut self) -> ::std::vec::Vec<::configor::Field<'_>> {
                ::std::vec![#(#entries),*]
            }
        }

        impl ::configor::Slot for #ident {
            fn is_blank(&self) -> bool {
                #blank
            }

            fn assign(&mut self, literal: &str) -> ::std::result::Result<(), ::configor::DecodeError> {
                *self = ::configor::decode_literal(literal)?;
                ::std::result::Result::Ok(())
            }

            fn shape(&mut self) -> ::configor::Shape<'_> {
                ::configor::Shape::Record(self)
            }
        }
    })
}

fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut attrs = FieldAttrs::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("configor") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("env") {
                let name: LitStr = meta.value()?.parse()?;
                if name.value().is_empty() {
                    return Err(syn::Error::new(name.span(), "`env` must not be empty"));
                }
                attrs.env = Some(name.value());
            } else if meta.path.is_ident("default") {
                let lit: Lit = meta.value()?.parse()?;
                attrs.default = Some(literal_text(&lit)?);
            } else if meta.path.is_ident("required") {
                attrs.required = if meta.input.peek(Token![=]) {
                    match meta.value()?.parse::<Lit>()? {
                        Lit::Bool(flag) => flag.value,
                        Lit::Str(flag) => flag.value() == "true",
                        other => {
                            return Err(syn::Error::new(
                                other.span(),
                                "expected `true`, `false` or a string",
                            ))
                        }
                    }
                } else {
                    true
                };
            } else if meta.path.is_ident("skip") {
                attrs.skip = true;
            } else {
                return Err(meta.error(
                    "unsupported configor attribute, expected `env`, `default`, `required` or `skip`",
                ));
            }
            Ok(())
        })?;
    }

    Ok(attrs)
}

/// Default literals are kept as text and decoded at bind time, so numbers and
/// booleans are accepted in their source spelling without the type suffix.
fn literal_text(lit: &Lit) -> syn::Result<String> {
    match lit {
        Lit::Str(text) => Ok(text.value()),
        Lit::Int(int) => Ok(int.base10_digits().to_owned()),
        Lit::Float(float) => Ok(float.base10_digits().to_owned()),
        Lit::Bool(flag) => Ok(flag.value.to_string()),
        Lit::Char(ch) => Ok(ch.value().to_string()),
        other => Err(syn::Error::new(other.span(), "unsupported default literal")),
    }
}

fn option_tokens(value: Option<String>) -> TokenStream2 {
    match value {
        Some(value) => quote!(::std::option::Option::Some(#value)),
        None => quote!(::std::option::Option::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand_err(input: &DeriveInput) -> String {
        expand(input).unwrap_err().to_string()
    }

    #[test]
    fn test_generic_struct_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<T> { inner: T }
        };
        assert!(expand_err(&input).contains("generic"));

        let input: DeriveInput = parse_quote! {
            struct Borrowed<'a> { name: &'a str }
        };
        assert!(expand_err(&input).contains("generic"));
    }

    #[test]
    fn test_enums_and_tuple_structs_rejected() {
        let input: DeriveInput = parse_quote! {
            enum Mode { On, Off }
        };
        assert!(expand_err(&input).contains("structs"));

        let input: DeriveInput = parse_quote! {
            struct Port(u16);
        };
        assert!(expand_err(&input).contains("named fields"));
    }

    #[test]
    fn test_field_table_generated() {
        let input: DeriveInput = parse_quote! {
            struct Server {
                #[configor(env = "SERVER_PORT", default = 8080)]
                port: u16,
                #[configor(skip)]
                cache: u8,
            }
        };
        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("\"SERVER_PORT\""));
        assert!(tokens.contains("\"8080\""));
        assert!(!tokens.contains("cache"));
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Server {
                #[configor(rename = "p")]
                port: u16,
            }
        };
        assert!(expand_err(&input).contains("unsupported configor attribute"));
    }
}
