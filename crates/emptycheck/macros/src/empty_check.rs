//! `#[derive(EmptyCheck)]` code generation.

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{DeriveInput, FieldsNamed, Path};

use crate::support::{attrs, utils};

const ATTR: &str = "emptycheck";

/// Container options from `#[emptycheck(...)]` on the item.
struct ContainerAttrs {
    krate: Path,
    emptiable: bool,
    zeroable: bool,
}

impl ContainerAttrs {
    fn parse(input: &DeriveInput) -> syn::Result<Self> {
        let args = attrs::parse_attrs(&input.attrs, ATTR)?;
        args.ensure_known(&["emptiable", "zeroable"], &["crate"])?;

        Ok(Self {
            krate: args
                .get_path("crate")?
                .unwrap_or_else(|| syn::parse_quote!(::emptycheck)),
            emptiable: args.has_flag("emptiable"),
            zeroable: args.has_flag("zeroable"),
        })
    }

    fn has_capability(&self) -> bool {
        self.emptiable || self.zeroable
    }
}

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let container = ContainerAttrs::parse(input)?;
    let krate = &container.krate;
    let name = &input.ident;

    let generics = utils::add_inspect_bounds(input.generics.clone(), krate);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let capabilities = capability_methods(&container);

    let Some(fields) = utils::named_fields(input) else {
        if !container.has_capability() {
            return Err(utils::not_a_record(input));
        }
        return Ok(quote! {
            impl #impl_generics #krate::Inspect for #name #ty_generics #where_clause {
                fn shape(&self) -> #krate::Shape<'_> {
                    #krate::Shape::Opaque
                }

                #capabilities
            }
        });
    };

    let entries = field_entries(fields, krate)?;

    Ok(quote! {
        impl #impl_generics #krate::Record for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<#krate::Field<'_>> {
                ::std::vec![#(#entries),*]
            }
        }

        impl #impl_generics #krate::Inspect for #name #ty_generics #where_clause {
            fn shape(&self) -> #krate::Shape<'_> {
                #krate::Shape::Record(self)
            }

            #capabilities
        }
    })
}

/// One `Field` constructor per field, in declaration order.
fn field_entries(fields: &FieldsNamed, krate: &Path) -> syn::Result<Vec<TokenStream2>> {
    fields
        .named
        .iter()
        .map(|field| {
            let args = attrs::parse_attrs(&field.attrs, ATTR)?;
            args.ensure_known(&["not_required"], &[])?;

            let ident = field
                .ident
                .as_ref()
                .expect("named fields always have an ident");
            let label = utils::field_label(ident);

            if args.has_flag("not_required") {
                return Ok(quote! { #krate::Field::not_required(#label) });
            }

            // Missing `Inspect` impls are reported at the field's type.
            let span = Span::call_site().located_at(field.ty.span());
            Ok(quote_spanned! {span=> #krate::Field::required(#label, &self.#ident) })
        })
        .collect()
}

fn capability_methods(container: &ContainerAttrs) -> TokenStream2 {
    let krate = &container.krate;
    let mut methods = TokenStream2::new();

    if container.emptiable {
        methods.extend(quote! {
            fn as_emptiable(&self) -> ::core::option::Option<&dyn #krate::Emptiable> {
                ::core::option::Option::Some(self)
            }
        });
    }
    if container.zeroable {
        methods.extend(quote! {
            fn as_zeroable(&self) -> ::core::option::Option<&dyn #krate::Zeroable> {
                ::core::option::Option::Some(self)
            }
        });
    }

    methods
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(input: DeriveInput) -> String {
        expand(&input).unwrap().to_string()
    }

    #[test]
    fn test_record_lists_fields_in_order() {
        let out = expand_str(syn::parse_quote! {
            struct Form {
                name: String,
                #[emptycheck(not_required)]
                note: String,
                r#type: u8,
            }
        });

        let name = out.find("required (\"name\"").unwrap();
        let note = out.find("not_required (\"note\")").unwrap();
        let kind = out.find("required (\"type\"").unwrap();
        assert!(name < note && note < kind);
        assert!(out.contains("Shape :: Record (self)"));
        assert!(!out.contains("as_emptiable"));
    }

    #[test]
    fn test_capability_methods() {
        let out = expand_str(syn::parse_quote! {
            #[emptycheck(emptiable, zeroable)]
            struct Stamp { at: u64 }
        });

        assert!(out.contains("fn as_emptiable"));
        assert!(out.contains("fn as_zeroable"));
    }

    #[test]
    fn test_enum_with_capability_is_opaque() {
        let out = expand_str(syn::parse_quote! {
            #[emptycheck(emptiable)]
            enum Choice { None, Some(u8) }
        });

        assert!(out.contains("Shape :: Opaque"));
        assert!(!out.contains("Record for"));
    }

    #[test]
    fn test_enum_without_capability_is_rejected() {
        let input: DeriveInput = syn::parse_quote! { enum Choice { A } };
        assert!(expand(&input).is_err());
    }

    #[test]
    fn test_crate_override() {
        let out = expand_str(syn::parse_quote! {
            #[emptycheck(crate = "my_crate::check")]
            struct Form { name: String }
        });

        assert!(out.contains("my_crate :: check :: Record"));
        assert!(!out.contains(":: emptycheck ::"));
    }

    #[test]
    fn test_generic_params_get_bounds() {
        let out = expand_str(syn::parse_quote! {
            struct Page<T> { items: Vec<T> }
        });

        assert!(out.contains("T : :: emptycheck :: Inspect"));
    }
}
