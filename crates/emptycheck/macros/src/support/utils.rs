use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, FieldsNamed, GenericParam, Generics, Ident, Path};

/// Named fields of a braced struct, `None` for any other item.
pub fn named_fields(input: &DeriveInput) -> Option<&FieldsNamed> {
    match &input.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(named) => Some(named),
            Fields::Unnamed(_) | Fields::Unit => None,
        },
        Data::Enum(_) | Data::Union(_) => None,
    }
}

/// The error for an item that has no field table to generate.
pub fn not_a_record(input: &DeriveInput) -> syn::Error {
    let kind = match &input.data {
        Data::Struct(_) => "a struct without named fields",
        Data::Enum(_) => "an enum",
        Data::Union(_) => "a union",
    };
    syn::Error::new(
        input.ident.span(),
        format!(
            "#[derive(EmptyCheck)] on {kind} needs `#[emptycheck(emptiable)]` or \
             `#[emptycheck(zeroable)]`; only structs with named fields are walked field by field"
        ),
    )
}

/// Add `Inspect` bounds to every type parameter.
pub fn add_inspect_bounds(mut generics: Generics, krate: &Path) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(syn::parse_quote!(#krate::Inspect));
        }
    }
    generics
}

/// Field label as written by the user, without a raw-identifier prefix.
pub fn field_label(ident: &Ident) -> String {
    ident.unraw().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;

    #[test]
    fn test_named_fields() {
        let named: DeriveInput = syn::parse_quote! { struct A { a: i32 } };
        let tuple: DeriveInput = syn::parse_quote! { struct B(i32); };
        let enumeration: DeriveInput = syn::parse_quote! { enum C { X } };

        assert!(named_fields(&named).is_some());
        assert!(named_fields(&tuple).is_none());
        assert!(named_fields(&enumeration).is_none());
        assert!(not_a_record(&enumeration).to_string().contains("an enum"));
    }

    #[test]
    fn test_add_inspect_bounds() {
        let generics: Generics = syn::parse_quote! { <'a, T: Clone, const N: usize> };
        let krate: Path = syn::parse_quote!(::emptycheck);
        let bounded = add_inspect_bounds(generics, &krate);

        let bounds: Vec<String> = bounded
            .type_params()
            .flat_map(|param| param.bounds.iter())
            .map(|bound| bound.to_token_stream().to_string())
            .collect();
        assert_eq!(bounds.len(), 2);
        assert!(bounds[1].ends_with("Inspect"));
        assert_eq!(bounded.lifetimes().count(), 1);
        assert_eq!(bounded.const_params().count(), 1);
    }

    #[test]
    fn test_field_label_strips_raw_prefix() {
        let ident: Ident = syn::parse_quote!(r#type);
        assert_eq!(field_label(&ident), "type");
    }
}
