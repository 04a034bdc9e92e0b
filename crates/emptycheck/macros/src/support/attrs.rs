use syn::{
    Attribute, Ident, Lit, Meta, Result, Token,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use crate::support::diag;

/// Parsed `#[emptycheck(...)]` arguments, merged across attributes.
#[derive(Debug, Clone, Default)]
pub struct AttrArgs {
    pub items: Vec<AttrItem>,
}

/// A single attribute item.
#[derive(Debug, Clone)]
pub enum AttrItem {
    /// A flag like `not_required` or `emptiable`
    Flag(Ident),
    /// Key-value pair like `crate = "path"`
    KeyValue { key: Ident, value: Lit },
}

impl AttrItem {
    fn key(&self) -> &Ident {
        match self {
            Self::Flag(key) | Self::KeyValue { key, .. } => key,
        }
    }
}

impl AttrArgs {
    /// Find a key-value pair by key name.
    pub fn get_value(&self, key: &str) -> Option<&Lit> {
        self.items.iter().find_map(|item| match item {
            AttrItem::KeyValue { key: k, value } if k == key => Some(value),
            _ => None,
        })
    }

    /// Parse a path from a string key-value pair, e.g. `crate = "::my::path"`.
    pub fn get_path(&self, key: &str) -> Result<Option<syn::Path>> {
        match self.get_value(key) {
            None => Ok(None),
            Some(Lit::Str(s)) => s
                .parse::<syn::Path>()
                .map(Some)
                .map_err(|e| diag::error_spanned(s, format!("invalid path for `{key}`: {e}"))),
            Some(other) => Err(diag::error_spanned(
                other,
                format!("expected a string path for `{key}`"),
            )),
        }
    }

    /// Check if a flag is present.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, AttrItem::Flag(f) if f == flag))
    }

    /// Reject flags and keys outside `flags` / `keys`.
    pub fn ensure_known(&self, flags: &[&str], keys: &[&str]) -> Result<()> {
        for item in &self.items {
            let known = match item {
                AttrItem::Flag(f) => flags.iter().any(|name| f == name),
                AttrItem::KeyValue { key, .. } => keys.iter().any(|name| key == name),
            };
            if !known {
                let mut expected: Vec<String> = flags.iter().map(|f| format!("`{f}`")).collect();
                expected.extend(keys.iter().map(|k| format!("`{k} = \"...\"`")));
                return Err(diag::error_spanned(
                    item.key(),
                    format!(
                        "unknown emptycheck attribute `{}`; expected one of: {}",
                        item.key(),
                        expected.join(", ")
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Parse attribute like `#[emptycheck(...)]` (the whole Attribute, not only args).
pub fn parse_attr(attr: &Attribute, expected: &str) -> Result<Option<AttrArgs>> {
    if !attr.path().is_ident(expected) {
        return Ok(None);
    }

    match &attr.meta {
        Meta::Path(_) => Ok(Some(AttrArgs::default())),
        Meta::List(list) => {
            let args = syn::parse2::<AttrArgsParser>(list.tokens.clone())?;
            Ok(Some(args.0))
        }
        Meta::NameValue(nv) => Err(diag::error_spanned(
            nv,
            format!("#[{expected}] must be #[{expected}(...)] (not name-value)"),
        )),
    }
}

/// Parse all attributes of a given name and merge them.
pub fn parse_attrs(attrs: &[Attribute], name: &str) -> Result<AttrArgs> {
    let mut result = AttrArgs::default();

    for attr in attrs {
        if let Some(args) = parse_attr(attr, name)? {
            result.items.extend(args.items);
        }
    }

    Ok(result)
}

struct AttrArgsParser(AttrArgs);

impl Parse for AttrArgsParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = Punctuated::<AttrItemParser, Token![,]>::parse_terminated(input)?
            .into_iter()
            .map(|x| x.0)
            .collect();
        Ok(Self(AttrArgs { items }))
    }
}

struct AttrItemParser(AttrItem);

impl Parse for AttrItemParser {
    fn parse(input: ParseStream) -> Result<Self> {
        // `parse_any` so that `crate = "..."` is accepted as a key.
        let key = Ident::parse_any(input)?;

        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            let value: Lit = input.parse()?;
            return Ok(Self(AttrItem::KeyValue { key, value }));
        }

        Ok(Self(AttrItem::Flag(key)))
    }
}
