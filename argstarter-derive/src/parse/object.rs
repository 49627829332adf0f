use std::collections::HashMap;

use proc_macro2::Span;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Meta, Token};

use crate::common::field::Info as FieldInfo;
use crate::common::object::{variant_fn_ident, Info as ObjectInfo};
use crate::common::HostKind;

impl ObjectInfo {
    pub fn parse(input: &DeriveInput, host: HostKind) -> syn::Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(
                input.generics.span(),
                "generic host types are not supported",
            ));
        }
        let fields = match input.data {
            Data::Struct(ref data) => match data.fields {
                Fields::Named(ref fields) => &fields.named,
                _ => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "starter derives only support structs with named fields",
                    ));
                }
            },
            _ => {
                return Err(syn::Error::new(
                    input.ident.span(),
                    "starter derives only support structs with named fields",
                ));
            }
        };
        let mut dump = false;
        for attr in &input.attrs {
            if !attr.path().is_ident("starter") {
                continue;
            }
            let nested = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
            for meta in nested {
                match meta {
                    Meta::Path(ref path) if path.is_ident("dump") => dump = true,
                    _ => {
                        return Err(syn::Error::new(
                            meta.span(),
                            "unknown starter attribute. expected `dump`",
                        ));
                    }
                }
            }
        }
        let mut args = Vec::new();
        for field in fields {
            if field.attrs.iter().any(|attr| attr.path().is_ident("arg")) {
                args.push(FieldInfo::from_syn_field(field)?);
            }
        }
        let savable = match host {
            HostKind::Fragment => true,
            HostKind::Activity => args.iter().any(|arg| !arg.no_setter()),
        };
        let info = Self {
            name: input.ident.clone(),
            host,
            args,
            savable,
            dump,
        };
        info.validate()?;
        Ok(info)
    }

    /// Structural checks that run before any token is produced: reserved
    /// parameter names and collisions between generated identifiers.
    fn validate(&self) -> syn::Result<()> {
        for arg in &self.args {
            let name = arg.ident.to_string();
            if name == "extras" || (self.host == HostKind::Activity && name == "context") {
                return Err(syn::Error::new(
                    arg.ident.span(),
                    format!("argument name `{name}` is reserved by generated starter code"),
                ));
            }
        }
        let mut keys: HashMap<String, String> = HashMap::new();
        for arg in &self.args {
            claim(
                &mut keys,
                arg.key_const().to_string(),
                format!("key const of `{}`", arg.ident),
                arg.ident.span(),
            )?;
        }
        let mut routines: HashMap<String, String> = HashMap::new();
        claim(
            &mut routines,
            "fill".to_owned(),
            "the fill routine".to_owned(),
            self.name.span(),
        )?;
        if self.savable {
            claim(
                &mut routines,
                "save".to_owned(),
                "the save routine".to_owned(),
                self.name.span(),
            )?;
        }
        for variant in self.variants() {
            for base in self.host.starter_bases() {
                claim(
                    &mut routines,
                    variant_fn_ident(base, &variant).to_string(),
                    "a starter routine".to_owned(),
                    self.name.span(),
                )?;
            }
        }
        for arg in self.args.iter().filter(|arg| arg.no_setter()) {
            claim(
                &mut routines,
                arg.checker_ident().to_string(),
                format!("the presence accessor of `{}`", arg.ident),
                arg.ident.span(),
            )?;
            claim(
                &mut routines,
                arg.getter_ident().to_string(),
                format!("the value accessor of `{}`", arg.ident),
                arg.ident.span(),
            )?;
        }
        Ok(())
    }
}

fn claim(
    seen: &mut HashMap<String, String>,
    name: String,
    what: String,
    span: Span,
) -> syn::Result<()> {
    if let Some(holder) = seen.insert(name.clone(), what.clone()) {
        return Err(syn::Error::new(
            span,
            format!("generated identifier `{name}` for {what} collides with {holder}"),
        ));
    }
    Ok(())
}
