pub mod activity;
pub mod field;
pub mod fragment;

use std::env::current_dir;

use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::common::field::{Accessor, Info as FieldInfo};
use crate::common::object::Info as ObjectInfo;
use crate::common::HostKind;

impl ObjectInfo {
    /// Assembles the one generated unit for this class, in fixed order: key
    /// consts, the fill routine, every starter routine across all variants in
    /// expansion order, then the host-kind extras.
    pub fn generate(&self) -> syn::Result<TokenStream> {
        let starter = self.starter_ident();
        let target = &self.name;
        let keys = key_consts(&self.args);
        let fill = fill_fn(self);
        let mut starters = TokenStream::new();
        for variant in self.variants() {
            match self.host {
                HostKind::Activity => starters.extend(activity::starters(self, &variant)),
                HostKind::Fragment => starters.extend(fragment::starters(self, &variant)),
            }
        }
        let extra = match self.host {
            HostKind::Activity => activity::extra_members(self),
            HostKind::Fragment => fragment::extra_members(self),
        };
        let doc = format!("Generated starter for [`{target}`]. Do not modify!");
        let output = quote! {
            #[doc = #doc]
            pub struct #starter;
            #[allow(clippy::too_many_arguments)]
            impl #starter {
                #keys
                #fill
                #starters
                #extra
            }
        };
        if self.dump {
            let name = self.name.to_string().to_case(Case::Snake);
            match current_dir() {
                Ok(mut file_name) => {
                    file_name.push("target");
                    file_name.push(format!("{name}_starter_code_gen.rs"));
                    let _ = std::fs::write(file_name, output.to_string());
                }
                Err(err) => {
                    return Err(syn::Error::new(self.name.span(), format!("Failed to dump code gen because target folder could not be located. remove `dump` from struct starter attributes. [{err}]")));
                }
            }
        }
        Ok(output)
    }
}

fn key_consts(args: &[FieldInfo]) -> TokenStream {
    args.iter()
        .map(|arg| {
            let key = arg.key_const();
            let value = arg.key_value();
            let doc = format!("Bundle key of the `{}` argument.", arg.ident);
            quote! {
                #[doc = #doc]
                pub const #key: &'static str = #value;
            }
        })
        .collect()
}

fn fill_fn(class: &ObjectInfo) -> TokenStream {
    let host = class.host.param_ident();
    let target = &class.name;
    let args_ref = class.host.args_ref(&host);
    let doc = format!(
        "Reads each argument out of the {}'s container and assigns it to the matching field.",
        host
    );
    let body = if class.args.iter().any(|arg| !arg.no_setter()) {
        let assignments = fill_assignments(class, &host);
        quote! {
            let ::core::option::Option::Some(arguments) = #args_ref.cloned() else {
                return;
            };
            #assignments
        }
    } else {
        TokenStream::new()
    };
    quote! {
        #[doc = #doc]
        pub fn fill(#host: &mut #target) {
            #body
        }
    }
}

fn fill_assignments(class: &ObjectInfo, host: &Ident) -> TokenStream {
    let bundle = quote! {arguments};
    let mut out = TokenStream::new();
    for arg in &class.args {
        let name = &arg.ident;
        let key = key_ref(arg);
        let read = arg.ty.read_expr(&bundle, &key);
        let stmt = match (&arg.default, arg.nullable) {
            // optional nullable: a stored value is always `Some`, so an
            // absent key falls back to the default
            (Some(default), true) => {
                let value = quote! {
                    match #read {
                        ::core::option::Option::Some(value) => ::core::option::Option::Some(value),
                        ::core::option::Option::None => #default,
                    }
                };
                arg.accessor.assign(host, name, &value)
            }
            (Some(default), false) => {
                let value = quote! {
                    match #read {
                        ::core::option::Option::Some(value) => value,
                        ::core::option::Option::None => #default,
                    }
                };
                arg.accessor.assign(host, name, &value)
            }
            (None, true) => arg.accessor.assign(host, name, &read),
            (None, false) => arg.accessor.assign(host, name, &quote! {value}).map(|assign| {
                quote! {
                    if let ::core::option::Option::Some(value) = #read {
                        #assign
                    }
                }
            }),
        };
        if let Some(stmt) = stmt {
            out.extend(stmt);
        }
    }
    out
}

pub(crate) fn key_ref(arg: &FieldInfo) -> TokenStream {
    let key = arg.key_const();
    quote! {Self::#key}
}

pub(crate) fn starter_params(variant: &[&FieldInfo]) -> Vec<TokenStream> {
    variant
        .iter()
        .map(|arg| {
            let name = &arg.ident;
            let ty = arg.full_param_ty();
            quote! {#name: #ty}
        })
        .collect()
}

/// Statements packing one variant's parameters into the local `extras`
/// bundle. Nullable parameters are stored only when `Some`.
pub(crate) fn bundle_puts(variant: &[&FieldInfo]) -> TokenStream {
    let bundle = quote! {extras};
    variant
        .iter()
        .map(|arg| {
            let name = &arg.ident;
            let key = key_ref(arg);
            if arg.nullable {
                let put = arg.ty.write_stmt(&bundle, &key, &quote! {value});
                quote! {
                    if let ::core::option::Option::Some(value) = #name {
                        #put
                    }
                }
            } else {
                arg.ty.write_stmt(&bundle, &key, &quote! {#name})
            }
        })
        .collect()
}

/// Statements writing the host's current field values into `bundle`, the
/// container a save routine is about to re-attach. `NoSetter` arguments live
/// only in the container and are left untouched. A nullable argument holding
/// `None` removes its key, so a later fill does not revive the cleared value.
pub(crate) fn save_writes(class: &ObjectInfo, host: &Ident, bundle: &TokenStream) -> TokenStream {
    let mut out = TokenStream::new();
    for arg in &class.args {
        let name = &arg.ident;
        let source = match arg.accessor {
            Accessor::Field => {
                let source = quote! {#host.#name};
                if arg.ty.is_copy() {
                    source
                } else {
                    quote! {#source.clone()}
                }
            }
            Accessor::Methods { ref get, .. } => quote! {#host.#get()},
            Accessor::NoSetter => continue,
        };
        let key = key_ref(arg);
        let stmt = if arg.nullable {
            let put = arg.ty.write_stmt(bundle, &key, &quote! {value});
            quote! {
                match #source {
                    ::core::option::Option::Some(value) => {
                        #put
                    }
                    ::core::option::Option::None => {
                        #bundle.remove(#key);
                    }
                }
            }
        } else {
            arg.ty.write_stmt(bundle, &key, &source)
        };
        out.extend(stmt);
    }
    out
}

/// The `has_*`/`get_*` accessor pair generated for every `NoSetter` argument,
/// letting callers query container-backed values that never reach a field.
pub(crate) fn no_setter_accessors(class: &ObjectInfo) -> TokenStream {
    let host = class.host.param_ident();
    let target = &class.name;
    let args_ref = class.host.args_ref(&host);
    class
        .args
        .iter()
        .filter(|arg| arg.no_setter())
        .map(|arg| {
            let has = arg.checker_ident();
            let get = arg.getter_ident();
            let key = key_ref(arg);
            let read = arg.ty.read_expr(&quote! {arguments}, &key);
            let fetched = quote! {#args_ref.and_then(|arguments| #read)};
            let inner = arg.ty.param_ty();
            let (ret, body) = match (&arg.default, arg.nullable) {
                (Some(default), false) => (
                    inner,
                    quote! {
                        match #fetched {
                            ::core::option::Option::Some(value) => value,
                            ::core::option::Option::None => #default,
                        }
                    },
                ),
                (Some(default), true) => (
                    quote! {::core::option::Option<#inner>},
                    quote! {
                        match #fetched {
                            ::core::option::Option::Some(value) => ::core::option::Option::Some(value),
                            ::core::option::Option::None => #default,
                        }
                    },
                ),
                (None, _) => (quote! {::core::option::Option<#inner>}, fetched),
            };
            let has_doc = format!("Whether the container holds a `{}` value.", arg.ident);
            let get_doc = format!("Reads the `{}` value out of the container.", arg.ident);
            quote! {
                #[doc = #has_doc]
                pub fn #has(#host: &#target) -> bool {
                    #args_ref.map(|arguments| arguments.contains(#key)).unwrap_or(false)
                }
                #[doc = #get_doc]
                pub fn #get(#host: &#target) -> #ret {
                    #body
                }
            }
        })
        .collect()
}
