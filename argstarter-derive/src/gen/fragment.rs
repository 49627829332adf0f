use proc_macro2::TokenStream;
use quote::quote;

use crate::common::field::Info as FieldInfo;
use crate::common::object::{variant_fn_ident, Info as ObjectInfo};

use super::{bundle_puts, no_setter_accessors, save_writes, starter_params};

/// One `new_instance` routine for a fragment-like host: builds the instance
/// via `Default`, packs the variant's arguments and attaches them.
pub(crate) fn starters(class: &ObjectInfo, variant: &[&FieldInfo]) -> TokenStream {
    let target = &class.name;
    let fn_name = variant_fn_ident("new_instance", variant);
    let params = starter_params(variant);
    let doc = format!("Creates a [`{target}`] carrying the given arguments.");
    let body = if variant.is_empty() {
        quote! {
            <#target as ::core::default::Default>::default()
        }
    } else {
        let puts = bundle_puts(variant);
        quote! {
            let mut extras = ::argstarter::Bundle::new();
            #puts
            let mut fragment = <#target as ::core::default::Default>::default();
            ::argstarter::Fragment::set_arguments(&mut fragment, extras);
            fragment
        }
    };
    quote! {
        #[doc = #doc]
        pub fn #fn_name(#(#params),*) -> #target {
            #body
        }
    }
}

pub(crate) fn extra_members(class: &ObjectInfo) -> TokenStream {
    let mut out = save_fn(class);
    out.extend(no_setter_accessors(class));
    out
}

fn save_fn(class: &ObjectInfo) -> TokenStream {
    if !class.savable {
        return TokenStream::new();
    }
    let target = &class.name;
    let host = class.host.param_ident();
    let writes = save_writes(class, &host, &quote! {arguments});
    // every argument no_setter: the clone is re-attached untouched
    let binding = if writes.is_empty() {
        quote! {let arguments}
    } else {
        quote! {let mut arguments}
    };
    let doc = format!(
        "Writes [`{target}`]'s current argument values back into its arguments bundle, creating one if the fragment has none."
    );
    quote! {
        #[doc = #doc]
        pub fn save(#host: &mut #target) {
            #binding = match ::argstarter::Fragment::arguments(#host) {
                ::core::option::Option::Some(arguments) => arguments.clone(),
                ::core::option::Option::None => ::argstarter::Bundle::new(),
            };
            #writes
            ::argstarter::Fragment::set_arguments(#host, arguments);
        }
    }
}
