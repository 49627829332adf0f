use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::common::field::Info as FieldInfo;
use crate::common::object::{variant_fn_ident, Info as ObjectInfo};

use super::{bundle_puts, no_setter_accessors, save_writes, starter_params};

/// The routine pair for one variant of an activity-like host: an `intent`
/// builder returning the populated launch request, and a `start` shorthand
/// handing it to a `Context`.
pub(crate) fn starters(class: &ObjectInfo, variant: &[&FieldInfo]) -> TokenStream {
    let target = &class.name;
    let intent_name = variant_fn_ident("intent", variant);
    let start_name = variant_fn_ident("start", variant);
    let params = starter_params(variant);
    let names: Vec<&Ident> = variant.iter().map(|arg| &arg.ident).collect();
    let intent_body = if variant.is_empty() {
        quote! {
            ::argstarter::Intent::new::<#target>()
        }
    } else {
        let puts = bundle_puts(variant);
        quote! {
            let mut extras = ::argstarter::Bundle::new();
            #puts
            ::argstarter::Intent::with_extras::<#target>(extras)
        }
    };
    let intent_doc = format!("Builds an intent launching [`{target}`] with the given arguments.");
    let start_doc = format!("Starts [`{target}`] with the given arguments through `context`.");
    quote! {
        #[doc = #intent_doc]
        pub fn #intent_name(#(#params),*) -> ::argstarter::Intent {
            #intent_body
        }
        #[doc = #start_doc]
        pub fn #start_name(context: &mut impl ::argstarter::Context, #(#params),*) {
            context.start_activity(Self::#intent_name(#(#names),*));
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
    let writes = save_writes(class, &host, &quote! {extras});
    let doc = format!(
        "Writes [`{target}`]'s current argument values back into its intent extras, creating an intent if the activity has none."
    );
    quote! {
        #[doc = #doc]
        pub fn save(#host: &mut #target) {
            let mut intent = match ::argstarter::Activity::intent(#host) {
                ::core::option::Option::Some(intent) => intent.clone(),
                ::core::option::Option::None => ::argstarter::Intent::new::<#target>(),
            };
            let extras = intent.extras_mut();
            #writes
            ::argstarter::Activity::set_intent(#host, intent);
        }
    }
}
