pub mod field;
pub mod object;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

/// The two host protocols a starter can be generated against. Dispatch is a
/// `match` on this tag, one generation strategy per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostKind {
    Activity,
    Fragment,
}

impl HostKind {
    /// Name of the host parameter in generated routines.
    pub fn param_ident(self) -> Ident {
        match self {
            Self::Activity => format_ident!("activity"),
            Self::Fragment => format_ident!("fragment"),
        }
    }

    /// Expression of type `Option<&Bundle>` reaching the host's stored
    /// container through the matching host trait.
    pub fn args_ref(self, host: &Ident) -> TokenStream {
        match self {
            Self::Activity => quote! {
                ::argstarter::Activity::intent(#host).map(::argstarter::Intent::extras)
            },
            Self::Fragment => quote! {
                ::argstarter::Fragment::arguments(#host)
            },
        }
    }

    /// Base names of the starter routines this host kind generates per
    /// variant.
    pub fn starter_bases(self) -> &'static [&'static str] {
        match self {
            Self::Activity => &["intent", "start"],
            Self::Fragment => &["new_instance"],
        }
    }
}
