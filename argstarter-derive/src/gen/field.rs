use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

use crate::common::field::{Accessor, DataType, Info as FieldInfo};

impl DataType {
    /// Expression reading this kind out of `bundle` under `key`. Always
    /// evaluates to an `Option` of the argument's value type; lookup, parcel
    /// decode and JSON deserialization happen inside the bundle call, with a
    /// turbofish wherever the target type cannot be inferred.
    pub fn read_expr(&self, bundle: &TokenStream, key: &TokenStream) -> TokenStream {
        match self {
            Self::Scalar(scalar) => {
                let get = format_ident!("get_{}", scalar.rust_name());
                quote! {#bundle.#get(#key)}
            }
            Self::Str => quote! {#bundle.get_str(#key)},
            Self::ScalarArray(scalar) => {
                let get = format_ident!("get_{}_array", scalar.rust_name());
                quote! {#bundle.#get(#key)}
            }
            Self::StrArray => quote! {#bundle.get_str_array(#key)},
            Self::Parcelable(ty) => quote! {#bundle.get_parcelable::<#ty>(#key)},
            Self::ParcelableArray(ty) => quote! {#bundle.get_parcelable_array::<#ty>(#key)},
            Self::Serializable(ty) => quote! {#bundle.get_serializable::<#ty>(#key)},
            Self::Enum(ty) => quote! {#bundle.get_enum::<#ty>(#key)},
        }
    }

    /// Statement storing an owned `value` into `bundle` under `key`.
    pub fn write_stmt(
        &self,
        bundle: &TokenStream,
        key: &TokenStream,
        value: &TokenStream,
    ) -> TokenStream {
        let put = match self {
            Self::Scalar(scalar) => format_ident!("put_{}", scalar.rust_name()),
            Self::Str => format_ident!("put_str"),
            Self::ScalarArray(scalar) => format_ident!("put_{}_array", scalar.rust_name()),
            Self::StrArray => format_ident!("put_str_array"),
            Self::Parcelable(_) => format_ident!("put_parcelable"),
            Self::ParcelableArray(_) => format_ident!("put_parcelable_array"),
            Self::Serializable(_) => format_ident!("put_serializable"),
            Self::Enum(_) => format_ident!("put_enum"),
        };
        quote! {#bundle.#put(#key, #value);}
    }

    /// The Rust type of this kind in starter parameter position, without any
    /// `Option` layer.
    pub fn param_ty(&self) -> TokenStream {
        match self {
            Self::Scalar(scalar) => {
                let name = format_ident!("{}", scalar.rust_name());
                quote! {#name}
            }
            Self::Str => quote! {::std::string::String},
            Self::ScalarArray(scalar) => {
                let name = format_ident!("{}", scalar.rust_name());
                quote! {::std::vec::Vec<#name>}
            }
            Self::StrArray => quote! {::std::vec::Vec<::std::string::String>},
            Self::Parcelable(ty) | Self::Serializable(ty) | Self::Enum(ty) => quote! {#ty},
            Self::ParcelableArray(ty) => quote! {::std::vec::Vec<#ty>},
        }
    }

    /// Whether a host field of this kind can be read out without cloning.
    pub fn is_copy(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}

impl FieldInfo {
    /// The declared parameter type, `Option`-wrapped for nullable arguments.
    pub fn full_param_ty(&self) -> TokenStream {
        let inner = self.ty.param_ty();
        if self.nullable {
            quote! {::core::option::Option<#inner>}
        } else {
            inner
        }
    }
}

impl Accessor {
    /// Statement assigning `value` onto the host, or `None` when the argument
    /// is never written back.
    pub fn assign(&self, host: &Ident, field: &Ident, value: &TokenStream) -> Option<TokenStream> {
        match self {
            Self::Field => Some(quote! {#host.#field = #value;}),
            Self::Methods { set, .. } => Some(quote! {#host.#set(#value);}),
            Self::NoSetter => None,
        }
    }
}
