use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, Ident, Meta, Token, Type};

use crate::common::field::{Accessor, DataType, Info as FieldInfo, Scalar};

use super::get_lit_str;

/// Raw `#[arg(..)]` attribute state for one field, before classification and
/// accessor resolution.
#[derive(Default)]
pub(crate) struct ArgAttrs {
    pub parcelable: bool,
    pub serializable: bool,
    pub enumeration: bool,
    pub no_setter: bool,
    pub default: Option<Expr>,
    pub get: Option<Ident>,
    pub set: Option<Ident>,
}

impl ArgAttrs {
    pub(crate) fn parse(field: &syn::Field) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in &field.attrs {
            if !attr.path().is_ident("arg") {
                continue;
            }
            // a bare `#[arg]` marks the field with no extra configuration
            if matches!(attr.meta, Meta::Path(_)) {
                continue;
            }
            let nested = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
            for meta in nested {
                match meta {
                    Meta::Path(ref path) if path.is_ident("parcelable") => out.parcelable = true,
                    Meta::Path(ref path) if path.is_ident("serializable") => {
                        out.serializable = true;
                    }
                    Meta::Path(ref path) if path.is_ident("enumeration") => {
                        out.enumeration = true;
                    }
                    Meta::Path(ref path) if path.is_ident("no_setter") => out.no_setter = true,
                    Meta::NameValue(ref value) if value.path.is_ident("default") => {
                        let ident = Ident::new("default", value.path.span());
                        let lit =
                            get_lit_str(&value.value, &ident, Some("default = \"\\\"guest\\\"\""))?;
                        out.default = Some(lit.parse::<Expr>()?);
                    }
                    Meta::NameValue(ref value) if value.path.is_ident("get") => {
                        let ident = Ident::new("get", value.path.span());
                        let lit = get_lit_str(&value.value, &ident, Some("get = \"name_value\""))?;
                        out.get = Some(lit.parse::<Ident>()?);
                    }
                    Meta::NameValue(ref value) if value.path.is_ident("set") => {
                        let ident = Ident::new("set", value.path.span());
                        let lit = get_lit_str(&value.value, &ident, Some("set = \"set_name\""))?;
                        out.set = Some(lit.parse::<Ident>()?);
                    }
                    _ => {
                        return Err(syn::Error::new(
                            meta.span(),
                            "unknown arg attribute. expected one of: `parcelable`, `serializable`, `enumeration`, `no_setter`, `default = \"..\"`, `get = \"..\"`, `set = \"..\"`",
                        ));
                    }
                }
            }
        }
        Ok(out)
    }
}

impl FieldInfo {
    pub fn from_syn_field(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new(
                field.span(),
                "arg fields must be named fields",
            ));
        };
        let attrs = ArgAttrs::parse(field)?;
        if attrs.enumeration && (attrs.parcelable || attrs.serializable) {
            return Err(syn::Error::new(
                ident.span(),
                "`enumeration` cannot be combined with `parcelable` or `serializable`",
            ));
        }
        let accessor = if attrs.no_setter {
            if attrs.get.is_some() || attrs.set.is_some() {
                return Err(syn::Error::new(
                    ident.span(),
                    "`no_setter` cannot be combined with `get`/`set` accessors",
                ));
            }
            Accessor::NoSetter
        } else {
            match (attrs.get.clone(), attrs.set.clone()) {
                (None, None) => Accessor::Field,
                (Some(get), Some(set)) => Accessor::Methods { get, set },
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        "`get` and `set` accessors must be provided together",
                    ));
                }
            }
        };
        let (ty, nullable) = DataType::parse(&field.ty, &attrs)?;
        Ok(Self {
            ident,
            ty,
            nullable,
            default: attrs.default,
            accessor,
        })
    }
}

fn generic_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(ref path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let syn::PathArguments::AngleBracketed(ref args) = segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    if let syn::GenericArgument::Type(ref inner) = args.args[0] {
        Some(inner)
    } else {
        None
    }
}

fn plain_type_name(ty: &Type) -> Option<String> {
    if let Type::Path(ref path) = ty {
        let segment = path.path.segments.last()?;
        if segment.arguments.is_empty() {
            return Some(segment.ident.to_string());
        }
    }
    None
}

impl DataType {
    /// Classifies a declared type, returning the category plus whether the
    /// declaration was `Option`-wrapped. Total over the supported categories;
    /// anything else is an error spanned at the type.
    ///
    /// Capability attributes win over shape recognition, and `parcelable`
    /// wins over `serializable` when a field carries both.
    pub fn parse(ty: &Type, attrs: &ArgAttrs) -> syn::Result<(DataType, bool)> {
        let (ty, nullable) = match generic_inner(ty, "Option") {
            Some(inner) => {
                if generic_inner(inner, "Option").is_some() {
                    return Err(syn::Error::new(
                        ty.span(),
                        "nested `Option` arguments are not supported",
                    ));
                }
                (inner, true)
            }
            None => (ty, false),
        };
        if attrs.enumeration {
            return Ok((DataType::Enum(quote! {#ty}), nullable));
        }
        if attrs.parcelable {
            let data_type = match generic_inner(ty, "Vec") {
                Some(elem) => DataType::ParcelableArray(quote! {#elem}),
                None => DataType::Parcelable(quote! {#ty}),
            };
            return Ok((data_type, nullable));
        }
        if attrs.serializable {
            return Ok((DataType::Serializable(quote! {#ty}), nullable));
        }
        if let Some(elem) = generic_inner(ty, "Vec") {
            if let Some(name) = plain_type_name(elem) {
                if let Some(scalar) = Scalar::from_type_name(&name) {
                    return Ok((DataType::ScalarArray(scalar), nullable));
                }
                if name == "String" {
                    return Ok((DataType::StrArray, nullable));
                }
            }
            return Err(syn::Error::new(
                elem.span(),
                "array element type is not supported. use a primitive or String element, or mark the field `parcelable`",
            ));
        }
        if let Some(name) = plain_type_name(ty) {
            if let Some(scalar) = Scalar::from_type_name(&name) {
                return Ok((DataType::Scalar(scalar), nullable));
            }
            if name == "String" {
                return Ok((DataType::Str, nullable));
            }
        }
        Err(syn::Error::new(
            ty.span(),
            "argument type is not supported. use a primitive, String, Option or Vec of those, or mark the field `parcelable`, `serializable`, or `enumeration`",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(src: &str) -> syn::Result<(DataType, bool)> {
        let ty: Type = syn::parse_str(src)?;
        DataType::parse(&ty, &ArgAttrs::default())
    }

    fn classify_with(src: &str, attrs: &ArgAttrs) -> syn::Result<(DataType, bool)> {
        let ty: Type = syn::parse_str(src)?;
        DataType::parse(&ty, attrs)
    }

    #[test]
    fn scalars_classify_natively() {
        for (src, scalar) in [
            ("bool", Scalar::Bool),
            ("char", Scalar::Char),
            ("i8", Scalar::I8),
            ("i16", Scalar::I16),
            ("i32", Scalar::I32),
            ("i64", Scalar::I64),
            ("f32", Scalar::F32),
            ("f64", Scalar::F64),
        ] {
            let (ty, nullable) = classify(src).unwrap();
            assert!(matches!(ty, DataType::Scalar(s) if s == scalar), "{src}");
            assert!(!nullable);
        }
    }

    #[test]
    fn option_marks_nullable() {
        let (ty, nullable) = classify("Option<f64>").unwrap();
        assert!(matches!(ty, DataType::Scalar(Scalar::F64)));
        assert!(nullable);
        let (ty, nullable) = classify("Option<String>").unwrap();
        assert!(matches!(ty, DataType::Str));
        assert!(nullable);
    }

    #[test]
    fn strings_and_arrays_classify() {
        assert!(matches!(classify("String").unwrap().0, DataType::Str));
        assert!(matches!(
            classify("Vec<i16>").unwrap().0,
            DataType::ScalarArray(Scalar::I16)
        ));
        assert!(matches!(
            classify("Vec<String>").unwrap().0,
            DataType::StrArray
        ));
    }

    #[test]
    fn capability_attributes_classify_object_types() {
        let parcelable = ArgAttrs {
            parcelable: true,
            ..ArgAttrs::default()
        };
        assert!(matches!(
            classify_with("Position", &parcelable).unwrap().0,
            DataType::Parcelable(_)
        ));
        assert!(matches!(
            classify_with("Vec<Position>", &parcelable).unwrap().0,
            DataType::ParcelableArray(_)
        ));
        let serializable = ArgAttrs {
            serializable: true,
            ..ArgAttrs::default()
        };
        assert!(matches!(
            classify_with("Profile", &serializable).unwrap().0,
            DataType::Serializable(_)
        ));
        let enumeration = ArgAttrs {
            enumeration: true,
            ..ArgAttrs::default()
        };
        assert!(matches!(
            classify_with("Direction", &enumeration).unwrap().0,
            DataType::Enum(_)
        ));
    }

    #[test]
    fn parcelable_wins_over_serializable() {
        let both = ArgAttrs {
            parcelable: true,
            serializable: true,
            ..ArgAttrs::default()
        };
        assert!(matches!(
            classify_with("Position", &both).unwrap().0,
            DataType::Parcelable(_)
        ));
    }

    #[test]
    fn unknown_custom_type_is_rejected() {
        let err = classify("NotAThing").unwrap_err();
        assert!(err.to_string().contains("not supported"));
        let err = classify("Vec<NotAThing>").unwrap_err();
        assert!(err.to_string().contains("element type is not supported"));
    }

    #[test]
    fn nested_option_is_rejected() {
        let err = classify("Option<Option<i32>>").unwrap_err();
        assert!(err.to_string().contains("nested `Option`"));
    }

    #[test]
    fn field_parse_resolves_default_and_key() {
        let input: syn::DeriveInput = syn::parse_str(
            "struct T { #[arg(default = \"7\")] player_id: i32, #[arg] raw: String }",
        )
        .unwrap();
        let syn::Data::Struct(data) = input.data else {
            panic!("expected struct")
        };
        let fields: Vec<_> = data.fields.iter().collect();
        let first = FieldInfo::from_syn_field(fields[0]).unwrap();
        assert!(first.is_optional());
        assert_eq!(first.key_const().to_string(), "PLAYER_ID_KEY");
        assert_eq!(first.key_value(), "player_id");
        let second = FieldInfo::from_syn_field(fields[1]).unwrap();
        assert!(!second.is_optional());
        assert!(matches!(second.accessor, Accessor::Field));
    }

    #[test]
    fn field_info_is_debug_printable() {
        // the model derives Debug, which needs syn's `extra-traits` feature
        // for the stored default expression
        let input: syn::DeriveInput =
            syn::parse_str("struct T { #[arg(default = \"7\")] player_id: i32 }").unwrap();
        let syn::Data::Struct(data) = input.data else {
            panic!("expected struct")
        };
        let info = FieldInfo::from_syn_field(data.fields.iter().next().unwrap()).unwrap();
        let rendered = format!("{info:?}");
        assert!(rendered.contains("player_id"));
    }

    #[test]
    fn accessor_conflicts_are_rejected() {
        let input: syn::DeriveInput =
            syn::parse_str("struct T { #[arg(no_setter, set = \"set_x\")] x: i32 }").unwrap();
        let syn::Data::Struct(data) = input.data else {
            panic!("expected struct")
        };
        let err = FieldInfo::from_syn_field(data.fields.iter().next().unwrap()).unwrap_err();
        assert!(err.to_string().contains("no_setter"));

        let input: syn::DeriveInput =
            syn::parse_str("struct T { #[arg(get = \"x_value\")] x: i32 }").unwrap();
        let syn::Data::Struct(data) = input.data else {
            panic!("expected struct")
        };
        let err = FieldInfo::from_syn_field(data.fields.iter().next().unwrap()).unwrap_err();
        assert!(err.to_string().contains("provided together"));
    }
}
