use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::format_ident;
use syn::{Expr, Ident};

/// The eight scalar primitives a bundle stores natively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scalar {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl Scalar {
    pub fn rust_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        Some(match name {
            "bool" => Self::Bool,
            "char" => Self::Char,
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "f32" => Self::F32,
            "f64" => Self::F64,
            _ => return None,
        })
    }
}

/// Semantic category of one argument's declared type. The `Option` layer of
/// a nullable argument is stripped before classification and recorded on the
/// argument itself, so this describes the inner value only.
///
/// Object-capable variants carry the tokens of the declared type for use in
/// turbofish positions of generated reads.
#[derive(Clone, Debug)]
pub enum DataType {
    Scalar(Scalar),
    Str,
    ScalarArray(Scalar),
    StrArray,
    Parcelable(TokenStream),
    ParcelableArray(TokenStream),
    Serializable(TokenStream),
    Enum(TokenStream),
}

/// How generated code reads and writes the value on the host instance.
#[derive(Clone, Debug)]
pub enum Accessor {
    /// Direct field access. Generated code lives in the host's module, so
    /// visibility never blocks this.
    Field,
    /// Explicit getter/setter pair from `get = "…"`/`set = "…"` attributes.
    /// The getter must return the value by ownership.
    Methods { get: Ident, set: Ident },
    /// The value is never written back to the host; it is reachable only
    /// through the generated `has_*`/`get_*` bundle accessors.
    NoSetter,
}

/// One annotated argument field of a host struct.
#[derive(Clone, Debug)]
pub struct Info {
    pub ident: Ident,
    pub ty: DataType,
    /// Declared as `Option<T>`.
    pub nullable: bool,
    /// Present iff the argument is optional.
    pub default: Option<Expr>,
    pub accessor: Accessor,
}

impl Info {
    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }

    pub fn no_setter(&self) -> bool {
        matches!(self.accessor, Accessor::NoSetter)
    }

    /// `<UPPER_SNAKE(name)>_KEY`, the associated const naming this argument's
    /// bundle key. Injective over a class's arguments because field names are.
    pub fn key_const(&self) -> Ident {
        format_ident!(
            "{}_KEY",
            self.ident.to_string().to_case(Case::UpperSnake),
            span = self.ident.span()
        )
    }

    /// The key string stored under the const: the argument name itself.
    pub fn key_value(&self) -> String {
        self.ident.to_string()
    }

    pub fn checker_ident(&self) -> Ident {
        format_ident!("has_{}", self.ident)
    }

    pub fn getter_ident(&self) -> Ident {
        format_ident!("get_{}", self.ident)
    }
}
