use quote::format_ident;
use syn::Ident;

use super::field::Info as FieldInfo;
use super::HostKind;

/// One annotated host class, ready for generation. Built once per derive
/// invocation, immutable, consumed by exactly one generation pass.
#[derive(Clone, Debug)]
pub struct Info {
    pub name: Ident,
    pub host: HostKind,
    /// Declaration order. This order is load-bearing: it fixes the positional
    /// parameter order of every generated starter routine.
    pub args: Vec<FieldInfo>,
    pub savable: bool,
    pub dump: bool,
}

impl Info {
    pub fn starter_ident(&self) -> Ident {
        format_ident!("{}Starter", self.name)
    }

    pub fn variants(&self) -> Vec<Vec<&FieldInfo>> {
        expand(&self.args)
    }
}

/// Expands the declared argument list into every starter variant: one entry
/// of the power set of optional arguments each, with all required arguments
/// always present and declaration order preserved throughout. `2^k` variants
/// for `k` optional arguments; an empty or all-required list yields exactly
/// one variant.
///
/// The "without" branch of each optional argument comes first, so the
/// all-required variant leads the output and ordering is deterministic.
pub fn expand(args: &[FieldInfo]) -> Vec<Vec<&FieldInfo>> {
    let Some((head, tail)) = args.split_first() else {
        return vec![Vec::new()];
    };
    let tails = expand(tail);
    let mut out = Vec::new();
    if head.is_optional() {
        out.extend(tails.iter().cloned());
    }
    for variant in tails {
        let mut with_head = Vec::with_capacity(variant.len() + 1);
        with_head.push(head);
        with_head.extend(variant);
        out.push(with_head);
    }
    out
}

/// Routine name for one variant: the bare base name when the variant carries
/// no optional arguments, otherwise `<base>_with_<opt1>_<opt2>…` in
/// declaration order. Rust has no overloading, so this replaces the original
/// overload set; collisions are rejected up front by class validation.
pub fn variant_fn_ident(base: &str, variant: &[&FieldInfo]) -> Ident {
    let optionals: Vec<String> = variant
        .iter()
        .filter(|arg| arg.is_optional())
        .map(|arg| arg.ident.to_string())
        .collect();
    if optionals.is_empty() {
        format_ident!("{base}")
    } else {
        format_ident!("{base}_with_{}", optionals.join("_"))
    }
}
