pub mod field;
pub mod object;

use syn::{Expr, Ident, Lit, LitStr};

pub(crate) fn get_lit_str<'a>(
    expr: &'a Expr,
    ident: &Ident,
    example: Option<&str>,
) -> syn::Result<&'a LitStr> {
    let example = if let Some(ex) = example {
        format!("example: `{ex}`")
    } else {
        String::new()
    };
    if let Expr::Lit(ref lit) = expr {
        if let Lit::Str(ref val) = lit.lit {
            Ok(val)
        } else {
            Err(syn::Error::new(
                ident.span(),
                format!("{ident} requires a string literal. {example}"),
            ))
        }
    } else {
        Err(syn::Error::new(
            ident.span(),
            format!("{ident} requires a string literal. {example}"),
        ))
    }
}
