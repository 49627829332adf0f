//! Starter boilerplate proc macros for bundle-backed hosts
//!
//! Provides derive macros used on activity-like or fragment-like host structs
//! which generate a `<Host>Starter` companion type with functions for:
//! - filling the host's annotated fields from its stored argument bundle.
//! - building the host (or an intent launching it) from typed arguments,
//!     with one starter function per allowed combination of optional
//!     arguments.
//! - saving current field values back into the stored bundle.
//!
//! # Derive
//!
//! Mark argument fields with `#[arg(..)]`; unmarked fields are ignored. A
//! field is optional when it declares a default expression, and every
//! optional argument doubles the set of generated starter functions so
//! callers can omit any combination of them. On an `Option`-typed field the
//! default expression must itself be `Option`-typed (for example
//! `#[arg(default = "Some(3)")]` on an `Option<i32>`); it is used whenever
//! the bundle holds no value for the key.
//!
//! ```ignore
//! // Users code
//! use argstarter::*;
//! #[derive(FragmentStarter, Default)]
//! struct PlayerFragment {
//!     #[arg]
//!     id: i32,
//!     #[arg(default = "String::from(\"guest\")")]
//!     name: String,
//! }
//! ```
//!
//! Generated function bodies and attributes omitted. If you want to see the
//! full generated source add the `dump` attribute on the struct
//! (`#[starter(dump)]`), the generated code will be output to
//! `target/{your_struct_name}_starter_code_gen.rs`.
//!
//! ```compile_fail
//! /// Generated starter for [`PlayerFragment`]. Do not modify!
//! pub struct PlayerFragmentStarter;
//! impl PlayerFragmentStarter {
//!     pub const ID_KEY: &'static str = "id";
//!     pub const NAME_KEY: &'static str = "name";
//!
//!     /// Reads each argument out of the fragment's container and assigns it
//!     /// to the matching field.
//!     pub fn fill(fragment: &mut PlayerFragment) { ... }
//!
//!     /// Creates a [`PlayerFragment`] carrying the given arguments.
//!     pub fn new_instance(id: i32) -> PlayerFragment { ... }
//!
//!     /// Creates a [`PlayerFragment`] carrying the given arguments.
//!     pub fn new_instance_with_name(id: i32, name: String) -> PlayerFragment { ... }
//!
//!     /// Writes [`PlayerFragment`]'s current argument values back into its
//!     /// arguments bundle, creating one if the fragment has none.
//!     pub fn save(fragment: &mut PlayerFragment) { ... }
//! }
//! ```
//!
//! Non-primitive argument types must name their capability:
//! `#[arg(parcelable)]` for byte-parcel types, `#[arg(serializable)]` for
//! serde types, `#[arg(enumeration)]` for enums stored by variant name. A
//! field carrying both `parcelable` and `serializable` is stored as a parcel.
//!
//! Any classification or naming problem is reported as a compile error at the
//! offending field, and no starter is generated for that struct; other
//! derives in the same build are unaffected.

use syn::{parse_macro_input, DeriveInput};

use common::object::Info as ObjectInfo;
use common::HostKind;

mod common;
mod gen;
mod parse;

/// Generates a `<Host>Starter` type for an activity-like host.
///
/// The host must implement `argstarter::Activity`. Starter functions come in
/// pairs per variant: `intent[_with_..]` returning a populated
/// `argstarter::Intent`, and `start[_with_..]` handing it to a given
/// `argstarter::Context`.
#[proc_macro_derive(ActivityStarter, attributes(arg, starter))]
pub fn derive_activity_starter(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    run_derive(input, HostKind::Activity)
}

/// Generates a `<Host>Starter` type for a fragment-like host.
///
/// The host must implement `argstarter::Fragment` (which requires
/// [`Default`]). One `new_instance[_with_..]` starter is generated per
/// variant, returning the constructed host with its arguments attached.
#[proc_macro_derive(FragmentStarter, attributes(arg, starter))]
pub fn derive_fragment_starter(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    run_derive(input, HostKind::Fragment)
}

fn run_derive(input: proc_macro::TokenStream, host: HostKind) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match ObjectInfo::parse(&input, host).and_then(|class| class.generate()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
