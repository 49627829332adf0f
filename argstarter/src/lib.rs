#![allow(clippy::module_name_repetitions)]
//! Runtime types and traits for argstarter-derive.
//!
//! The derive macros generate a `<Host>Starter` companion type for an
//! annotated host struct. The generated code talks to this crate only: it
//! packs and unpacks values through [`Bundle`], launches activity-like hosts
//! through [`Intent`]/[`Context`], and reaches the host's stored container
//! through the [`Activity`] or [`Fragment`] trait, which user code implements.

mod bundle;
mod error;
mod intent;

pub use bundle::{Bundle, Value};
pub use error::ParcelError;
pub use intent::{Context, Intent};

/// An activity-like host: constructed by the framework, carrying the
/// [`Intent`] it was launched with.
pub trait Activity {
    fn intent(&self) -> Option<&Intent>;
    fn set_intent(&mut self, intent: Intent);
}

/// A fragment-like host: constructed directly (generated `new_instance`
/// routines use [`Default`]), carrying an arguments [`Bundle`].
pub trait Fragment: Default {
    fn arguments(&self) -> Option<&Bundle>;
    fn set_arguments(&mut self, arguments: Bundle);
}

/// Types that cross the bundle boundary as a flat byte parcel.
///
/// Decoding is fallible; a bundle read of a parcel that fails to decode
/// behaves like an absent key.
pub trait Parcelable: Sized {
    fn to_parcel(&self) -> Vec<u8>;
    /// # Errors
    /// If `parcel` does not contain a valid encoding of `Self`.
    fn from_parcel(parcel: &[u8]) -> Result<Self, ParcelError>;
}

/// Enums stored in a [`Bundle`] by variant name and re-hydrated via lookup.
pub trait StarterEnum: Sized {
    fn variant_name(&self) -> &'static str;
    fn from_variant_name(name: &str) -> Option<Self>;
}

// re-export the derive stuff
#[cfg(feature = "derive")]
#[doc(hidden)]
pub use argstarter_derive::*;
