use std::any;

use crate::{Activity, Bundle};

/// A launch request for an activity-like host: the target type's name plus an
/// extras [`Bundle`].
///
/// Generated starter code builds one of these and either returns it or hands
/// it to a [`Context`]. The framework side is expected to construct the
/// target, attach the intent with [`Activity::set_intent`] and then call the
/// generated `fill`.
#[derive(Clone, Debug, PartialEq)]
pub struct Intent {
    target: &'static str,
    extras: Bundle,
}

impl Intent {
    #[must_use]
    pub fn new<A: Activity>() -> Self {
        Self {
            target: any::type_name::<A>(),
            extras: Bundle::new(),
        }
    }

    #[must_use]
    pub fn with_extras<A: Activity>(extras: Bundle) -> Self {
        Self {
            target: any::type_name::<A>(),
            extras,
        }
    }

    /// The `std::any::type_name` of the activity type this intent targets.
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }

    #[must_use]
    pub fn extras(&self) -> &Bundle {
        &self.extras
    }

    pub fn extras_mut(&mut self) -> &mut Bundle {
        &mut self.extras
    }
}

/// The one operation generated `start` routines need from the surrounding
/// framework.
pub trait Context {
    fn start_activity(&mut self, intent: Intent);
}
