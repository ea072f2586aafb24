//! Value-holding parameter with clamped mutation.

use crate::spec::{ParamKind, ParamSpec};

/// A parameter: a [`ParamSpec`] plus the current value.
///
/// The value is guaranteed to lie in `[spec.min, spec.max]` at all times.
/// Construction applies the default through the same constraining path as
/// [`set`](Self::set), so there is no way to hold an out-of-range value.
///
/// # Example
///
/// ```rust
/// use swirl_core::{Param, ParamSpec};
///
/// let mut feedback = Param::new(ParamSpec::float("feedback", 0.0, -100.0, 100.0, 0.01));
/// assert_eq!(feedback.value(), 0.0);
///
/// let stored = feedback.set(250.0);
/// assert_eq!(stored, 100.0); // clamped
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param {
    spec: ParamSpec,
    value: f32,
}

impl Param {
    /// Create a parameter holding its default value.
    pub fn new(spec: ParamSpec) -> Self {
        Self {
            spec,
            value: spec.constrain(spec.default),
        }
    }

    /// Set the value. Clamps to `[min, max]` and snaps stepped parameters
    /// to the step grid; returns the value actually stored.
    #[inline]
    pub fn set(&mut self, value: f32) -> f32 {
        self.value = self.spec.constrain(value);
        self.value
    }

    /// Current value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current value as a boolean (for [`ParamKind::Toggle`] parameters).
    #[inline]
    pub fn as_bool(&self) -> bool {
        self.value >= 0.5
    }

    /// The descriptor this parameter was created from.
    #[inline]
    pub fn spec(&self) -> &ParamSpec {
        &self.spec
    }

    /// Persistence key.
    #[inline]
    pub fn key(&self) -> &'static str {
        self.spec.key
    }

    /// Value behavior / serialized representation.
    #[inline]
    pub fn kind(&self) -> ParamKind {
        self.spec.kind
    }

    /// Whether the current value equals the default.
    pub fn is_default(&self) -> bool {
        self.value == self.spec.constrain(self.spec.default)
    }

    /// Reset to the default value; returns the value stored.
    pub fn reset(&mut self) -> f32 {
        self.set(self.spec.default)
    }
}
