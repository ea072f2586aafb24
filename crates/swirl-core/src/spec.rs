//! Parameter descriptors: bounds, stepping, units and display scaling.

/// Display-scaling curve for mapping a UI slider position to a value.
///
/// This is a display-only hint: the stored value and the bounds are always
/// linear. Logarithmic mapping gives more slider resolution at low values,
/// which is what frequency- and time-like parameters want.
///
/// Normalization formulas:
///
/// - **Linear**: `normalized = (value - min) / (max - min)`
/// - **Logarithmic**: `normalized = ln(value/min) / ln(max/min)`
///   (requires `min > 0`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamScale {
    /// Linear mapping (default). Equal resolution across the range.
    #[default]
    Linear,
    /// Logarithmic mapping. More resolution at low values.
    Logarithmic,
}

/// Unit type for display formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamUnit {
    /// Hertz (Hz) - frequency parameters like filter cutoff or LFO rate.
    Hertz,
    /// Milliseconds (ms) - time parameters like delay, attack, release.
    Milliseconds,
    /// Decibels (dB) - gain and level parameters.
    Decibels,
    /// Degrees (°) - phase parameters.
    Degrees,
    /// Percentage (%) - feedback and blend parameters.
    Percent,
    /// No unit - dimensionless parameters.
    #[default]
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Hertz => " Hz",
            ParamUnit::Milliseconds => " ms",
            ParamUnit::Decibels => " dB",
            ParamUnit::Degrees => "°",
            ParamUnit::Percent => "%",
            ParamUnit::None => "",
        }
    }
}

/// How a parameter's value behaves and serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamKind {
    /// Continuous value, stored as a float.
    #[default]
    Float,
    /// Integer-stepped value (e.g. a filter order), stored as an integer.
    /// Values snap to the step grid anchored at `min`.
    Stepped,
    /// Boolean toggle, stored as a boolean. Internally 0.0 / 1.0.
    Toggle,
}

/// Describes a single parameter: persistence key, default, bounds, step
/// and display metadata.
///
/// The key doubles as the persistence tag and is immutable for the lifetime
/// of the parameter set - renaming a key silently orphans stored values.
///
/// # Example
///
/// ```rust
/// use swirl_core::{ParamSpec, ParamScale, ParamUnit};
///
/// const RESONANCE: ParamSpec = ParamSpec::float("resonance", 0.05, 0.05, 2.0, 0.001)
///     .with_scale(ParamScale::Logarithmic);
///
/// assert_eq!(RESONANCE.clamp(5.0), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Stable persistence key, unique within a parameter set.
    pub key: &'static str,

    /// Default value, applied at construction and when a stored key is
    /// missing on load.
    pub default: f32,

    /// Minimum allowed value.
    pub min: f32,

    /// Maximum allowed value.
    pub max: f32,

    /// Recommended increment for encoder- or keyboard-driven control.
    pub step: f32,

    /// Value behavior and serialized representation.
    pub kind: ParamKind,

    /// Unit for display formatting.
    pub unit: ParamUnit,

    /// Display-scaling curve for UI slider mapping.
    pub scale: ParamScale,

    /// Display multiplier applied when presenting the value in a different
    /// time base (e.g. an LFO rate in Hz shown as milliseconds per cycle
    /// carries 60000.0, the tempo-sync scale). 1.0 means no rescaling.
    pub unit_scale: f32,
}

impl ParamSpec {
    /// Continuous float parameter.
    pub const fn float(key: &'static str, default: f32, min: f32, max: f32, step: f32) -> Self {
        Self {
            key,
            default,
            min,
            max,
            step,
            kind: ParamKind::Float,
            unit: ParamUnit::None,
            scale: ParamScale::Linear,
            unit_scale: 1.0,
        }
    }

    /// Integer-stepped parameter with a step of 1.
    pub const fn stepped(key: &'static str, default: f32, min: f32, max: f32) -> Self {
        Self {
            key,
            default,
            min,
            max,
            step: 1.0,
            kind: ParamKind::Stepped,
            unit: ParamUnit::None,
            scale: ParamScale::Linear,
            unit_scale: 1.0,
        }
    }

    /// Boolean toggle parameter.
    pub const fn toggle(key: &'static str, default: bool) -> Self {
        Self {
            key,
            default: if default { 1.0 } else { 0.0 },
            min: 0.0,
            max: 1.0,
            step: 1.0,
            kind: ParamKind::Toggle,
            unit: ParamUnit::None,
            scale: ParamScale::Linear,
            unit_scale: 1.0,
        }
    }

    /// Sets the display unit. Builder pattern.
    pub const fn with_unit(mut self, unit: ParamUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the display-scaling curve. Builder pattern.
    pub const fn with_scale(mut self, scale: ParamScale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the display unit multiplier. Builder pattern.
    pub const fn with_unit_scale(mut self, unit_scale: f32) -> Self {
        self.unit_scale = unit_scale;
        self
    }

    /// Clamps a value to this parameter's valid range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Clamps a value and, for stepped and toggle parameters, snaps it to
    /// the step grid anchored at `min`.
    ///
    /// This is the single constraining path every value takes before it is
    /// stored, whether it arrives from a UI binding, a programmatic set, or
    /// a persisted document. NaN falls back to the default, so the in-bounds
    /// invariant holds even for malformed stored values.
    pub fn constrain(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.clamp(self.default);
        }
        let clamped = self.clamp(value);
        match self.kind {
            ParamKind::Float => clamped,
            ParamKind::Stepped | ParamKind::Toggle => {
                let steps = libm::roundf((clamped - self.min) / self.step);
                self.clamp(self.min + steps * self.step)
            }
        }
    }

    /// Converts a value to the normalized slider position in `[0.0, 1.0]`,
    /// respecting [`ParamScale`].
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        match self.scale {
            ParamScale::Linear => (value - self.min) / range,
            ParamScale::Logarithmic => {
                if self.min <= 0.0 || value <= 0.0 {
                    return 0.0;
                }
                libm::logf(value / self.min) / libm::logf(self.max / self.min)
            }
        }
    }

    /// Converts a normalized slider position in `[0.0, 1.0]` back to a
    /// value. Inverse of [`normalize`](Self::normalize).
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        match self.scale {
            ParamScale::Linear => self.min + normalized * (self.max - self.min),
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return self.min;
                }
                self.min * libm::powf(self.max / self.min, normalized)
            }
        }
    }
}
