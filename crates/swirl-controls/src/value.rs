//! Typed persistence values and tolerant coercion.

use swirl_core::ParamKind;

/// A parameter value as stored in a settings document.
///
/// Parameters serialize in their native representation: toggles as booleans,
/// stepped parameters as integers, continuous parameters as floats. Floats
/// are widened to f64 for storage, which is lossless for f32 values and
/// round-trips bit-for-bit through TOML.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Boolean value (toggle parameters).
    Bool(bool),
    /// Integer value (stepped parameters).
    Int(i64),
    /// Floating-point value (continuous parameters).
    Float(f64),
}

impl ParamValue {
    /// Coerce a stored value to an f32 for a parameter of the given kind.
    ///
    /// Loading is tolerant, in the spirit of hand-edited settings files:
    ///
    /// - `Float` accepts floats and integers (`5` reads as `5.0`)
    /// - `Stepped` accepts integers and floats (snapping happens downstream)
    /// - `Toggle` accepts booleans and numerics (non-zero is true)
    ///
    /// Returns `None` on a genuine type mismatch (e.g. a boolean where a
    /// float is expected), which the caller treats as a missing key.
    pub fn coerce(self, kind: ParamKind) -> Option<f32> {
        match (kind, self) {
            (ParamKind::Float | ParamKind::Stepped, ParamValue::Float(v)) => Some(v as f32),
            (ParamKind::Float | ParamKind::Stepped, ParamValue::Int(v)) => Some(v as f32),
            (ParamKind::Toggle, ParamValue::Bool(b)) => Some(if b { 1.0 } else { 0.0 }),
            (ParamKind::Toggle, ParamValue::Int(v)) => Some(if v != 0 { 1.0 } else { 0.0 }),
            (ParamKind::Toggle, ParamValue::Float(v)) => Some(if v != 0.0 { 1.0 } else { 0.0 }),
            (ParamKind::Float | ParamKind::Stepped, ParamValue::Bool(_)) => None,
        }
    }

    /// Encode an f32 parameter value in the native representation for its
    /// kind. Inverse of [`coerce`](Self::coerce) for in-range values.
    pub fn encode(kind: ParamKind, value: f32) -> Self {
        match kind {
            ParamKind::Float => ParamValue::Float(f64::from(value)),
            ParamKind::Stepped => ParamValue::Int(value.round() as i64),
            ParamKind::Toggle => ParamValue::Bool(value >= 0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_accepts_float_and_int() {
        assert_eq!(ParamValue::Float(640.0).coerce(ParamKind::Float), Some(640.0));
        assert_eq!(ParamValue::Int(5).coerce(ParamKind::Float), Some(5.0));
    }

    #[test]
    fn float_rejects_bool() {
        assert_eq!(ParamValue::Bool(true).coerce(ParamKind::Float), None);
    }

    #[test]
    fn stepped_accepts_int_and_float() {
        assert_eq!(ParamValue::Int(8).coerce(ParamKind::Stepped), Some(8.0));
        assert_eq!(ParamValue::Float(8.0).coerce(ParamKind::Stepped), Some(8.0));
        assert_eq!(ParamValue::Bool(false).coerce(ParamKind::Stepped), None);
    }

    #[test]
    fn toggle_accepts_bool_and_numerics() {
        assert_eq!(ParamValue::Bool(true).coerce(ParamKind::Toggle), Some(1.0));
        assert_eq!(ParamValue::Bool(false).coerce(ParamKind::Toggle), Some(0.0));
        assert_eq!(ParamValue::Int(1).coerce(ParamKind::Toggle), Some(1.0));
        assert_eq!(ParamValue::Int(0).coerce(ParamKind::Toggle), Some(0.0));
        assert_eq!(ParamValue::Float(2.5).coerce(ParamKind::Toggle), Some(1.0));
        assert_eq!(ParamValue::Float(0.0).coerce(ParamKind::Toggle), Some(0.0));
    }

    #[test]
    fn encode_uses_native_representation() {
        assert_eq!(
            ParamValue::encode(ParamKind::Float, 0.5),
            ParamValue::Float(0.5)
        );
        assert_eq!(ParamValue::encode(ParamKind::Stepped, 8.0), ParamValue::Int(8));
        assert_eq!(
            ParamValue::encode(ParamKind::Toggle, 1.0),
            ParamValue::Bool(true)
        );
        assert_eq!(
            ParamValue::encode(ParamKind::Toggle, 0.0),
            ParamValue::Bool(false)
        );
    }

    #[test]
    fn encode_coerce_roundtrip_is_exact_for_floats() {
        // f32 -> f64 widening is lossless, so the round-trip is bit-exact.
        for &v in &[0.05f32, 640.0, 0.1, 1.0 / 3.0, -99.99] {
            let encoded = ParamValue::encode(ParamKind::Float, v);
            let back = encoded.coerce(ParamKind::Float).unwrap();
            assert_eq!(back.to_bits(), v.to_bits());
        }
    }
}
