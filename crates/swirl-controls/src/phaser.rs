//! Control bindings for one phaser effect instance.
//!
//! This module declares the phaser's fixed parameter table and wires it to
//! persistence and to the host's lifecycle notifications. There is no DSP
//! here: the signal path lives behind the [`PhaserEffect`] trait, and the
//! only derived runtime value computed on this side is the LFO phase offset
//! (degrees → radians) pushed into the effect whenever `phase` changes.

use core::f32::consts::PI;

use swirl_core::{Param, ParamScale, ParamSpec, ParamUnit};

use crate::node::{SettingsSink, SettingsSource};
use crate::registry::ControlRegistry;

/// Host lifecycle notifications relevant to the controls.
///
/// The host routes these to [`PhaserControls::handle_host_event`]; there is
/// no ambient global signal bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The global sample rate changed; sample-rate-dependent effect state
    /// (filter coefficients, LFO increments) must be recomputed.
    SampleRateChanged,
    /// The transport started or stopped; the effect's LFO restarts so the
    /// sweep is phase-aligned with playback.
    PlaybackStateChanged,
}

/// The effect-side interface the controls drive.
///
/// Implemented by the phaser's processing component (out of scope here).
/// Whatever cross-thread hand-off the effect needs between this control
/// thread and its render path is the effect's own concern.
pub trait PhaserEffect {
    /// Recompute sample-rate-dependent state.
    fn change_sample_rate(&mut self);

    /// Restart the modulation LFO from its phase offset.
    fn restart_lfo(&mut self);

    /// Set the modulation LFO's phase offset, in radians.
    fn set_lfo_offset(&mut self, radians: f32);
}

/// Persistence keys for the phaser's parameters.
pub mod keys {
    /// Allpass cutoff frequency, Hz.
    pub const CUTOFF: &str = "cutoff";
    /// Filter resonance.
    pub const RESONANCE: &str = "resonance";
    /// Feedback amount, percent (negative inverts).
    pub const FEEDBACK: &str = "feedback";
    /// Number of allpass stages.
    pub const ORDER: &str = "order";
    /// Modulation delay, ms.
    pub const DELAY: &str = "delay";
    /// LFO rate, Hz.
    pub const RATE: &str = "rate";
    /// Whether the LFO modulates the sweep.
    pub const ENABLE_LFO: &str = "enableLFO";
    /// Modulation amount, octaves.
    pub const AMOUNT: &str = "amount";
    /// Stereo LFO phase offset, degrees.
    pub const PHASE: &str = "phase";
    /// Wet/dry balance.
    pub const WET_DRY: &str = "wetDry";
    /// Input-follow amount, dB.
    pub const IN_FOLLOW: &str = "inFollow";
    /// Input-follow attack, ms.
    pub const ATTACK: &str = "attack";
    /// Input-follow release, ms.
    pub const RELEASE: &str = "release";
    /// Output gain, dB.
    pub const OUT_GAIN: &str = "outGain";
    /// Input gain, dB.
    pub const IN_GAIN: &str = "inGain";
}

/// Milliseconds per minute: display scale for tempo-synced rate knobs.
const TEMPO_SYNC_MS: f32 = 60000.0;

/// The phaser's parameter table, in serialization order.
///
/// Keys, defaults, bounds and steps are fixed; cutoff, resonance and delay
/// map their UI sliders logarithmically (storage stays linear).
const PARAMS: [ParamSpec; 15] = [
    ParamSpec::float(keys::CUTOFF, 640.0, 20.0, 20000.0, 0.01)
        .with_unit(ParamUnit::Hertz)
        .with_scale(ParamScale::Logarithmic),
    ParamSpec::float(keys::RESONANCE, 0.05, 0.05, 2.0, 0.001)
        .with_scale(ParamScale::Logarithmic),
    ParamSpec::float(keys::FEEDBACK, 0.0, -100.0, 100.0, 0.01).with_unit(ParamUnit::Percent),
    ParamSpec::stepped(keys::ORDER, 8.0, 1.0, 32.0),
    ParamSpec::float(keys::DELAY, 1.0, 1.0, 50.0, 1.0)
        .with_unit(ParamUnit::Milliseconds)
        .with_scale(ParamScale::Logarithmic),
    ParamSpec::float(keys::RATE, 10.0, 0.01, 60.0, 0.001)
        .with_unit(ParamUnit::Hertz)
        .with_unit_scale(TEMPO_SYNC_MS),
    ParamSpec::toggle(keys::ENABLE_LFO, true),
    ParamSpec::float(keys::AMOUNT, 5.0, 0.0, 5.0, 0.01),
    ParamSpec::float(keys::PHASE, 180.0, 0.0, 360.0, 0.1).with_unit(ParamUnit::Degrees),
    ParamSpec::float(keys::WET_DRY, 0.5, 0.0, 1.0, 0.01),
    ParamSpec::float(keys::IN_FOLLOW, 0.0, -15.0, 15.0, 0.01).with_unit(ParamUnit::Decibels),
    ParamSpec::float(keys::ATTACK, 500.0, 0.0, 2000.0, 1.0).with_unit(ParamUnit::Milliseconds),
    ParamSpec::float(keys::RELEASE, 500.0, 0.0, 2000.0, 1.0).with_unit(ParamUnit::Milliseconds),
    ParamSpec::float(keys::OUT_GAIN, 0.0, -60.0, 20.0, 0.01).with_unit(ParamUnit::Decibels),
    ParamSpec::float(keys::IN_GAIN, 0.0, -60.0, 20.0, 0.01).with_unit(ParamUnit::Decibels),
];

/// Settings and control bindings for one phaser instance.
///
/// Owns the parameter registry and the effect handle. The host:
///
/// - binds its UI controls to [`set`](Self::set) / [`value`](Self::value),
/// - hands a settings document to [`save`](Self::save) /
///   [`load`](Self::load) when the session is persisted or restored,
/// - routes sample-rate and transport notifications to
///   [`handle_host_event`](Self::handle_host_event).
///
/// # Example
///
/// ```rust
/// use swirl_controls::{PhaserControls, PhaserEffect, SettingsNode, keys};
///
/// struct NullEffect;
/// impl PhaserEffect for NullEffect {
///     fn change_sample_rate(&mut self) {}
///     fn restart_lfo(&mut self) {}
///     fn set_lfo_offset(&mut self, _radians: f32) {}
/// }
///
/// let mut controls = PhaserControls::new(NullEffect);
/// controls.set(keys::CUTOFF, 5000.0);
///
/// let mut node = SettingsNode::new();
/// controls.save(&mut node);
/// ```
pub struct PhaserControls<E: PhaserEffect> {
    registry: ControlRegistry<E>,
    out_peak_l: f32,
    out_peak_r: f32,
}

impl<E: PhaserEffect> PhaserControls<E> {
    /// Create the control set for one phaser instance, registering the
    /// full parameter table and the phase → LFO-offset hook.
    pub fn new(effect: E) -> Self {
        let mut registry = ControlRegistry::new(effect);
        for spec in PARAMS {
            registry.register(spec);
        }

        // Derived runtime value: whenever phase is set (UI, load,
        // programmatic), push the offset in radians to the effect's LFO
        // before the setter returns.
        registry.on_change(
            keys::PHASE,
            Box::new(|effect: &mut E, degrees| {
                effect.set_lfo_offset(degrees / 180.0 * PI);
            }),
        );

        Self {
            registry,
            out_peak_l: 0.0,
            out_peak_r: 0.0,
        }
    }

    /// Set a parameter by key. Clamps to the parameter's range; change
    /// hooks fire before this returns. Returns the stored value, or `None`
    /// for an unknown key.
    pub fn set(&mut self, key: &str, value: f32) -> Option<f32> {
        self.registry.set(key, value)
    }

    /// Current value of a parameter, or `None` for an unknown key.
    pub fn value(&self, key: &str) -> Option<f32> {
        self.registry.value(key)
    }

    /// The parameter registered under a key, or `None` if unknown.
    pub fn param(&self, key: &str) -> Option<&Param> {
        self.registry.param(key)
    }

    /// Write all parameters to the sink. See
    /// [`ControlRegistry::save`](crate::ControlRegistry::save).
    pub fn save(&self, sink: &mut dyn SettingsSink) {
        self.registry.save(sink);
    }

    /// Apply stored values from the source; absent or malformed entries
    /// leave defaults in place. The phase side effect is applied before
    /// this returns. See
    /// [`ControlRegistry::load`](crate::ControlRegistry::load).
    pub fn load(&mut self, source: &dyn SettingsSource) {
        self.registry.load(source);
    }

    /// Reset all parameters to their defaults, firing change hooks.
    pub fn reset_to_defaults(&mut self) {
        self.registry.reset_to_defaults();
    }

    /// Forward a host lifecycle notification to the effect. No parameter
    /// values change.
    pub fn handle_host_event(&mut self, event: HostEvent) {
        tracing::debug!(?event, "dispatching host event");
        match event {
            HostEvent::SampleRateChanged => self.registry.effect_mut().change_sample_rate(),
            HostEvent::PlaybackStateChanged => self.registry.effect_mut().restart_lfo(),
        }
    }

    /// Record the effect's output peak levels for UI metering.
    ///
    /// Written by the render side; plain display state, not parameters,
    /// and never persisted.
    pub fn set_out_peaks(&mut self, left: f32, right: f32) {
        self.out_peak_l = left;
        self.out_peak_r = right;
    }

    /// Last recorded output peak levels `(left, right)`.
    pub fn out_peaks(&self) -> (f32, f32) {
        (self.out_peak_l, self.out_peak_r)
    }

    /// The underlying registry, for generic parameter iteration.
    pub fn registry(&self) -> &ControlRegistry<E> {
        &self.registry
    }

    /// Exclusive access to the underlying registry.
    pub fn registry_mut(&mut self) -> &mut ControlRegistry<E> {
        &mut self.registry
    }

    /// Shared access to the effect handle.
    pub fn effect(&self) -> &E {
        self.registry.effect()
    }

    /// Exclusive access to the effect handle.
    pub fn effect_mut(&mut self) -> &mut E {
        self.registry.effect_mut()
    }
}
