//! Swirl Controls - settings and control bindings for the swirl phaser.
//!
//! This crate is the control-thread side of one phaser effect instance
//! inside an audio host. It owns the effect's fixed parameter table, wires
//! it to persistence, and forwards the host's lifecycle notifications to
//! the effect. The signal path itself lives elsewhere, behind the
//! [`PhaserEffect`] trait.
//!
//! # Pieces
//!
//! - [`ControlRegistry`] - ordered, keyed parameter set with synchronous
//!   per-key change hooks and save/load against sink/source traits
//! - [`PhaserControls`] - the concrete phaser table (cutoff, resonance,
//!   feedback, order, delay, rate, enableLFO, amount, phase, wetDry,
//!   inFollow, attack, release, outGain, inGain), the phase → LFO-offset
//!   hook, host-event dispatch, and output peak meters
//! - [`SettingsNode`] - a TOML-backed key/value document implementing both
//!   [`SettingsSink`] and [`SettingsSource`]
//! - [`SettingsError`] - file/TOML-level failures; parameter loading itself
//!   never fails (defaults and clamping absorb malformed documents)
//!
//! # Example
//!
//! ```rust
//! use swirl_controls::{HostEvent, PhaserControls, PhaserEffect, SettingsNode, keys};
//!
//! struct NullEffect;
//! impl PhaserEffect for NullEffect {
//!     fn change_sample_rate(&mut self) {}
//!     fn restart_lfo(&mut self) {}
//!     fn set_lfo_offset(&mut self, _radians: f32) {}
//! }
//!
//! let mut controls = PhaserControls::new(NullEffect);
//!
//! // UI binding
//! controls.set(keys::CUTOFF, 5000.0);
//!
//! // Session save/restore
//! let mut node = SettingsNode::new();
//! controls.save(&mut node);
//! let mut restored = PhaserControls::new(NullEffect);
//! restored.load(&node);
//! assert_eq!(restored.value(keys::CUTOFF), Some(5000.0));
//!
//! // Host lifecycle
//! controls.handle_host_event(HostEvent::SampleRateChanged);
//! ```

mod error;
mod node;
mod phaser;
mod registry;
mod value;

pub use error::SettingsError;
pub use node::{SettingsNode, SettingsSink, SettingsSource};
pub use phaser::{HostEvent, PhaserControls, PhaserEffect, keys};
pub use registry::{ChangeHook, ControlRegistry};
pub use value::ParamValue;

/// Re-export of the parameter model this crate builds on.
pub use swirl_core::{Param, ParamKind, ParamScale, ParamSpec, ParamUnit};
