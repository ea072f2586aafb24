//! Integration tests for swirl-controls.
//!
//! These exercise the full save/load path across registry, settings node
//! and file system, the way a host session restore would.

use std::f32::consts::PI;

use swirl_controls::{HostEvent, PhaserControls, PhaserEffect, SettingsNode, keys};
use tempfile::TempDir;

/// Records every call the controls make into the effect.
#[derive(Debug, Default)]
struct MockEffect {
    sample_rate_changes: u32,
    lfo_restarts: u32,
    lfo_offsets: Vec<f32>,
}

impl PhaserEffect for MockEffect {
    fn change_sample_rate(&mut self) {
        self.sample_rate_changes += 1;
    }

    fn restart_lfo(&mut self) {
        self.lfo_restarts += 1;
    }

    fn set_lfo_offset(&mut self, radians: f32) {
        self.lfo_offsets.push(radians);
    }
}

fn controls() -> PhaserControls<MockEffect> {
    PhaserControls::new(MockEffect::default())
}

/// The session-restore scenario: edit two parameters, save, load into a
/// fresh instance, and verify edits survive while everything else stays at
/// its default.
#[test]
fn save_load_scenario_across_registries() {
    let mut first = controls();
    first.set(keys::CUTOFF, 5000.0);
    first.set(keys::ORDER, 4.0);

    let mut node = SettingsNode::new();
    first.save(&mut node);
    assert_eq!(node.len(), 15, "every parameter must always be written");

    let mut second = controls();
    second.load(&node);

    assert_eq!(second.value(keys::CUTOFF), Some(5000.0));
    assert_eq!(second.value(keys::ORDER), Some(4.0));

    // All other parameters equal their defaults.
    for param in second.registry().iter() {
        if param.key() == keys::CUTOFF || param.key() == keys::ORDER {
            continue;
        }
        assert!(
            param.is_default(),
            "parameter '{}' should still be at its default",
            param.key()
        );
    }
}

/// Save/load reproduces every value bit-for-bit, including values that have
/// no short decimal representation.
#[test]
fn roundtrip_is_bit_exact() {
    let mut original = controls();
    original.set(keys::CUTOFF, 1234.5678);
    original.set(keys::RESONANCE, 1.0 / 3.0);
    original.set(keys::FEEDBACK, -42.42);
    original.set(keys::RATE, 0.1);
    original.set(keys::PHASE, 33.3);
    original.set(keys::WET_DRY, 0.7);
    original.set(keys::ENABLE_LFO, 0.0);

    let mut node = SettingsNode::new();
    original.save(&mut node);

    // Through the textual TOML representation, not just the in-memory node.
    let toml_str = node.to_toml().unwrap();
    let parsed = SettingsNode::from_toml(&toml_str).unwrap();

    let mut restored = controls();
    restored.load(&parsed);

    for (a, b) in original.registry().iter().zip(restored.registry().iter()) {
        assert_eq!(
            a.value().to_bits(),
            b.value().to_bits(),
            "parameter '{}' did not round-trip exactly",
            a.key()
        );
    }
}

/// Stored values beyond the declared bounds are clamped on load, never
/// handed to the effect as-is.
#[test]
fn load_clamps_out_of_range_values() {
    let node = SettingsNode::from_toml(
        r#"
cutoff = 50000.0
resonance = 0.001
feedback = 250.0
order = 64
phase = 720.0
"#,
    )
    .unwrap();

    let mut restored = controls();
    restored.load(&node);

    assert_eq!(restored.value(keys::CUTOFF), Some(20000.0));
    assert_eq!(restored.value(keys::RESONANCE), Some(0.05));
    assert_eq!(restored.value(keys::FEEDBACK), Some(100.0));
    assert_eq!(restored.value(keys::ORDER), Some(32.0));
    assert_eq!(restored.value(keys::PHASE), Some(360.0));

    // The clamped phase still reached the effect, as radians.
    assert_eq!(restored.effect().lfo_offsets, vec![360.0 / 180.0 * PI]);
}

/// A document missing the "rate" key leaves rate at its default of 10 Hz.
#[test]
fn missing_rate_key_keeps_default() {
    let mut edited = controls();
    edited.set(keys::RATE, 55.0);

    let mut node = SettingsNode::new();
    edited.save(&mut node);
    assert!(node.remove("rate"));

    let mut restored = controls();
    restored.load(&node);
    assert_eq!(restored.value(keys::RATE), Some(10.0));
}

/// Malformed documents degrade to defaults; load never fails.
#[test]
fn mismatched_types_degrade_to_defaults() {
    let node = SettingsNode::from_toml(
        r#"
cutoff = "wide open"
order = [1, 2]
enableLFO = 0
wetDry = 1
"#,
    )
    .unwrap();

    let mut restored = controls();
    restored.load(&node);

    assert_eq!(restored.value(keys::CUTOFF), Some(640.0)); // string -> default
    assert_eq!(restored.value(keys::ORDER), Some(8.0)); // array -> default
    assert_eq!(restored.value(keys::ENABLE_LFO), Some(0.0)); // integer 0 -> off
    assert_eq!(restored.value(keys::WET_DRY), Some(1.0)); // integer -> float
}

/// Full on-disk round-trip through a session file.
#[test]
fn file_save_load_roundtrip() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let path = temp_dir.path().join("session").join("phaser.toml");

    let mut original = controls();
    original.set(keys::CUTOFF, 880.0);
    original.set(keys::ENABLE_LFO, 0.0);
    original.set(keys::OUT_GAIN, -6.0);

    let mut node = SettingsNode::new();
    original.save(&mut node);
    node.save(&path).expect("should save settings file");

    let loaded = SettingsNode::load(&path).expect("should load settings file");
    let mut restored = controls();
    restored.load(&loaded);

    assert_eq!(restored.value(keys::CUTOFF), Some(880.0));
    assert_eq!(restored.value(keys::ENABLE_LFO), Some(0.0));
    assert_eq!(restored.value(keys::OUT_GAIN), Some(-6.0));
}

/// The phase-derived LFO offset is applied before load returns, so a
/// render right after session restore sees consistent state.
#[test]
fn load_applies_phase_side_effect_before_returning() {
    let mut edited = controls();
    edited.set(keys::PHASE, 90.0);

    let mut node = SettingsNode::new();
    edited.save(&mut node);

    let mut restored = controls();
    restored.load(&node);

    assert_eq!(restored.effect().lfo_offsets.len(), 1);
    assert!((restored.effect().lfo_offsets[0] - PI / 2.0).abs() < 1e-6);
}

/// Host lifecycle events only ever touch the effect, not parameter state.
#[test]
fn host_events_are_pure_forwarding() {
    let mut session = controls();
    session.set(keys::CUTOFF, 5000.0);

    session.handle_host_event(HostEvent::SampleRateChanged);
    session.handle_host_event(HostEvent::PlaybackStateChanged);
    session.handle_host_event(HostEvent::PlaybackStateChanged);

    assert_eq!(session.effect().sample_rate_changes, 1);
    assert_eq!(session.effect().lfo_restarts, 2);
    assert_eq!(session.value(keys::CUTOFF), Some(5000.0));

    let mut node = SettingsNode::new();
    session.save(&mut node);
    assert_eq!(node.len(), 15);
}
