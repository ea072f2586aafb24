//! The parameter registry: an ordered, keyed parameter set bound to one
//! effect instance.

use swirl_core::{Param, ParamSpec};

use crate::node::{SettingsSink, SettingsSource};
use crate::value::ParamValue;

/// A change hook: runs synchronously inside `set` with the effect handle
/// and the value that was actually stored (after clamping).
pub type ChangeHook<E> = Box<dyn FnMut(&mut E, f32) + Send>;

/// Ordered, keyed parameter set for one effect instance.
///
/// The registry owns the parameters for its whole lifetime and the effect
/// handle `E` it configures. Parameters are registered once, at
/// construction time, and addressed by their fixed key thereafter.
///
/// # Change hooks
///
/// Hooks registered with [`on_change`](Self::on_change) fire synchronously,
/// before the setter returns, whenever their parameter's value is set - by
/// a UI binding, by [`load`](Self::load), or programmatically. Derived
/// runtime state on the effect is therefore always consistent with the
/// parameter values once any mutation path returns.
///
/// # Threading
///
/// All operations run on the host's control thread and never block. The
/// registry shares no state with the audio-rendering path; cross-thread
/// hand-off is the effect's concern.
pub struct ControlRegistry<E> {
    effect: E,
    params: Vec<Param>,
    hooks: Vec<(usize, ChangeHook<E>)>,
}

impl<E> ControlRegistry<E> {
    /// Create an empty registry bound to the given effect handle.
    pub fn new(effect: E) -> Self {
        Self {
            effect,
            params: Vec::new(),
            hooks: Vec::new(),
        }
    }

    /// Register a parameter. Returns its index in registration order.
    ///
    /// Registration order is the serialization order used by
    /// [`save`](Self::save).
    ///
    /// # Panics
    ///
    /// Panics if the key is already registered. Parameter tables are fixed
    /// at construction, so a duplicate is a programming error.
    pub fn register(&mut self, spec: ParamSpec) -> usize {
        assert!(
            self.index_of(spec.key).is_none(),
            "duplicate parameter key '{}'",
            spec.key
        );
        self.params.push(Param::new(spec));
        self.params.len() - 1
    }

    /// Register a change hook for the parameter with the given key.
    ///
    /// # Panics
    ///
    /// Panics if the key is unknown; hooks are wired at construction time
    /// against the fixed table.
    pub fn on_change(&mut self, key: &str, hook: ChangeHook<E>) {
        let Some(index) = self.index_of(key) else {
            panic!("change hook for unknown parameter key '{key}'");
        };
        self.hooks.push((index, hook));
    }

    /// Index of a key in registration order.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.params.iter().position(|p| p.key() == key)
    }

    /// Current value of a parameter, or `None` for an unknown key.
    pub fn value(&self, key: &str) -> Option<f32> {
        self.param(key).map(Param::value)
    }

    /// The parameter registered under a key, or `None` if unknown.
    pub fn param(&self, key: &str) -> Option<&Param> {
        self.index_of(key).map(|i| &self.params[i])
    }

    /// Set a parameter's value. The value is clamped to the parameter's
    /// range (and quantized for stepped parameters); change hooks for the
    /// key run before this returns. Returns the value actually stored, or
    /// `None` for an unknown key.
    pub fn set(&mut self, key: &str, value: f32) -> Option<f32> {
        let Some(index) = self.index_of(key) else {
            tracing::warn!(key, value, "set on unknown parameter key, ignoring");
            return None;
        };
        Some(self.set_index(index, value))
    }

    fn set_index(&mut self, index: usize, value: f32) -> f32 {
        let stored = self.params[index].set(value);
        if stored != value {
            tracing::debug!(
                key = self.params[index].key(),
                requested = value,
                stored,
                "parameter value clamped"
            );
        }
        self.run_hooks(index, stored);
        stored
    }

    fn run_hooks(&mut self, index: usize, value: f32) {
        for (target, hook) in &mut self.hooks {
            if *target == index {
                hook(&mut self.effect, value);
            }
        }
    }

    /// Write every parameter to the sink, in registration order. All
    /// registered parameters are always written; the serialized document
    /// fully describes the parameter state.
    pub fn save(&self, sink: &mut dyn SettingsSink) {
        for param in &self.params {
            sink.set_value(param.key(), ParamValue::encode(param.kind(), param.value()));
        }
        tracing::trace!(params = self.params.len(), "saved parameter values");
    }

    /// Apply stored values from the source.
    ///
    /// For each parameter: a present, type-compatible value is clamped and
    /// applied through the same path as [`set`](Self::set) (hooks fire); a
    /// missing key or a mismatched type leaves the default in place. By the
    /// time this returns, every value and every hook side effect has been
    /// applied, so a subsequent render sees fully consistent state.
    ///
    /// Loading never fails: malformed documents degrade to defaults.
    pub fn load(&mut self, source: &dyn SettingsSource) {
        for index in 0..self.params.len() {
            let key = self.params[index].key();
            let kind = self.params[index].kind();
            match source.get_value(key) {
                Some(stored) => match stored.coerce(kind) {
                    Some(value) => {
                        self.set_index(index, value);
                    }
                    None => {
                        tracing::warn!(
                            key,
                            stored = ?stored,
                            "type mismatch in stored parameter, keeping default"
                        );
                    }
                },
                None => {
                    tracing::trace!(key, "no stored value, keeping default");
                }
            }
        }
    }

    /// Reset every parameter to its default, firing change hooks.
    pub fn reset_to_defaults(&mut self) {
        for index in 0..self.params.len() {
            let default = self.params[index].spec().default;
            self.set_index(index, default);
        }
    }

    /// Number of registered parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the registry has no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over the parameters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.params.iter()
    }

    /// Shared access to the effect handle.
    pub fn effect(&self) -> &E {
        &self.effect
    }

    /// Exclusive access to the effect handle.
    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }
}

impl<E: core::fmt::Debug> core::fmt::Debug for ControlRegistry<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ControlRegistry")
            .field("effect", &self.effect)
            .field("params", &self.params)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
