//! Swirl Core - parameter model for effect control layers.
//!
//! This crate provides the value types behind an effect's control surface:
//! a flat, const-constructible parameter descriptor ([`ParamSpec`]) and a
//! value-holding parameter ([`Param`]) whose mutations are always clamped to
//! the declared range.
//!
//! # Core Types
//!
//! - [`ParamSpec`] - key, default, bounds, step, kind, unit and display scale
//! - [`Param`] - a spec plus the current value; `set` clamps and, for stepped
//!   parameters, quantizes to the step grid
//! - [`ParamScale`] - display-only mapping hint for UI sliders (linear or
//!   logarithmic); stored values and bounds stay linear
//! - [`ParamKind`] - how the parameter serializes (float, stepped integer,
//!   boolean toggle)
//!
//! # Invariants
//!
//! A `Param`'s value lies in `[min, max]` at all times. There is no
//! unchecked mutation path: construction applies the default through the
//! same constraining logic as `set`.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! swirl-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use swirl_core::{Param, ParamSpec, ParamScale, ParamUnit};
//!
//! const CUTOFF: ParamSpec = ParamSpec::float("cutoff", 640.0, 20.0, 20000.0, 0.01)
//!     .with_unit(ParamUnit::Hertz)
//!     .with_scale(ParamScale::Logarithmic);
//!
//! let mut cutoff = Param::new(CUTOFF);
//! assert_eq!(cutoff.value(), 640.0);
//!
//! cutoff.set(50000.0);
//! assert_eq!(cutoff.value(), 20000.0); // clamped to max
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod param;
mod spec;

pub use param::Param;
pub use spec::{ParamKind, ParamScale, ParamSpec, ParamUnit};
