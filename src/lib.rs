//! Tweenlab is a catalog of parameter-adjustable animation primitive demos.
//!
//! Every demo is a pure function of `(frame, parameters)`:
//!
//! - Pick a [`DemoKind`] from the [`catalog`]
//! - Open a [`DemoSession`] and drive it with [`Action`]s (parameter edits, seeks, ticks)
//! - Read the [`Preview`] and the Rust snippet that reproduces it
//!
//! The primitives themselves ([`interpolate`], [`Ease`], [`spring`], [`NoiseField`],
//! [`loop_frame`], [`FreezeWindow`] ...) are usable on their own.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod demos;
pub(crate) mod params;
pub(crate) mod preset;
pub(crate) mod timeline;

pub use crate::foundation::core::{Fps, FrameIndex, FrameRange, Point, Vec2};
pub use crate::foundation::error::{TweenlabError, TweenlabResult};

pub use crate::animation::color::{Color, ColorSpace, even_stops, interpolate_colors};
pub use crate::animation::ease::{Curve, EASING_PRESETS, Ease, EaseMode, preset as ease_preset};
pub use crate::animation::interpolate::{Extrapolate, InterpolateOpts, interpolate};
pub use crate::animation::noise::{NoiseField, Octaves, noise2d, noise3d, noise4d};
pub use crate::animation::ops::{FreezeMode, FreezeWindow, LoopMode, loop_cycle, loop_frame};
pub use crate::animation::spring::{
    SpringArgs, SpringConfig, SpringSample, settle_frame, simulate, spring,
};

pub use crate::demos::catalog::{CatalogEntry, CatalogSection, Category, catalog};
pub use crate::demos::noise::{NoiseGrid, noise_grid};
pub use crate::demos::session::{Action, DemoSession};
pub use crate::demos::{Demo, DemoKind, Preview, Readout, TOTAL_FRAMES};
pub use crate::params::schema::{ParamKind, ParamSchema, ParamSpec, ParamValue};
pub use crate::params::set::ParamSet;
pub use crate::preset::Preset;
pub use crate::timeline::driver::{FrameClock, TimelineDriver};
pub use crate::timeline::state::{TimelineAction, TimelineState};
