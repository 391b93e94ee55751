//! frameplay plays back pre-baked, frame-indexed SVG animations.
//!
//! Baked data is a static scene tree plus, for every named action, one sparse attribute overlay
//! per frame. Playback never interpolates: a frame is posed by merging its overlay onto the base
//! tree by element id, and the posed tree is handed to a [`Renderer`].
//!
//! - Load [`BakedData`] from JSON
//! - Build a [`Player`] with a [`TickSource`] and a [`Renderer`]
//! - Drive it with `play` / `reverse` / `pause` / `stop` and clock ticks
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compose;
mod foundation;
mod playback;
mod render;
mod scene;
mod schema;

pub use crate::animation::registry::{ActionInfo, ActionRegistry};
pub use crate::compose::overlay::compose;
pub use crate::foundation::core::{Canvas, Fps, FrameIndex};
pub use crate::foundation::error::{FrameplayError, FrameplayResult};
pub use crate::playback::clock::{IntervalClock, ManualClock, Tick, TickSource};
pub use crate::playback::controller::{Player, PlayerBuilder};
pub use crate::playback::state::{
    Advance, ClockEffect, Command, PlaybackState, PlaybackStatus, RenderRequest, Transition,
    advance, apply, select_action,
};
pub use crate::render::raster::{FrameRGBA, rasterize_svg};
pub use crate::render::sink::{InMemoryRenderer, PosedFrame, Renderer};
pub use crate::render::svg::{SvgFrame, SvgRenderer, to_svg_markup};
pub use crate::scene::baked::{Action, BakedData, FrameOverlay};
pub use crate::scene::node::{AttributeMap, Child, ElementNode, Walk};
pub use crate::schema::version::{
    SUPPORTED_MAJOR_VERSION, check_compatible, is_compatible, parse_major,
};
