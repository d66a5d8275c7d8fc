//! Loading shimmer: a soft highlight band sweeping across a view.
//!
//! The band is a five-stop horizontal gradient of one color at varying alpha,
//! translated from one view-width left of the view to one view-width right,
//! forever.

use std::time::Instant;

use veneer_engine::coords::Vec2;
use veneer_engine::paint::Color;
use veneer_engine::time::{FrameClock, FrameTime};

use crate::animation::{BasicAnimation, KeyPath, Repeat};
use crate::layer::{GradientLayer, SublayerId};
use crate::style::Styled;

/// Seconds for one full sweep.
pub const SHIMMER_DURATION: f32 = 1.5;

/// Stop offsets for clear, light, dark, light, clear.
pub const SHIMMER_LOCATIONS: [f32; 5] = [0.0, 0.3, 0.5, 0.7, 1.0];

const LIGHT_ALPHA: f32 = 0.1;
const DARK_ALPHA: f32 = 0.2;

/// Builds the shimmer band for `target` without attaching it.
///
/// The sweep starts from its left edge at host time `begin_time`.
pub fn shimmer_layer<S: Styled + ?Sized>(target: &S, color: Color, begin_time: f32) -> GradientLayer {
    let bounds = target.view().bounds();
    let clear = color.with_alpha(0.0);
    let light = color.with_alpha(LIGHT_ALPHA);
    let dark = color.with_alpha(DARK_ALPHA);

    let mut layer = GradientLayer::new();
    layer.frame = bounds;
    layer.start = Vec2::new(0.0, 1.0);
    layer.end = Vec2::new(1.0, 1.0);
    layer.colors = vec![clear, light, dark, light, clear];
    layer.locations = Some(SHIMMER_LOCATIONS.to_vec());
    layer.add_animation(
        BasicAnimation::new(KeyPath::TranslationX, -bounds.width(), bounds.width(), SHIMMER_DURATION)
            .repeat(Repeat::Forever)
            .removed_on_completion(false)
            .begin_time(begin_time),
    );
    layer
}

/// Attaches a shimmer on top of `target`'s existing sublayers, sweeping from
/// host time zero.
///
/// The sweep distance is captured from the current bounds; call again after
/// a resize (removing the old id first) to follow the new width.
pub fn add_shimmer<S: Styled + ?Sized>(target: &mut S, color: Color) -> SublayerId {
    add_shimmer_at(target, color, 0.0)
}

/// [`add_shimmer`] for a host clock already at `now` seconds: the first sweep
/// starts at the left edge on the next paint.
pub fn add_shimmer_at<S: Styled + ?Sized>(target: &mut S, color: Color, now: f32) -> SublayerId {
    let layer = shimmer_layer(target, color, now);
    let id = target.view_mut().ensure_layer().add_sublayer(layer);
    log::debug!("shimmer attached as {id:?} at t={now}");
    id
}

/// [`add_shimmer`] with the default white highlight.
pub fn add_default_shimmer<S: Styled + ?Sized>(target: &mut S) -> SublayerId {
    add_shimmer(target, Color::white())
}

/// Owns the clock that drives shimmer playback for hosts without one.
#[derive(Debug, Default)]
pub struct ShimmerDriver {
    clock: FrameClock,
}

impl ShimmerDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances one frame; pass `FrameTime::elapsed` to `Styled::paint`.
    pub fn tick(&mut self) -> FrameTime {
        self.clock.tick()
    }

    /// Advances to a host-provided timestamp, e.g. a vsync instant.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        self.clock.tick_at(now)
    }

    /// Host time to pass to [`add_shimmer_at`] and `Styled::paint`.
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Restarts the sweep from its left edge.
    pub fn restart(&mut self) {
        self.clock.reset();
    }
}
