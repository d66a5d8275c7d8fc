//! Basic property animations attached to layers.
//!
//! Only the properties the styling layer animates are modelled. Sampling is
//! pure: the host supplies elapsed seconds (usually `FrameTime::elapsed`) and
//! gets the animated value back.

/// Animatable layer property.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KeyPath {
    /// Horizontal translation in logical pixels (`transform.translation.x`).
    TranslationX,
}

/// How many times an animation plays.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Repeat {
    Count(f32),
    Forever,
}

/// Linear `from → to` animation of a single property.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicAnimation {
    pub key_path: KeyPath,
    pub from: f32,
    pub to: f32,
    /// Seconds per cycle.
    pub duration: f32,
    pub repeat: Repeat,
    /// When `false` the final value is held after the last cycle.
    pub removed_on_completion: bool,
    /// Host time, in seconds, at which the first cycle starts.
    pub begin_time: f32,
}

impl BasicAnimation {
    pub fn new(key_path: KeyPath, from: f32, to: f32, duration: f32) -> Self {
        Self {
            key_path,
            from,
            to,
            duration,
            repeat: Repeat::Count(1.0),
            removed_on_completion: true,
            begin_time: 0.0,
        }
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn removed_on_completion(mut self, removed: bool) -> Self {
        self.removed_on_completion = removed;
        self
    }

    pub fn begin_time(mut self, begin_time: f32) -> Self {
        self.begin_time = begin_time;
        self
    }

    /// Samples the animation at host time `elapsed` (seconds on the same
    /// clock as `begin_time`).
    ///
    /// Returns `None` once a finite animation has completed and is removed.
    /// Times before `begin_time` sample as the start value.
    pub fn value_at(&self, elapsed: f32) -> Option<f32> {
        if self.duration.is_nan() || self.duration <= 0.0 {
            return Some(self.to);
        }
        let local = (elapsed - self.begin_time).max(0.0);
        let cycles = local / self.duration;

        let progress = match self.repeat {
            Repeat::Forever => cycles.fract(),
            Repeat::Count(count) if cycles < count => cycles.fract(),
            Repeat::Count(_) if self.removed_on_completion => return None,
            Repeat::Count(count) => {
                let p = count.fract();
                if p == 0.0 { 1.0 } else { p }
            }
        };

        Some(self.from + (self.to - self.from) * progress)
    }

    #[inline]
    pub fn is_finished(&self, elapsed: f32) -> bool {
        match self.repeat {
            Repeat::Forever => false,
            Repeat::Count(count) => elapsed - self.begin_time >= count * self.duration,
        }
    }
}
